//! Visual tokens

use card_core::Color;

/// Tailwind / shadcn reference colors used by the built-in themes
pub mod tailwind {
    use card_core::Color;

    pub const WHITE: Color = Color::from_hex(0xffffff);
    pub const GRAY_200: Color = Color::from_hex(0xe5e7eb);
    pub const GRAY_500: Color = Color::from_hex(0x6b7280);
    pub const GRAY_600: Color = Color::from_hex(0x4b5563);
    pub const GRAY_950: Color = Color::from_hex(0x0a0a0a);
    pub const RED_600: Color = Color::from_hex(0xdc2626);
    pub const BLUE_500: Color = Color::from_hex(0x3b82f6);
    pub const VIOLET_500: Color = Color::from_hex(0x8b5cf6);
    pub const PINK_500: Color = Color::from_hex(0xec4899);
    pub const BLUE_400: Color = Color::from_hex(0x60a5fa);
    pub const VIOLET_400: Color = Color::from_hex(0xa78bfa);
    pub const PINK_400: Color = Color::from_hex(0xf472b6);
    pub const VERIZON_RED: Color = Color::from_hex(0xee0000);
    pub const BLUE_800: Color = Color::from_hex(0x1e40af);

    // shadcn dark surfaces
    pub const DARK_BACKGROUND: Color = Color::from_hex(0x0a0a0a);
    pub const DARK_CARD: Color = Color::from_hex(0x171717);
    pub const DARK_MUTED: Color = Color::from_hex(0x262626);
    pub const DARK_MUTED_FOREGROUND: Color = Color::from_hex(0xa1a1a1);
    pub const DARK_FOREGROUND: Color = Color::from_hex(0xfafafa);
}

/// Animated gradient border drawn around the card
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BorderStyle {
    pub colors: [Color; 3],
    pub width: f32,
}

/// Immutable bundle of visual tokens for one theme
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    /// Page background behind the card
    pub background: Color,
    /// Card surface
    pub card: Color,
    /// Secondary text (titles, descriptions, hints)
    pub accent: Color,
    pub border: BorderStyle,
    /// Unfilled part of the strength sliders
    pub slider_track: Color,
    /// Primary text
    pub foreground: Color,
    /// Placeholder and disabled text
    pub muted_foreground: Color,
    /// Input field background
    pub input: Color,
}
