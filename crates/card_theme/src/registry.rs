//! Static theme registry

use card_core::Color;

use crate::name::ThemeName;
use crate::tokens::{tailwind, BorderStyle, Theme};

/// Four strength colors, indexed by catalog ordinal
pub type Palette = [Color; 4];

static MINIMAL: Theme = Theme {
    background: tailwind::WHITE,
    card: tailwind::WHITE,
    accent: tailwind::GRAY_600,
    border: BorderStyle {
        colors: [tailwind::BLUE_500, tailwind::VIOLET_500, tailwind::PINK_500],
        width: 2.0,
    },
    slider_track: tailwind::GRAY_200,
    foreground: tailwind::GRAY_950,
    muted_foreground: tailwind::GRAY_500,
    input: Color::from_hex(0xf3f3f5),
};

static DARK_MODE: Theme = Theme {
    background: tailwind::DARK_BACKGROUND,
    card: tailwind::DARK_CARD,
    accent: tailwind::DARK_MUTED_FOREGROUND,
    border: BorderStyle {
        colors: [tailwind::BLUE_400, tailwind::VIOLET_400, tailwind::PINK_400],
        width: 2.0,
    },
    slider_track: tailwind::DARK_MUTED,
    foreground: tailwind::DARK_FOREGROUND,
    muted_foreground: tailwind::DARK_MUTED_FOREGROUND,
    input: tailwind::DARK_MUTED,
};

static VERIZON: Theme = Theme {
    background: tailwind::WHITE,
    card: tailwind::WHITE,
    accent: tailwind::RED_600,
    border: BorderStyle {
        colors: [tailwind::VERIZON_RED, tailwind::GRAY_950, tailwind::VERIZON_RED],
        width: 2.0,
    },
    slider_track: tailwind::GRAY_200,
    foreground: tailwind::GRAY_950,
    muted_foreground: tailwind::GRAY_500,
    input: Color::from_hex(0xf3f3f5),
};

const MINIMAL_PALETTE: Palette = [
    Color::from_hex(0x3b82f6),
    Color::from_hex(0x8b5cf6),
    Color::from_hex(0xec4899),
    Color::from_hex(0x10b981),
];

const DARK_MODE_PALETTE: Palette = [
    Color::from_hex(0x60a5fa),
    Color::from_hex(0xa78bfa),
    Color::from_hex(0xf472b6),
    Color::from_hex(0x34d399),
];

const VERIZON_PALETTE: Palette = [
    Color::from_hex(0xEE0000),
    Color::from_hex(0x000000),
    Color::from_hex(0x1E40AF),
    Color::from_hex(0x6B7280),
];

/// Visual tokens for a theme
pub fn lookup(name: ThemeName) -> &'static Theme {
    match name {
        ThemeName::Minimal => &MINIMAL,
        ThemeName::DarkMode => &DARK_MODE,
        ThemeName::Verizon => &VERIZON,
    }
}

/// Strength colors for a theme, in catalog order
pub fn palette_for(name: ThemeName) -> Palette {
    match name {
        ThemeName::Minimal => MINIMAL_PALETTE,
        ThemeName::DarkMode => DARK_MODE_PALETTE,
        ThemeName::Verizon => VERIZON_PALETTE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_mode_uses_dark_surfaces() {
        let theme = lookup(ThemeName::DarkMode);
        assert_eq!(theme.card, tailwind::DARK_CARD);
        assert_ne!(theme.foreground, lookup(ThemeName::Minimal).foreground);
    }

    #[test]
    fn test_verizon_accent_is_red() {
        assert_eq!(lookup(ThemeName::Verizon).accent, tailwind::RED_600);
    }
}
