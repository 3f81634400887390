//! Button primitive shared by the switcher and the action row

use card_core::{Color, Rect};
use card_paint::FontWeight;

use crate::components::glyph::{paint_glyph, paint_spinner, Glyph};
use crate::layout::{BUTTON_RADIUS, ICON_SIZE};
use crate::scene::{Element, ElementKind, SceneBuilder, TextStyle};

/// Button variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Filled with the theme's foreground color
    #[default]
    Primary,
    /// Card-colored with a hairline border
    Outline,
}

/// What sits left of the label
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Leading {
    Glyph(Glyph),
    /// Rotating spinner at the given angle in degrees
    Spinner(f32),
}

/// A labelled button
#[derive(Clone, Debug)]
pub struct Button<'s> {
    pub id: &'s str,
    pub label: &'s str,
    pub variant: ButtonVariant,
    pub leading: Option<Leading>,
    pub text_size: f32,
    pub disabled: bool,
    pub active: bool,
}

const PADDING_X: f32 = 16.0;
const ICON_GAP: f32 = 8.0;

impl<'s> Button<'s> {
    pub fn new(id: &'s str, label: &'s str) -> Self {
        Self {
            id,
            label,
            variant: ButtonVariant::Primary,
            leading: None,
            text_size: 14.0,
            disabled: false,
            active: false,
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn leading(mut self, leading: Leading) -> Self {
        self.leading = Some(leading);
        self
    }

    pub fn text_size(mut self, size: f32) -> Self {
        self.text_size = size;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    fn icon_size(&self) -> f32 {
        (self.text_size - 2.0).min(ICON_SIZE)
    }

    /// Natural width for the label and leading glyph
    pub fn measure(&self, builder: &SceneBuilder<'_>) -> f32 {
        let label = builder.text_width(self.label, self.text_size, FontWeight::Medium);
        let icon = if self.leading.is_some() {
            self.icon_size() + ICON_GAP
        } else {
            0.0
        };
        PADDING_X * 2.0 + icon + label
    }

    /// Paint into `rect` and register the element
    pub fn paint(&self, builder: &mut SceneBuilder<'_>, rect: Rect) {
        let theme = builder.theme();
        let (fill, text_color, border) = match self.variant {
            ButtonVariant::Primary => (theme.foreground, theme.card, None),
            ButtonVariant::Outline => (theme.card, theme.foreground, Some(theme.slider_track)),
        };
        let fade = |c: Color| if self.disabled { c.with_alpha(c.a * 0.5) } else { c };

        builder.ctx.fill_rounded_rect(
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            BUTTON_RADIUS,
            fade(fill),
        );
        if let Some(border) = border {
            builder
                .ctx
                .stroke_rounded_rect(rect, BUTTON_RADIUS, 1.0, fade(border));
        }

        let content = self.measure(builder) - PADDING_X * 2.0;
        let mut x = rect.x + (rect.width - content) / 2.0;
        if let Some(leading) = self.leading {
            let size = self.icon_size();
            let icon = Rect::new(x, rect.y + (rect.height - size) / 2.0, size, size);
            match leading {
                Leading::Glyph(glyph) => paint_glyph(&mut builder.ctx, glyph, icon, fade(text_color)),
                Leading::Spinner(angle) => {
                    paint_spinner(&mut builder.ctx, icon, fade(text_color), angle);
                    builder.push(
                        Element::new(format!("{}-spinner", self.id), ElementKind::Spinner, icon)
                            .value(angle),
                    );
                }
            }
            x += size + ICON_GAP;
        }
        builder.text_in_row(
            self.label,
            x,
            (rect.y, rect.height),
            TextStyle::new(self.text_size, fade(text_color)).medium(),
        );

        builder.push(
            Element::new(self.id, ElementKind::Button, rect)
                .text(self.label)
                .active(self.active)
                .disabled(self.disabled),
        );
    }
}
