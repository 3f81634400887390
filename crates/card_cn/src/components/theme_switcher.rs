//! Theme switcher - one button per theme, the active one filled

use card_core::Rect;
use card_theme::ThemeName;

use crate::components::button::{Button, ButtonVariant, Leading};
use crate::components::glyph::Glyph;
use crate::layout::BUTTON_HEIGHT_SM;
use crate::scene::{Element, ElementKind, SceneBuilder};

const GAP: f32 = 8.0;

/// Element id of a theme's button
pub fn theme_button_id(theme: ThemeName) -> String {
    format!("theme-{}", theme.id().replace(' ', "-"))
}

/// Theme named by a switcher button id
pub fn theme_for_button(id: &str) -> Option<ThemeName> {
    ThemeName::all()
        .iter()
        .copied()
        .find(|theme| theme_button_id(*theme) == id)
}

/// Paint the switcher row centered on `center_x`. Returns its height.
pub fn theme_switcher(
    builder: &mut SceneBuilder<'_>,
    active: ThemeName,
    center_x: f32,
    top: f32,
) -> f32 {
    let ids: Vec<String> = ThemeName::all().iter().map(|t| theme_button_id(*t)).collect();
    let buttons: Vec<Button<'_>> = ThemeName::all()
        .iter()
        .zip(&ids)
        .map(|(theme, id)| {
            Button::new(id, theme.display_name())
                .variant(if *theme == active {
                    ButtonVariant::Primary
                } else {
                    ButtonVariant::Outline
                })
                .leading(Leading::Glyph(Glyph::Palette))
                .text_size(12.0)
                .active(*theme == active)
        })
        .collect();

    let widths: Vec<f32> = buttons.iter().map(|b| b.measure(builder)).collect();
    let total = widths.iter().sum::<f32>() + GAP * (buttons.len().saturating_sub(1)) as f32;

    let mut x = center_x - total / 2.0;
    for (button, width) in buttons.iter().zip(&widths) {
        button.paint(builder, Rect::new(x, top, *width, BUTTON_HEIGHT_SM));
        x += width + GAP;
    }

    builder.push(Element::new(
        "theme-switcher",
        ElementKind::Container,
        Rect::new(center_x - total / 2.0, top, total, BUTTON_HEIGHT_SM),
    ));
    BUTTON_HEIGHT_SM
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_ids_round_trip() {
        assert_eq!(theme_button_id(ThemeName::DarkMode), "theme-dark-mode");
        for theme in ThemeName::all() {
            assert_eq!(theme_for_button(&theme_button_id(*theme)), Some(*theme));
        }
        assert_eq!(theme_for_button("theme-neon"), None);
    }
}
