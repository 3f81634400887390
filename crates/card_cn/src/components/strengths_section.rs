//! Strengths section - heading, and per strength an icon label, a value
//! badge, and an animated slider

use card_core::Rect;
use card_paint::FontWeight;
use card_state::StrengthCategory;

use crate::components::glyph::{paint_glyph, Glyph};
use crate::components::slider::{AnimatedSlider, SliderAnimations};
use crate::layout::{ICON_SIZE, SLIDER_HEIGHT};
use crate::scene::{Element, ElementKind, SceneBuilder, TextStyle};

pub const HEADING: &str = "Strengths";
pub const BADGE: &str = "Character Stats";

const HEADER_HEIGHT: f32 = 24.0;
const ROW_HEIGHT: f32 = 20.0;
const ITEM_GAP: f32 = 16.0;
const ROW_GAP: f32 = 8.0;
const BADGE_HEIGHT: f32 = 20.0;

/// Element id of a strength's slider
pub fn slider_id(strength_id: &str) -> String {
    format!("strength-{strength_id}-slider")
}

/// Strength id from a slider element id
pub fn strength_for_slider(element_id: &str) -> Option<&str> {
    element_id
        .strip_prefix("strength-")
        .and_then(|rest| rest.strip_suffix("-slider"))
}

/// Paint the section at `top`. Returns its height.
pub fn strengths_section(
    builder: &mut SceneBuilder<'_>,
    strengths: &[StrengthCategory; 4],
    sliders: &SliderAnimations,
    x: f32,
    top: f32,
    width: f32,
) -> f32 {
    let theme = builder.theme();
    let mut y = top;

    builder.text_in_row(
        HEADING,
        x,
        (y, HEADER_HEIGHT),
        TextStyle::new(16.0, theme.foreground).bold(),
    );
    builder.push(
        Element::new("strengths-heading", ElementKind::Text, Rect::new(x, y, width, HEADER_HEIGHT))
            .text(HEADING),
    );

    // Secondary badge with a star
    let badge_text = builder.text_width(BADGE, 12.0, FontWeight::Medium);
    let badge_width = badge_text + 12.0 + 4.0 + 16.0;
    let badge = Rect::new(
        x + width - badge_width,
        y + (HEADER_HEIGHT - BADGE_HEIGHT) / 2.0,
        badge_width,
        BADGE_HEIGHT,
    );
    builder
        .ctx
        .fill_rounded_rect(badge.x, badge.y, badge.width, badge.height, 6.0, theme.input);
    paint_glyph(
        &mut builder.ctx,
        Glyph::Star,
        Rect::new(badge.x + 8.0, badge.y + 4.0, 12.0, 12.0),
        theme.accent,
    );
    builder.text_in_row(
        BADGE,
        badge.x + 24.0,
        (badge.y, badge.height),
        TextStyle::new(12.0, theme.foreground).medium(),
    );
    builder.push(Element::new("strengths-badge", ElementKind::Badge, badge).text(BADGE));
    y += HEADER_HEIGHT + ITEM_GAP;

    for (ordinal, strength) in strengths.iter().enumerate() {
        y += strength_item(builder, strength, sliders.fraction(ordinal), x, y, width);
        if ordinal + 1 < strengths.len() {
            y += ITEM_GAP;
        }
    }

    y - top
}

fn strength_item(
    builder: &mut SceneBuilder<'_>,
    strength: &StrengthCategory,
    fill: f32,
    x: f32,
    top: f32,
    width: f32,
) -> f32 {
    let theme = builder.theme();

    // Icon and name
    paint_glyph(
        &mut builder.ctx,
        Glyph::Strength(strength.icon),
        Rect::new(x, top + (ROW_HEIGHT - ICON_SIZE) / 2.0, ICON_SIZE, ICON_SIZE),
        strength.color,
    );
    let label_x = x + ICON_SIZE + 8.0;
    builder.text_in_row(
        strength.name,
        label_x,
        (top, ROW_HEIGHT),
        TextStyle::new(14.0, theme.foreground).medium(),
    );
    let label_width = builder.text_width(strength.name, 14.0, FontWeight::Medium);
    let label = Rect::new(x, top, label_x - x + label_width, ROW_HEIGHT);
    builder.push(
        Element::new(format!("strength-{}", strength.id), ElementKind::Text, label)
            .text(strength.name)
            .color(strength.color),
    );
    builder.push(
        Element::new(format!("strength-{}-tooltip", strength.id), ElementKind::Tooltip, label)
            .text(strength.description),
    );

    // Outline value badge
    let value = strength.value.to_string();
    let value_width = builder.text_width(&value, 12.0, FontWeight::Bold);
    let badge_width = (value_width + 16.0).max(24.0);
    let badge = Rect::new(
        x + width - badge_width,
        top + (ROW_HEIGHT - BADGE_HEIGHT) / 2.0,
        badge_width,
        BADGE_HEIGHT,
    );
    builder
        .ctx
        .stroke_rounded_rect(badge, 6.0, 1.0, strength.color);
    builder.text_centered(
        &value,
        badge.center().x,
        (badge.y, badge.height),
        TextStyle::new(12.0, strength.color).bold(),
    );
    builder.push(
        Element::new(format!("strength-{}-value", strength.id), ElementKind::Badge, badge)
            .text(&value)
            .color(strength.color),
    );

    // Slider
    let track = Rect::new(x, top + ROW_HEIGHT + ROW_GAP, width, SLIDER_HEIGHT);
    AnimatedSlider::new(strength.value, strength.color)
        .fill(fill)
        .paint(builder, &slider_id(strength.id), track);

    ROW_HEIGHT + ROW_GAP + SLIDER_HEIGHT
}
