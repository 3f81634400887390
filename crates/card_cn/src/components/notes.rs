//! Succession notes - heading and the manager's notes textarea

use card_core::Rect;
use card_text::wrap_text;

use crate::scene::{Element, ElementKind, SceneBuilder, TextStyle};

pub const HEADING: &str = "Succession Profile";
pub const PLACEHOLDER: &str = "Manager's notes and development areas...";

const HEADER_HEIGHT: f32 = 24.0;
const TEXT_SIZE: f32 = 14.0;
const MIN_ROWS: usize = 3;
const PADDING: f32 = 12.0;

/// Paint the notes block at `top`. Returns its height.
pub fn notes(builder: &mut SceneBuilder<'_>, text: &str, x: f32, top: f32, width: f32) -> f32 {
    let theme = builder.theme();

    builder.text_in_row(
        HEADING,
        x,
        (top, HEADER_HEIGHT),
        TextStyle::new(16.0, theme.foreground).bold(),
    );
    builder.push(
        Element::new("notes-heading", ElementKind::Text, Rect::new(x, top, width, HEADER_HEIGHT))
            .text(HEADING),
    );

    let area_top = top + HEADER_HEIGHT + 12.0;
    let line_height = builder.line_height(TEXT_SIZE);
    let (shown, color) = if text.is_empty() {
        (PLACEHOLDER, theme.muted_foreground)
    } else {
        (text, theme.foreground)
    };
    let lines = wrap_text(shown, width - PADDING * 2.0, TEXT_SIZE, 400, builder.measurer());
    let rows = lines.len().max(MIN_ROWS);
    let area = Rect::new(x, area_top, width, rows as f32 * line_height + PADDING * 2.0);

    builder
        .ctx
        .fill_rounded_rect(area.x, area.y, area.width, area.height, 8.0, theme.input);
    let mut line_top = area.y + PADDING;
    for line in &lines {
        builder.text_in_row(
            line,
            area.x + PADDING,
            (line_top, line_height),
            TextStyle::new(TEXT_SIZE, color),
        );
        line_top += line_height;
    }
    builder.push(
        Element::new("notes-input", ElementKind::Input, area)
            .text(text)
            .placeholder(PLACEHOLDER),
    );

    area.bottom() - top
}
