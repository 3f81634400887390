//! Profile header - avatar drop zone, upload button, and the name, title,
//! and description inputs

use card_core::{Color, Point, Rect};
use card_paint::{Bitmap, Gradient, Shadow};
use card_state::ProfileData;
use card_text::wrap_text;

use crate::components::glyph::{paint_glyph, Glyph};
use crate::layout::AVATAR_SIZE;
use crate::scene::{Element, ElementKind, SceneBuilder, TextStyle};

pub const NAME_PLACEHOLDER: &str = "Employee Name";
pub const TITLE_PLACEHOLDER: &str = "Job Title";
pub const DESCRIPTION_PLACEHOLDER: &str = "Brief description...";
/// Round button on the avatar that opens the host file picker
pub const UPLOAD_ID: &str = "upload-button";

const UPLOAD_BUTTON: f32 = 32.0;
const DRAG_SCALE: f32 = 1.05;
const FIELD_GAP: f32 = 8.0;
const NAME_HEIGHT: f32 = 40.0;
const TITLE_HEIGHT: f32 = 36.0;
const DESCRIPTION_SIZE: f32 = 14.0;
const DESCRIPTION_MIN_ROWS: usize = 2;
const INPUT_PADDING_Y: f32 = 8.0;

const FALLBACK_FROM: Color = Color::from_hex(0xede9fe);
const FALLBACK_TO: Color = Color::from_hex(0xfce7f3);
const FALLBACK_TEXT: Color = Color::from_hex(0x6d28d9);

/// First character of each space-separated part of the name
pub fn initials(name: &str) -> String {
    name.split(' ').filter_map(|part| part.chars().next()).collect()
}

/// Inputs for the header view
pub struct HeaderProps<'p> {
    pub profile: &'p ProfileData,
    /// Decoded avatar; `None` shows the initials fallback
    pub avatar: Option<Bitmap>,
    /// A drag is hovering over the avatar
    pub drag_active: bool,
}

/// Paint the header at `top` across `[x, x + width]`. Returns its height.
pub fn profile_header(
    builder: &mut SceneBuilder<'_>,
    props: HeaderProps<'_>,
    x: f32,
    top: f32,
    width: f32,
) -> f32 {
    let center_x = x + width / 2.0;
    let avatar_height = paint_avatar(builder, &props, center_x, top);

    let theme = builder.theme();
    let profile = props.profile;
    let mut y = top + avatar_height + 24.0;

    // Name
    let name_row = Rect::new(x, y, width, NAME_HEIGHT);
    input_text(
        builder,
        &profile.name,
        NAME_PLACEHOLDER,
        center_x,
        name_row,
        TextStyle::new(24.0, theme.foreground).bold(),
    );
    builder.push(
        Element::new("name-input", ElementKind::Input, name_row)
            .text(&profile.name)
            .placeholder(NAME_PLACEHOLDER),
    );
    y += NAME_HEIGHT + FIELD_GAP;

    // Title
    let title_row = Rect::new(x, y, width, TITLE_HEIGHT);
    input_text(
        builder,
        &profile.title,
        TITLE_PLACEHOLDER,
        center_x,
        title_row,
        TextStyle::new(16.0, theme.muted_foreground),
    );
    builder.push(
        Element::new("title-input", ElementKind::Input, title_row)
            .text(&profile.title)
            .placeholder(TITLE_PLACEHOLDER),
    );
    y += TITLE_HEIGHT + FIELD_GAP;

    // Description, wrapped and centered; at least two rows tall
    let line_height = builder.line_height(DESCRIPTION_SIZE);
    let shown = if profile.description.is_empty() {
        DESCRIPTION_PLACEHOLDER
    } else {
        profile.description.as_str()
    };
    let color = if profile.description.is_empty() {
        theme.muted_foreground.with_alpha(0.6)
    } else {
        theme.muted_foreground
    };
    let lines = wrap_text(
        shown,
        width - 24.0,
        DESCRIPTION_SIZE,
        400,
        builder.measurer(),
    );
    let rows = lines.len().max(DESCRIPTION_MIN_ROWS);
    let description_height = rows as f32 * line_height + INPUT_PADDING_Y * 2.0;
    let mut line_top = y + INPUT_PADDING_Y;
    for line in &lines {
        builder.text_centered(
            line,
            center_x,
            (line_top, line_height),
            TextStyle::new(DESCRIPTION_SIZE, color),
        );
        line_top += line_height;
    }
    builder.push(
        Element::new(
            "description-input",
            ElementKind::Input,
            Rect::new(x, y, width, description_height),
        )
        .text(&profile.description)
        .placeholder(DESCRIPTION_PLACEHOLDER),
    );
    y += description_height;

    y - top
}

/// Single-line centered input text, or its placeholder when empty
fn input_text(
    builder: &mut SceneBuilder<'_>,
    value: &str,
    placeholder: &str,
    center_x: f32,
    row: Rect,
    style: TextStyle,
) {
    if value.is_empty() {
        let muted = builder.theme().muted_foreground.with_alpha(0.6);
        builder.text_centered(placeholder, center_x, (row.y, row.height), TextStyle { color: muted, ..style });
    } else {
        builder.text_centered(value, center_x, (row.y, row.height), style);
    }
}

fn paint_avatar(builder: &mut SceneBuilder<'_>, props: &HeaderProps<'_>, center_x: f32, top: f32) -> f32 {
    let size = if props.drag_active {
        AVATAR_SIZE * DRAG_SCALE
    } else {
        AVATAR_SIZE
    };
    let center = Point::new(center_x, top + AVATAR_SIZE / 2.0);
    let radius = size / 2.0;
    let rect = Rect::new(center.x - radius, center.y - radius, size, size);

    builder.ctx.draw_shadow(
        rect,
        radius,
        Shadow {
            offset_y: 10.0,
            blur_radius: 15.0,
            color: Color::new(0.0, 0.0, 0.0, 0.1),
        },
    );

    let element = match &props.avatar {
        Some(bitmap) => {
            builder.ctx.draw_image(rect, radius, bitmap.clone());
            Element::new("avatar", ElementKind::Image, rect)
        }
        None => {
            let gradient = Gradient::linear(
                Point::new(rect.x, rect.y),
                Point::new(rect.right(), rect.bottom()),
                &[FALLBACK_FROM, FALLBACK_TO],
            );
            builder.ctx.fill_circle(center.x, center.y, radius, gradient);
            let initials = initials(&props.profile.name);
            builder.text_centered(
                &initials,
                center.x,
                (rect.y, rect.height),
                TextStyle::new(24.0, FALLBACK_TEXT).medium(),
            );
            Element::new("avatar", ElementKind::Text, rect).text(initials)
        }
    };
    // border-4 white
    builder
        .ctx
        .stroke_circle(center.x, center.y, radius - 2.0, Color::WHITE, 4.0);
    builder.push(element.active(props.drag_active));

    // Upload button overlapping the lower right edge
    let button = Rect::new(
        rect.right() - UPLOAD_BUTTON + 8.0,
        rect.bottom() - UPLOAD_BUTTON + 8.0,
        UPLOAD_BUTTON,
        UPLOAD_BUTTON,
    );
    let theme = builder.theme();
    builder.ctx.draw_shadow(button, UPLOAD_BUTTON / 2.0, Shadow::sm());
    builder.ctx.fill_circle(
        button.center().x,
        button.center().y,
        UPLOAD_BUTTON / 2.0,
        theme.foreground,
    );
    paint_glyph(&mut builder.ctx, Glyph::Upload, button.inset(10.0), theme.card);
    builder.push(Element::new(UPLOAD_ID, ElementKind::Button, button).text("Upload photo"));

    AVATAR_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials_follow_single_space_split() {
        assert_eq!(initials("Aria Montgomery"), "AM");
        assert_eq!(initials("jo  ann"), "ja");
        assert_eq!(initials(""), "");
        assert_eq!(initials("Prince"), "P");
    }
}
