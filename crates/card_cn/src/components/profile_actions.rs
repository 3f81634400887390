//! Profile actions - Randomize and Download PNG
//!
//! While an export is running the download button is disabled and shows a
//! spinning save glyph with the label `Generating...`.

use card_core::Rect;

use crate::components::button::{Button, ButtonVariant, Leading};
use crate::components::glyph::Glyph;
use crate::layout::BUTTON_HEIGHT;
use crate::scene::{Element, ElementKind, SceneBuilder};

pub const RANDOMIZE_ID: &str = "randomize-button";
pub const DOWNLOAD_ID: &str = "download-button";
pub const RANDOMIZE_LABEL: &str = "Randomize";
pub const DOWNLOAD_LABEL: &str = "Download PNG";
pub const GENERATING_LABEL: &str = "Generating...";

const GAP: f32 = 8.0;
/// Spinner speed, one turn per second
const DEGREES_PER_SECOND: f32 = 360.0;

/// Rotation of the download spinner
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Spinner {
    angle: f32,
}

impl Spinner {
    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn advance(&mut self, dt: f32) {
        self.angle = (self.angle + dt * DEGREES_PER_SECOND).rem_euclid(360.0);
    }

    pub fn reset(&mut self) {
        self.angle = 0.0;
    }
}

/// Paint the action row centered on `center_x`. Returns its height.
pub fn profile_actions(
    builder: &mut SceneBuilder<'_>,
    downloading: bool,
    spinner: Spinner,
    center_x: f32,
    top: f32,
) -> f32 {
    let randomize = Button::new(RANDOMIZE_ID, RANDOMIZE_LABEL)
        .variant(ButtonVariant::Outline)
        .leading(Leading::Glyph(Glyph::Shuffle));
    let download = if downloading {
        Button::new(DOWNLOAD_ID, GENERATING_LABEL)
            .leading(Leading::Spinner(spinner.angle()))
            .disabled(true)
    } else {
        Button::new(DOWNLOAD_ID, DOWNLOAD_LABEL).leading(Leading::Glyph(Glyph::Download))
    };

    let randomize_width = randomize.measure(builder);
    let download_width = download.measure(builder);
    let total = randomize_width + GAP + download_width;
    let left = center_x - total / 2.0;

    randomize.paint(builder, Rect::new(left, top, randomize_width, BUTTON_HEIGHT));
    download.paint(
        builder,
        Rect::new(left + randomize_width + GAP, top, download_width, BUTTON_HEIGHT),
    );
    builder.push(Element::new(
        "profile-actions",
        ElementKind::Container,
        Rect::new(left, top, total, BUTTON_HEIGHT),
    ));
    BUTTON_HEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_wraps() {
        let mut spinner = Spinner::default();
        spinner.advance(0.25);
        assert_eq!(spinner.angle(), 90.0);
        spinner.advance(1.0);
        assert_eq!(spinner.angle(), 90.0);
        spinner.reset();
        assert_eq!(spinner.angle(), 0.0);
    }
}
