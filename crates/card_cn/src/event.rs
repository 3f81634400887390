//! Interaction events and click routing

use card_core::{DragPhase, DropPayload, FileHandle, Point};
use card_theme::ThemeName;

use crate::components::profile_actions::{DOWNLOAD_ID, RANDOMIZE_ID};
use crate::components::profile_header::UPLOAD_ID;
use crate::components::slider::slider_value_at;
use crate::components::strengths_section::strength_for_slider;
use crate::components::theme_switcher::theme_for_button;
use crate::scene::CardScene;

/// Everything the user can do to the card
#[derive(Clone, Debug)]
pub enum CardEvent {
    SetName(String),
    SetTitle(String),
    SetDescription(String),
    SetNotes(String),
    SelectTheme(ThemeName),
    SetStrength { id: String, value: i32 },
    /// Drag entering, moving over, or leaving the avatar drop zone
    Drag(DragPhase),
    FilesDropped(DropPayload),
    /// Ask the host to show its file picker; the chosen file comes back
    /// as [`CardEvent::FilePicked`]
    OpenFilePicker,
    FilePicked(FileHandle),
    Randomize,
    Download,
}

impl CardEvent {
    /// Text edit on the input with element id `field`
    pub fn edit(field: &str, text: impl Into<String>) -> Option<CardEvent> {
        let text = text.into();
        match field {
            "name-input" => Some(CardEvent::SetName(text)),
            "title-input" => Some(CardEvent::SetTitle(text)),
            "description-input" => Some(CardEvent::SetDescription(text)),
            "notes-input" => Some(CardEvent::SetNotes(text)),
            _ => None,
        }
    }

    /// Event for a click at `point`. Clicks that only focus an input, or
    /// land on nothing interactive, produce `None`.
    pub fn from_click(scene: &CardScene, point: Point) -> Option<CardEvent> {
        let element = scene.hit_test(point)?;
        let id = element.id.as_str();

        if let Some(theme) = theme_for_button(id) {
            return Some(CardEvent::SelectTheme(theme));
        }
        if let Some(strength) = strength_for_slider(id) {
            return Some(CardEvent::SetStrength {
                id: strength.to_string(),
                value: slider_value_at(point.x, element.rect),
            });
        }
        match id {
            RANDOMIZE_ID => Some(CardEvent::Randomize),
            DOWNLOAD_ID => Some(CardEvent::Download),
            UPLOAD_ID => Some(CardEvent::OpenFilePicker),
            _ => {
                tracing::trace!(id, "click has no action");
                None
            }
        }
    }
}
