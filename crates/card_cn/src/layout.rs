//! Fixed layout metrics, in logical pixels
//!
//! The page is a single centered column (`max-w-md` with `p-4`).

/// Outer page padding
pub const PAGE_PADDING: f32 = 16.0;
/// Width of the card and of the whole column
pub const CARD_WIDTH: f32 = 448.0;
pub const PAGE_WIDTH: f32 = CARD_WIDTH + PAGE_PADDING * 2.0;

pub const CARD_PADDING: f32 = 24.0;
pub const CARD_RADIUS: f32 = 14.0;
/// Width available to card content
pub const CONTENT_WIDTH: f32 = CARD_WIDTH - CARD_PADDING * 2.0;

/// Vertical gap between page sections and between card sections
pub const SECTION_GAP: f32 = 24.0;

pub const BUTTON_HEIGHT: f32 = 36.0;
pub const BUTTON_HEIGHT_SM: f32 = 32.0;
pub const BUTTON_RADIUS: f32 = 8.0;
pub const ICON_SIZE: f32 = 16.0;

pub const AVATAR_SIZE: f32 = 128.0;
pub const SLIDER_HEIGHT: f32 = 12.0;
pub const THUMB_SIZE: f32 = 20.0;
