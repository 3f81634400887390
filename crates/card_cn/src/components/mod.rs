//! Card components

pub mod button;
pub mod glyph;
pub mod notes;
pub mod profile_actions;
pub mod profile_header;
pub mod slider;
pub mod strengths_section;
pub mod theme_switcher;

pub use button::{Button, ButtonVariant, Leading};
pub use notes::notes;
pub use profile_actions::{profile_actions, Spinner};
pub use profile_header::{initials, profile_header, HeaderProps};
pub use slider::{fill_fraction, slider_value_at, AnimatedSlider, SliderAnimations};
pub use strengths_section::strengths_section;
pub use theme_switcher::theme_switcher;
