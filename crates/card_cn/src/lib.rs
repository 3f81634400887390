//! Profile Card Views
//!
//! shadcn-style components that render the profile card into a retained
//! [`CardScene`]: a paint display list plus addressable elements.
//!
//! # Components
//!
//! - **theme_switcher**: one button per theme
//! - **profile_header**: avatar drop zone and the name, title, and
//!   description inputs
//! - **strengths_section**: icon label, value badge and animated slider per
//!   strength
//! - **notes**: succession notes
//! - **profile_actions**: Randomize and Download PNG
//!
//! [`card_scene`] renders the card alone (the export target) and
//! [`page_scene`] the whole page.

pub mod card;
pub mod components;
pub mod event;
pub mod layout;
pub mod scene;

pub use card::{card_scene, page_scene, CardView};
pub use components::{slider_value_at, SliderAnimations, Spinner};
pub use event::CardEvent;
pub use scene::{CardScene, Element, ElementKind, SceneBuilder, TextStyle};
