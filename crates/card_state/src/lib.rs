//! Profile Card State
//!
//! The data model behind the card and the controller that edits it.
//!
//! # Example
//!
//! ```rust
//! use card_state::{ProfileController, ProfileUpdate};
//! use card_theme::{palette_for, ThemeName};
//!
//! let mut controller = ProfileController::new(Some(Box::new(|dark: bool| {
//!     println!("page dark mode: {dark}");
//! })));
//!
//! let profile = controller.update(ProfileUpdate::default().theme(ThemeName::DarkMode));
//! assert_eq!(profile.strengths()[0].color, palette_for(ThemeName::DarkMode)[0]);
//! ```

pub mod controller;
pub mod profile;
pub mod strengths;

pub use controller::{ProfileController, ThemeListener};
pub use profile::{ProfileData, ProfileUpdate};
pub use strengths::{categories_for, recolor, StrengthCategory, StrengthIcon, STRENGTH_IDS};
