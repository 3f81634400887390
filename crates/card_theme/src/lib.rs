//! Profile Card Theme Registry
//!
//! A closed set of named themes, each mapping to an immutable bundle of
//! visual tokens and a fixed four-color palette for the strength categories.
//!
//! # Quick Start
//!
//! ```rust
//! use card_theme::{lookup, palette_for, ThemeName};
//!
//! let theme = lookup(ThemeName::DarkMode);
//! assert!(ThemeName::DarkMode.is_dark());
//!
//! let palette = palette_for(ThemeName::Minimal);
//! assert_eq!(palette[0].to_string(), "#3b82f6");
//! # let _ = theme;
//! ```
//!
//! # Tokens
//!
//! - [`Theme`]: page background, card surface, accent text, border, slider track
//! - [`BorderStyle`]: the animated gradient border drawn around the card
//!
//! Lookups are total: every [`ThemeName`] has exactly one [`Theme`] and one
//! palette, so there is no error path.

pub mod name;
pub mod registry;
pub mod tokens;

pub use name::{ThemeName, UnknownTheme};
pub use registry::{lookup, palette_for, Palette};
pub use tokens::{tailwind, BorderStyle, Theme};
