//! Profile Card Core
//!
//! Foundational types shared by every profile card crate:
//!
//! - **Color**: RGBA color with hex parsing for theme palettes
//! - **Geometry**: points and rectangles used by layout and painting
//! - **Events**: file handles and drag-and-drop payloads delivered by the host
//!
//! # Example
//!
//! ```rust
//! use card_core::{Color, DropPayload, FileHandle};
//!
//! let accent = Color::from_hex(0x3b82f6);
//! assert_eq!(accent.to_rgba8(), [0x3b, 0x82, 0xf6, 0xff]);
//!
//! let payload = DropPayload::new(vec![
//!     FileHandle::from_bytes("notes.txt", "text/plain", b"hi".to_vec()),
//!     FileHandle::from_bytes("me.png", "image/png", vec![0x89]),
//! ]);
//! assert_eq!(payload.first_image().map(|f| f.name()), Some("me.png"));
//! ```

pub mod color;
pub mod events;
pub mod geometry;

pub use color::{Color, ColorParseError};
pub use events::{DragPhase, DropPayload, FileHandle, FileSource};
pub use geometry::{Point, Rect};
