//! Profile Card Paint API
//!
//! A small 2D drawing API in the spirit of HTML Canvas. Views never touch
//! pixels: they record [`PaintCommand`]s into a [`PaintContext`], and a
//! rasterizer replays the list later (at any pixel density).
//!
//! # Example
//!
//! ```rust
//! use card_core::Color;
//! use card_paint::{PaintCommand, PaintContext};
//!
//! let mut ctx = PaintContext::new();
//! ctx.fill_rounded_rect(0.0, 0.0, 100.0, 12.0, 6.0, Color::from_hex(0xe5e7eb));
//! ctx.draw_text("Executing", 0.0, 30.0, 14.0, Color::BLACK);
//! assert!(matches!(ctx.commands()[1], PaintCommand::DrawText { .. }));
//! ```

pub mod bitmap;
pub mod context;
pub mod gradient;

pub use bitmap::Bitmap;
pub use context::{FillStyle, FontWeight, PaintCommand, PaintContext, Shadow};
pub use gradient::{Gradient, GradientStop};
