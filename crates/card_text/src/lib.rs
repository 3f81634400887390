//! Text for the profile card
//!
//! This crate provides:
//! - System font discovery (fontdb)
//! - Glyph rasterization (swash)
//! - Text measurement, with a font-free estimate for deterministic layout
//! - Greedy word wrapping

pub mod font;
pub mod measure;
pub mod rasterizer;
pub mod registry;
pub mod wrap;

pub use font::{FontFace, FontMetrics};
pub use measure::{EstimatedMeasurer, FontMeasurer, TextMeasurer};
pub use rasterizer::{GlyphRasterizer, RasterizedGlyph};
pub use registry::FontRegistry;
pub use wrap::wrap_text;

use thiserror::Error;

/// Text rendering errors
#[derive(Error, Debug)]
pub enum TextError {
    #[error("Failed to load font: {0}")]
    FontLoadError(String),

    #[error("Invalid font data")]
    InvalidFontData,

    #[error("Failed to read font file: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TextError>;
