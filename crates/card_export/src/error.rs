//! Export errors

use std::path::PathBuf;

use thiserror::Error;

/// Errors from rendering or delivering an export
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("scene has no area ({width}x{height} px)")]
    EmptyScene { width: u32, height: u32 },

    #[error("rasterizer failed: {0}")]
    Render(String),

    #[error("failed to rasterize text: {0}")]
    Text(#[from] card_text::TextError),

    #[error("failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),

    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("export task did not complete: {0}")]
    Task(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, ExportError>;
