//! Image errors

use thiserror::Error;

/// Errors from reading, parsing, or decoding avatar images
#[derive(Error, Debug)]
pub enum ImageError {
    #[error("failed to read file '{name}': {source}")]
    Read {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("not a data URI")]
    NotDataUri,

    #[error("data URI payload is not base64 encoded")]
    NotBase64,

    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("decoded image has invalid dimensions {width}x{height}")]
    Dimensions { width: u32, height: u32 },
}

pub type Result<T> = std::result::Result<T, ImageError>;
