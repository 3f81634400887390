//! Last-decoded avatar cache
//!
//! Scenes are rebuilt on every edit; the avatar only needs decoding again
//! when the stored data URI changes.

use card_paint::Bitmap;

use crate::decode::DecodedImage;

/// Remembers the bitmap for the most recently seen data URI
#[derive(Debug, Default)]
pub struct AvatarCache {
    key: String,
    bitmap: Option<Bitmap>,
}

impl AvatarCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bitmap for `uri`, decoding on change. Empty or undecodable URIs yield
    /// `None`; a failure is logged once per distinct URI.
    pub fn get(&mut self, uri: &str) -> Option<Bitmap> {
        if uri != self.key {
            self.key = uri.to_string();
            self.bitmap = if uri.is_empty() {
                None
            } else {
                match DecodedImage::from_data_uri(uri) {
                    Ok(decoded) => Some(decoded.into_bitmap()),
                    Err(e) => {
                        tracing::warn!("avatar could not be decoded, using initials: {e}");
                        None
                    }
                }
            };
        }
        self.bitmap.clone()
    }
}
