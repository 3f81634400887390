//! Decoding stored avatars to RGBA

use card_paint::Bitmap;

use crate::data_uri::DataUri;
use crate::error::{ImageError, Result};

/// A decoded avatar, ready for the display list
#[derive(Clone, Debug)]
pub struct DecodedImage {
    bitmap: Bitmap,
}

impl DecodedImage {
    /// Decode encoded image bytes, guessing the format from its magic
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let rgba = image::load_from_memory(bytes)?.to_rgba8();
        let (width, height) = rgba.dimensions();
        let bitmap = Bitmap::new(width, height, rgba.into_raw())
            .ok_or(ImageError::Dimensions { width, height })?;
        Ok(Self { bitmap })
    }

    /// Decode the avatar stored on a profile
    pub fn from_data_uri(uri: &str) -> Result<Self> {
        let uri = DataUri::parse(uri)?;
        Self::from_bytes(uri.data())
    }

    pub fn width(&self) -> u32 {
        self.bitmap.width()
    }

    pub fn height(&self) -> u32 {
        self.bitmap.height()
    }

    pub fn bitmap(&self) -> &Bitmap {
        &self.bitmap
    }

    pub fn into_bitmap(self) -> Bitmap {
        self.bitmap
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32, color: [u8; 4]) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba(color));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn test_decodes_png_data_uri() {
        let uri = DataUri::new("image/png", png_bytes(3, 2, [255, 0, 0, 255])).encode();
        let decoded = DecodedImage::from_data_uri(&uri).unwrap();

        assert_eq!(decoded.width(), 3);
        assert_eq!(decoded.height(), 2);
        assert_eq!(decoded.bitmap().pixel(2, 1), Some([255, 0, 0, 255]));
    }

    #[test]
    fn test_garbage_fails_to_decode() {
        let uri = DataUri::new("image/png", b"not an image".to_vec()).encode();
        assert!(matches!(
            DecodedImage::from_data_uri(&uri),
            Err(ImageError::Decode(_))
        ));
    }
}
