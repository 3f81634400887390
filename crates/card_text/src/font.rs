//! Loaded font faces

use crate::{Result, TextError};

/// Vertical metrics scaled to a font size, in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    /// Baseline to top of the em box
    pub ascent: f32,
    /// Baseline to bottom of the em box, positive
    pub descent: f32,
    pub line_gap: f32,
}

impl FontMetrics {
    pub fn line_height(&self) -> f32 {
        self.ascent + self.descent + self.line_gap
    }
}

/// Owned font data plus the face index inside a collection
pub struct FontFace {
    data: Vec<u8>,
    face_index: u32,
    units_per_em: u16,
}

impl FontFace {
    /// Parse the first face of a font file
    pub fn from_data(data: Vec<u8>) -> Result<Self> {
        Self::from_data_with_index(data, 0)
    }

    /// Parse a face from a font file or collection
    pub fn from_data_with_index(data: Vec<u8>, face_index: u32) -> Result<Self> {
        let units_per_em = swash::FontRef::from_index(&data, face_index as usize)
            .ok_or(TextError::InvalidFontData)?
            .metrics(&[])
            .units_per_em;
        if units_per_em == 0 {
            return Err(TextError::InvalidFontData);
        }
        Ok(Self {
            data,
            face_index,
            units_per_em,
        })
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn face_index(&self) -> u32 {
        self.face_index
    }

    pub(crate) fn swash_ref(&self) -> Option<swash::FontRef<'_>> {
        swash::FontRef::from_index(&self.data, self.face_index as usize)
    }

    /// Glyph id for a character, 0 (notdef) if unmapped
    pub fn glyph_id(&self, ch: char) -> u16 {
        self.swash_ref().map(|f| f.charmap().map(ch)).unwrap_or(0)
    }

    /// Horizontal advance of a glyph at `font_size`
    pub fn advance(&self, glyph_id: u16, font_size: f32) -> f32 {
        let scale = font_size / self.units_per_em as f32;
        self.swash_ref()
            .map(|f| f.glyph_metrics(&[]).advance_width(glyph_id) * scale)
            .unwrap_or(0.0)
    }

    pub fn metrics(&self, font_size: f32) -> FontMetrics {
        let scale = font_size / self.units_per_em as f32;
        match self.swash_ref() {
            Some(font) => {
                let m = font.metrics(&[]);
                FontMetrics {
                    ascent: m.ascent * scale,
                    descent: m.descent.abs() * scale,
                    line_gap: m.leading * scale,
                }
            }
            None => FontMetrics {
                ascent: font_size * 0.8,
                descent: font_size * 0.2,
                line_gap: 0.0,
            },
        }
    }
}

impl std::fmt::Debug for FontFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontFace")
            .field("len", &self.data.len())
            .field("face_index", &self.face_index)
            .field("units_per_em", &self.units_per_em)
            .finish()
    }
}
