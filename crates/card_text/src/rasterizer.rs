//! Glyph rasterization using swash
//!
//! Converts glyph outlines to 8-bit coverage masks. Results are cached per
//! face, glyph and quarter-pixel size.

use crate::font::FontFace;
use crate::{Result, TextError};
use rustc_hash::FxHashMap;
use std::sync::Arc;
use swash::scale::{Render, ScaleContext, Source};
use swash::zeno::Format;

/// Rasterized glyph coverage mask with placement
#[derive(Debug, Clone, Default)]
pub struct RasterizedGlyph {
    /// Coverage, one byte per pixel, row-major
    pub bitmap: Vec<u8>,
    pub width: u32,
    pub height: u32,
    /// Offset from the pen position to the left edge
    pub bearing_x: i32,
    /// Offset from the baseline up to the top edge
    pub bearing_y: i32,
    /// Horizontal advance to the next pen position
    pub advance: f32,
}

type GlyphKey = (usize, u16, u32);

/// Glyph rasterizer using swash
pub struct GlyphRasterizer {
    scale_context: ScaleContext,
    cache: FxHashMap<GlyphKey, Arc<RasterizedGlyph>>,
}

impl GlyphRasterizer {
    pub fn new() -> Self {
        Self {
            scale_context: ScaleContext::new(),
            cache: FxHashMap::default(),
        }
    }

    /// Rasterize a glyph at the given font size
    pub fn rasterize(
        &mut self,
        font: &Arc<FontFace>,
        glyph_id: u16,
        font_size: f32,
    ) -> Result<Arc<RasterizedGlyph>> {
        let key = (
            Arc::as_ptr(font) as usize,
            glyph_id,
            (font_size * 4.0).round() as u32,
        );
        if let Some(glyph) = self.cache.get(&key) {
            return Ok(Arc::clone(glyph));
        }

        let swash_font = font.swash_ref().ok_or(TextError::InvalidFontData)?;
        let mut scaler = self
            .scale_context
            .builder(swash_font)
            .size(font_size)
            .build();

        let advance = font.advance(glyph_id, font_size);

        let mut render = Render::new(&[Source::Outline]);
        render.format(Format::Alpha);

        let glyph = match render.render(&mut scaler, glyph_id) {
            Some(img) => RasterizedGlyph {
                bitmap: img.data,
                width: img.placement.width,
                height: img.placement.height,
                bearing_x: img.placement.left,
                bearing_y: img.placement.top,
                advance,
            },
            // Empty glyph (like space) - no bitmap but has advance
            None => RasterizedGlyph {
                advance,
                ..Default::default()
            },
        };

        let glyph = Arc::new(glyph);
        self.cache.insert(key, Arc::clone(&glyph));
        Ok(glyph)
    }

    pub fn cached_glyphs(&self) -> usize {
        self.cache.len()
    }
}

impl Default for GlyphRasterizer {
    fn default() -> Self {
        Self::new()
    }
}
