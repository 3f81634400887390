//! Text measurement
//!
//! Layout needs widths before anything is painted. [`EstimatedMeasurer`]
//! produces the same numbers on every machine, which keeps headless
//! snapshots stable; [`FontMeasurer`] uses real advances.

use crate::font::FontFace;
use crate::registry::FontRegistry;
use crate::Result;
use std::sync::Arc;

/// Measures single-line text width in logical pixels
pub trait TextMeasurer: Send + Sync {
    fn text_width(&self, text: &str, font_size: f32, weight: u16) -> f32;

    /// Distance between baselines
    fn line_height(&self, font_size: f32) -> f32 {
        font_size * 1.4
    }
}

/// Font-free width estimate from per-character classes
#[derive(Debug, Clone, Copy, Default)]
pub struct EstimatedMeasurer;

impl EstimatedMeasurer {
    fn char_width(ch: char) -> f32 {
        match ch {
            ' ' => 0.28,
            'i' | 'l' | 'j' | 't' | 'f' | 'r' | '.' | ',' | '\'' | '!' | '|' | ':' | ';' => 0.3,
            'm' | 'w' | 'M' | 'W' => 0.85,
            'A'..='Z' => 0.66,
            '0'..='9' => 0.56,
            _ => 0.52,
        }
    }
}

impl TextMeasurer for EstimatedMeasurer {
    fn text_width(&self, text: &str, font_size: f32, weight: u16) -> f32 {
        let bold = if weight >= 600 { 1.06 } else { 1.0 };
        text.chars().map(Self::char_width).sum::<f32>() * font_size * bold
    }
}

/// Measurer backed by loaded font faces
pub struct FontMeasurer {
    /// Faces sorted by weight
    faces: Vec<(u16, Arc<FontFace>)>,
}

impl FontMeasurer {
    /// Load the regular, medium and bold sans faces
    pub fn new(registry: &mut FontRegistry) -> Result<Self> {
        let mut faces = Vec::new();
        for weight in [400, 500, 700] {
            faces.push((weight, registry.load_sans(weight)?));
        }
        Ok(Self { faces })
    }

    /// Face whose weight is closest to `weight`
    pub fn face_for(&self, weight: u16) -> Option<&Arc<FontFace>> {
        self.faces
            .iter()
            .min_by_key(|(w, _)| w.abs_diff(weight))
            .map(|(_, face)| face)
    }
}

impl TextMeasurer for FontMeasurer {
    fn text_width(&self, text: &str, font_size: f32, weight: u16) -> f32 {
        match self.face_for(weight) {
            Some(face) => text
                .chars()
                .map(|ch| face.advance(face.glyph_id(ch), font_size))
                .sum(),
            None => EstimatedMeasurer.text_width(text, font_size, weight),
        }
    }

    fn line_height(&self, font_size: f32) -> f32 {
        self.face_for(400)
            .map(|face| face.metrics(font_size).line_height().max(font_size * 1.2))
            .unwrap_or(font_size * 1.4)
    }
}
