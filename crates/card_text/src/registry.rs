//! Font registry for system font discovery and caching
//!
//! Uses fontdb to find a sans-serif face per weight. When the generic
//! sans-serif family is not installed, any loaded face is used instead.

use crate::font::FontFace;
use crate::{Result, TextError};
use fontdb::{Database, Family, Query, Stretch, Style, Weight};
use rustc_hash::FxHashMap;
use std::path::Path;
use std::sync::Arc;

/// Font registry that discovers and caches fonts
pub struct FontRegistry {
    db: Database,
    /// Cached faces per (family, weight). `None` caches a failed lookup.
    faces: FxHashMap<(Option<String>, u16), Option<Arc<FontFace>>>,
}

impl FontRegistry {
    /// Create a registry populated with the system fonts
    pub fn new() -> Self {
        let mut db = Database::new();
        db.load_system_fonts();
        tracing::debug!(faces = db.len(), "loaded system fonts");
        Self::from_database(db)
    }

    /// Create a registry with no fonts at all
    pub fn empty() -> Self {
        Self::from_database(Database::new())
    }

    fn from_database(db: Database) -> Self {
        Self {
            db,
            faces: FxHashMap::default(),
        }
    }

    /// Add a font file (TTF, OTF, or collection)
    pub fn load_font_file(&mut self, path: &Path) -> Result<()> {
        self.db.load_font_file(path)?;
        self.faces.clear();
        Ok(())
    }

    /// Add in-memory font data
    pub fn load_font_data(&mut self, data: Vec<u8>) {
        self.db.load_font_data(data);
        self.faces.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.db.is_empty()
    }

    /// Load the sans-serif face closest to `weight`
    pub fn load_sans(&mut self, weight: u16) -> Result<Arc<FontFace>> {
        self.load_family(None, weight)
    }

    /// Load a named family at `weight`, falling back to sans-serif and then
    /// to any available face
    pub fn load_family(&mut self, name: Option<&str>, weight: u16) -> Result<Arc<FontFace>> {
        let cache_key = (name.map(str::to_string), weight);
        if let Some(cached) = self.faces.get(&cache_key) {
            return cached.clone().ok_or_else(|| {
                TextError::FontLoadError(format!("no font for weight {weight} (cached)"))
            });
        }

        let face = self.resolve(name, weight).map(Arc::new);
        self.faces
            .insert(cache_key, face.as_ref().ok().map(Arc::clone));
        face
    }

    fn resolve(&self, name: Option<&str>, weight: u16) -> Result<FontFace> {
        let mut families = Vec::with_capacity(2);
        if let Some(name) = name {
            families.push(Family::Name(name));
        }
        families.push(Family::SansSerif);

        let query = Query {
            families: &families,
            weight: Weight(weight),
            style: Style::Normal,
            stretch: Stretch::Normal,
        };

        let id = match self.db.query(&query) {
            Some(id) => id,
            None => {
                let fallback = self
                    .db
                    .faces()
                    .min_by_key(|face| (face.style != Style::Normal, face.weight.0.abs_diff(weight)))
                    .map(|face| face.id)
                    .ok_or_else(|| TextError::FontLoadError("no fonts available".to_string()))?;
                tracing::warn!(
                    "sans-serif family not found for weight {}, using first available face",
                    weight
                );
                fallback
            }
        };

        self.db
            .with_face_data(id, |data, index| {
                FontFace::from_data_with_index(data.to_vec(), index)
            })
            .ok_or_else(|| TextError::FontLoadError("font source not found".to_string()))?
    }
}

impl Default for FontRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_registry_fails_and_caches() {
        let mut registry = FontRegistry::empty();
        assert!(registry.is_empty());
        assert!(registry.load_sans(400).is_err());
        // Second lookup hits the negative cache
        let err = registry.load_sans(400).unwrap_err();
        assert!(err.to_string().contains("cached"));
    }
}
