//! Font loading and glyph fallback

use crate::{RasterError, Result, MM_PER_PT};
use ab_glyph::{Font, FontVec, PxScale};

/// Font weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

/// A parsed TrueType face
///
/// Holds both an `ab_glyph` font for outlines/advances and a `ttf_parser`
/// face for glyph coverage queries.
pub struct LoadedFace {
    /// Face identifier
    pub name: String,
    /// Face weight
    pub weight: FontWeight,
    font: FontVec,
    face: ttf_parser::Face<'static>,
}

impl LoadedFace {
    fn parse(name: &str, weight: FontWeight, data: Vec<u8>) -> Result<Self> {
        // The coverage face needs 'static data; faces live for the process
        // lifetime once registered, so leaking the copy is acceptable.
        let static_data: &'static [u8] = Box::leak(data.clone().into_boxed_slice());
        let face = ttf_parser::Face::parse(static_data, 0)
            .map_err(|e| RasterError::FontParse(format!("{}: {e:?}", name)))?;

        let font = FontVec::try_from_vec(data)
            .map_err(|e| RasterError::FontParse(format!("{}: {e}", name)))?;

        Ok(Self {
            name: name.to_string(),
            weight,
            font,
            face,
        })
    }

    /// Check whether this face has a real glyph for the character
    pub fn has_glyph(&self, c: char) -> bool {
        self.face
            .glyph_index(c)
            .map(|id| id.0 != 0)
            .unwrap_or(false)
    }

    /// The underlying `ab_glyph` font
    pub(crate) fn font(&self) -> &FontVec {
        &self.font
    }

    /// Pixel scale such that the em square spans `size_pt` points
    ///
    /// `PxScale` is defined over the hhea height, not the em, so the ratio
    /// between the two is folded in here.
    pub(crate) fn px_scale(&self, size_pt: f32, px_per_mm: f64) -> PxScale {
        let em_px = size_pt * (MM_PER_PT * px_per_mm) as f32;
        let units_per_em = self.font.units_per_em().unwrap_or(1000.0);
        PxScale::from(em_px * self.font.height_unscaled() / units_per_em)
    }
}

/// Registered faces with glyph fallback across scripts
///
/// Faces are consulted in registration order: for each character the first
/// face of the requested weight that covers it wins, then any face that
/// covers it. A character no face covers is skipped by the rasterizer; a
/// missing font degrades output instead of failing the pipeline.
#[derive(Default)]
pub struct FontStore {
    faces: Vec<LoadedFace>,
}

impl FontStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a regular-weight face
    ///
    /// # Arguments
    /// * `name` - Face identifier
    /// * `data` - TrueType font file bytes
    pub fn register(&mut self, name: &str, data: Vec<u8>) -> Result<()> {
        self.register_weighted(name, FontWeight::Regular, data)
    }

    /// Register a face with an explicit weight
    pub fn register_weighted(&mut self, name: &str, weight: FontWeight, data: Vec<u8>) -> Result<()> {
        let face = LoadedFace::parse(name, weight, data)?;
        log::debug!("registered font face '{}' ({:?})", face.name, face.weight);
        self.faces.push(face);
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// Pick the face to draw a character with
    ///
    /// Preference order: a face of the requested weight covering the
    /// character, then any face covering it.
    pub fn face_for_char(&self, c: char, weight: FontWeight) -> Option<&LoadedFace> {
        self.faces
            .iter()
            .find(|f| f.weight == weight && f.has_glyph(c))
            .or_else(|| self.faces.iter().find(|f| f.has_glyph(c)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store() {
        let store = FontStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.face_for_char('क', FontWeight::Regular).is_none());
    }

    #[test]
    fn test_register_rejects_invalid_font() {
        let mut store = FontStore::new();
        let err = store.register("bogus", vec![0u8; 64]).unwrap_err();
        assert!(matches!(err, RasterError::FontParse(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_font_weight_default() {
        assert_eq!(FontWeight::default(), FontWeight::Regular);
    }
}
