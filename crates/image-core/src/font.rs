//! Font handling for form images

use crate::{RasterError, Result};
use ab_glyph::{Font, FontVec, PxScale, ScaleFont};
use std::path::Path;

/// A parsed TrueType face ready for rasterization
pub struct FontData {
    /// Font name/identifier
    pub name: String,
    /// Face index inside a collection (0 for plain TTF/OTF)
    pub index: u32,
    font: FontVec,
}

impl std::fmt::Debug for FontData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontData")
            .field("name", &self.name)
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

impl FontData {
    /// Load the first face of a font file (`.ttf`, `.otf` or `.ttc`)
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_file_with_index(path, 0)
    }

    /// Load a specific face of a font file
    ///
    /// # Arguments
    /// * `path` - Path to the font file
    /// * `index` - Face index inside a TrueType collection
    pub fn from_file_with_index<P: AsRef<Path>>(path: P, index: u32) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path)
            .map_err(|e| RasterError::FontNotFound(format!("{}: {}", path.display(), e)))?;

        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("font")
            .to_string();

        Self::from_bytes(&name, data, index)
    }

    /// Create font data from raw font bytes
    pub fn from_bytes(name: &str, data: Vec<u8>, index: u32) -> Result<Self> {
        let font = FontVec::try_from_vec_and_index(data, index)
            .map_err(|e| RasterError::FontParseError(format!("{name}: {e}")))?;

        Ok(Self {
            name: name.to_string(),
            index,
            font,
        })
    }

    /// The underlying ab_glyph font
    pub(crate) fn font(&self) -> &FontVec {
        &self.font
    }

    /// Pixel scale for an em size in pixels
    ///
    /// ab_glyph scales by ascent-to-descent height, so the em size is
    /// converted through the face's units per em.
    pub fn px_scale(&self, size: f32) -> PxScale {
        match self.font.units_per_em() {
            Some(units_per_em) if units_per_em > 0.0 => {
                PxScale::from(size * self.font.height_unscaled() / units_per_em)
            }
            _ => PxScale::from(size),
        }
    }

    /// Distance from the top of the line box to the baseline
    pub fn ascent(&self, size: f32) -> f32 {
        self.font.as_scaled(self.px_scale(size)).ascent()
    }

    /// Distance from one baseline to the next
    pub fn line_height(&self, size: f32) -> f32 {
        let scaled = self.font.as_scaled(self.px_scale(size));
        scaled.height() + scaled.line_gap()
    }

    /// Advance width of a single line of text, in pixels
    pub fn text_width(&self, text: &str, size: f32) -> f32 {
        let scaled = self.font.as_scaled(self.px_scale(size));
        let mut width = 0.0;
        let mut previous = None;

        for c in text.chars() {
            let id = scaled.glyph_id(c);
            if let Some(prev) = previous {
                width += scaled.kern(prev, id);
            }
            width += scaled.h_advance(id);
            previous = Some(id);
        }

        width
    }
}
