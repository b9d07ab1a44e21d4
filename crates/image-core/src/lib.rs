//! Image Core - Raster drawing onto scanned form images
//!
//! This crate provides functionality for:
//! - Opening and saving form images (JPEG, PNG)
//! - Loading TrueType fonts and font collections
//! - Drawing text with its anchor at a pixel coordinate
//! - Drawing circle marks centered on a pixel coordinate
//!
//! # Example
//!
//! ```ignore
//! use image_core::{Color, FontData, FormImage};
//!
//! let font = FontData::from_file("meiryo.ttc")?;
//! let mut form = FormImage::open("form.jpg")?.with_font(font);
//! form.insert_text("山田 太郎", 120.0, 80.0, 24.0, Color::black())?;
//! form.insert_circle(300.0, 410.0, 15.0, 3.0, Color::black());
//! form.save("form_filled.jpg")?;
//! ```

mod document;
mod font;
mod shape;
mod text;

pub use document::FormImage;
pub use font::FontData;
pub use shape::draw_circle;
pub use text::draw_text;

use thiserror::Error;

/// Errors that can occur while drawing on a form image
#[derive(Debug, Error)]
pub enum RasterError {
    #[error("Failed to open image: {0}")]
    OpenError(String),

    #[error("Failed to save image: {0}")]
    SaveError(String),

    #[error("Font not found: {0}")]
    FontNotFound(String),

    #[error("Failed to parse font: {0}")]
    FontParseError(String),

    #[error("No font loaded; text cannot be drawn")]
    FontNotLoaded,

    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for drawing operations
pub type Result<T> = std::result::Result<T, RasterError>;

/// RGB color (values 0 - 255)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create color from RGB values (0-255)
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black color
    pub fn black() -> Self {
        Self::from_rgb(0, 0, 0)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}
