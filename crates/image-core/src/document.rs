//! Form image wrapper

use crate::shape::draw_circle;
use crate::text::draw_text;
use crate::{Color, FontData, RasterError, Result};
use image::{DynamicImage, ImageFormat, ImageReader, Rgba, RgbaImage};
use std::io::Cursor;
use std::path::Path;

/// A form image being filled in
///
/// Holds the decoded base image as RGBA and, optionally, the font used for
/// text. Marks can be drawn without a font.
pub struct FormImage {
    /// Decoded pixels
    canvas: RgbaImage,
    /// Font for `insert_text`
    font: Option<FontData>,
}

impl FormImage {
    /// Open a form image from a file path
    ///
    /// # Example
    /// ```ignore
    /// let form = FormImage::open("学外公欠申請書.jpg")?;
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let reader = ImageReader::open(path)
            .and_then(|r| r.with_guessed_format())
            .map_err(|e| RasterError::OpenError(format!("{}: {}", path.display(), e)))?;

        let image = reader
            .decode()
            .map_err(|e| RasterError::OpenError(format!("{}: {}", path.display(), e)))?;

        Ok(Self::from_image(image))
    }

    /// Wrap an already decoded image
    pub fn from_image(image: DynamicImage) -> Self {
        Self {
            canvas: image.to_rgba8(),
            font: None,
        }
    }

    /// Attach the font used for text
    pub fn with_font(mut self, font: FontData) -> Self {
        self.font = Some(font);
        self
    }

    /// Replace the font used for text
    pub fn set_font(&mut self, font: FontData) {
        self.font = Some(font);
    }

    /// Image width and height in pixels
    pub fn dimensions(&self) -> (u32, u32) {
        self.canvas.dimensions()
    }

    /// Pixel at (x, y), or `None` outside the image
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        self.canvas.get_pixel_checked(x, y).copied()
    }

    /// Borrow the underlying pixels
    pub fn as_rgba(&self) -> &RgbaImage {
        &self.canvas
    }

    /// Draw text with its anchor (top-left of the line box) at (x, y)
    ///
    /// # Arguments
    /// * `text` - Text to draw; empty text is a no-op
    /// * `x`, `y` - Anchor position in pixels
    /// * `size` - Em size in pixels
    /// * `color` - Text color
    pub fn insert_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        size: f32,
        color: Color,
    ) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }

        let font = self.font.as_ref().ok_or(RasterError::FontNotLoaded)?;
        draw_text(&mut self.canvas, font, text, x, y, size, color);
        Ok(())
    }

    /// Draw an unfilled circle centered on (cx, cy)
    pub fn insert_circle(&mut self, cx: f32, cy: f32, radius: f32, width: f32, color: Color) {
        draw_circle(&mut self.canvas, cx, cy, radius, width, color);
    }

    /// Encode the image in the given format
    ///
    /// JPEG has no alpha channel, so the image is flattened to RGB first.
    pub fn to_bytes(&self, format: ImageFormat) -> Result<Vec<u8>> {
        let mut bytes: Vec<u8> = Vec::new();
        let mut cursor = Cursor::new(&mut bytes);

        let image = match format {
            ImageFormat::Jpeg => {
                DynamicImage::ImageRgb8(DynamicImage::ImageRgba8(self.canvas.clone()).to_rgb8())
            }
            ImageFormat::Png => DynamicImage::ImageRgba8(self.canvas.clone()),
            other => return Err(RasterError::UnsupportedFormat(format!("{other:?}"))),
        };

        image
            .write_to(&mut cursor, format)
            .map_err(|e| RasterError::SaveError(e.to_string()))?;

        Ok(bytes)
    }

    /// Save the image, choosing the format from the file extension
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let format = ImageFormat::from_path(path)
            .map_err(|e| RasterError::SaveError(format!("{}: {}", path.display(), e)))?;

        let bytes = self.to_bytes(format)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}
