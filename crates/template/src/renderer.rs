//! Form rendering

use crate::fields::MARK_FIELDS;
use crate::schema::*;
use crate::{FormData, Result};
use image_core::FormImage;

/// Drawing surface the renderer writes to
pub trait Canvas {
    /// Draw `text` with its anchor (top-left of the line box) at `at`
    fn draw_text(&mut self, text: &str, at: Point, style: &Style) -> Result<()>;

    /// Draw a mark centered on `center`
    fn draw_mark(&mut self, center: Point, style: &Style) -> Result<()>;
}

impl Canvas for FormImage {
    fn draw_text(&mut self, text: &str, at: Point, style: &Style) -> Result<()> {
        self.insert_text(text, at.x, at.y, style.font_size, style.text_color.into())?;
        Ok(())
    }

    fn draw_mark(&mut self, center: Point, style: &Style) -> Result<()> {
        self.insert_circle(
            center.x,
            center.y,
            style.mark_radius,
            style.mark_width,
            style.mark_color.into(),
        );
        Ok(())
    }
}

/// What one render pass drew
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub texts: usize,
    pub marks: usize,
}

/// Renders form data onto a canvas according to one layout
pub struct FormRenderer<'a> {
    /// Positions for this half of the form
    layout: &'a Layout,
    /// Font size, colors and mark geometry
    style: Style,
    /// Categorical fields looked up in a flat mark mapping
    mark_fields: Vec<String>,
}

impl<'a> FormRenderer<'a> {
    /// Create a renderer with the default style and the transport fields as marks
    pub fn new(layout: &'a Layout) -> Self {
        Self {
            layout,
            style: Style::default(),
            mark_fields: MARK_FIELDS.iter().map(|f| f.to_string()).collect(),
        }
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Replace the categorical fields used with a flat mark mapping
    pub fn with_mark_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.mark_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Render the data
    ///
    /// Every text position whose field has a non-empty value gets that value
    /// drawn at it. Every categorical field gets at most one mark, at the
    /// point configured for its current value.
    pub fn render<C>(&self, canvas: &mut C, data: &FormData) -> Result<RenderStats>
    where
        C: Canvas + ?Sized,
    {
        let mut stats = RenderStats::default();

        for (label, point) in self.layout.text.iter() {
            let Some(value) = data.get_non_empty(label) else {
                continue;
            };
            canvas.draw_text(value, point, &self.style)?;
            stats.texts += 1;
        }

        for field in self.mark_field_names() {
            let Some(value) = data.get_non_empty(field) else {
                continue;
            };
            if let Some(center) = self.layout.marks.position(field, value.trim()) {
                canvas.draw_mark(center, &self.style)?;
                stats.marks += 1;
            }
        }

        Ok(stats)
    }

    /// Fields that can receive a mark under this layout
    fn mark_field_names(&self) -> Vec<&str> {
        match &self.layout.marks {
            MarkPositions::PerField(_) => self.layout.marks.fields(),
            MarkPositions::Flat(_) => {
                let mut names: Vec<&str> = Vec::new();
                for field in &self.mark_fields {
                    if !names.contains(&field.as_str()) {
                        names.push(field);
                    }
                }
                names
            }
        }
    }
}
