//! Template - form layout configuration and the drawing routine
//!
//! This crate provides:
//! - Layout JSON types (text positions, mark positions, style)
//! - Layout parsing and loading from the per-side configuration files
//! - The flat field-label to value mapping that gets drawn
//! - The renderer that writes values and marks onto a canvas
//!
//! # Example
//!
//! ```ignore
//! use template::{load_layout, FormData, FormRenderer};
//!
//! let left = load_layout("positions_left.json", "circles_left.json")?;
//! let mut data = FormData::new();
//! data.insert("氏名", "山田 太郎").insert("行き_区分", "a");
//! FormRenderer::new(&left).render(&mut form_image, &data)?;
//! ```

mod data;
pub mod fields;
pub mod parser;
mod renderer;
mod schema;

pub use data::FormData;
pub use parser::{
    load_layout, load_mark_positions, load_text_positions, parse_mark_positions,
    parse_text_positions,
};
pub use renderer::{Canvas, FormRenderer, RenderStats};
pub use schema::*;

use thiserror::Error;

/// Errors that can occur while loading layouts or rendering a form
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Configuration file not found: {0}")]
    ConfigNotFound(String),

    #[error("Failed to read {0}: {1}")]
    ReadError(String, String),

    #[error("Failed to parse layout: {0}")]
    ParseError(String),

    #[error("Image error: {0}")]
    ImageError(#[from] image_core::RasterError),
}

/// Result type for template operations
pub type Result<T> = std::result::Result<T, TemplateError>;
