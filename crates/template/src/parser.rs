//! Layout JSON parsing and loading

use crate::{Layout, MarkPositions, Result, TemplateError, TextPositions};
use std::path::Path;

/// Parse a text-position mapping from JSON string
pub fn parse_text_positions(json: &str) -> Result<TextPositions> {
    serde_json::from_str(json).map_err(|e| TemplateError::ParseError(e.to_string()))
}

/// Parse a mark-position mapping from JSON string
pub fn parse_mark_positions(json: &str) -> Result<MarkPositions> {
    serde_json::from_str(json).map_err(|e| TemplateError::ParseError(e.to_string()))
}

/// Read a configuration file, distinguishing a missing file from other IO errors
fn read_config(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => TemplateError::ConfigNotFound(path.display().to_string()),
        _ => TemplateError::ReadError(path.display().to_string(), e.to_string()),
    })
}

/// Load a text-position mapping from a file
pub fn load_text_positions<P: AsRef<Path>>(path: P) -> Result<TextPositions> {
    let path = path.as_ref();
    let json = read_config(path)?;
    parse_text_positions(&json)
        .map_err(|e| TemplateError::ParseError(format!("{}: {}", path.display(), e)))
}

/// Load a mark-position mapping from a file
pub fn load_mark_positions<P: AsRef<Path>>(path: P) -> Result<MarkPositions> {
    let path = path.as_ref();
    let json = read_config(path)?;
    parse_mark_positions(&json)
        .map_err(|e| TemplateError::ParseError(format!("{}: {}", path.display(), e)))
}

/// Load one half of the form from its text-position and mark-position files
pub fn load_layout<P, Q>(text_path: P, marks_path: Q) -> Result<Layout>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    Ok(Layout::new(
        load_text_positions(text_path)?,
        load_mark_positions(marks_path)?,
    ))
}
