//! Layout JSON schema types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Pixel coordinate, written as `[x, y]` in the configuration files
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 2]", into = "[f32; 2]")]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<[f32; 2]> for Point {
    fn from([x, y]: [f32; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Point> for [f32; 2] {
    fn from(point: Point) -> Self {
        [point.x, point.y]
    }
}

/// RGB color (values 0 - 255)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
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

impl From<Color> for image_core::Color {
    fn from(color: Color) -> Self {
        image_core::Color::from_rgb(color.r, color.g, color.b)
    }
}

/// Text-position mapping: field label -> anchor of its value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TextPositions(BTreeMap<String, Point>);

impl TextPositions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the anchor of a field
    pub fn insert(&mut self, label: impl Into<String>, point: Point) -> &mut Self {
        self.0.insert(label.into(), point);
        self
    }

    pub fn get(&self, label: &str) -> Option<Point> {
        self.0.get(label).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Point)> {
        self.0.iter().map(|(label, point)| (label.as_str(), *point))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Mark-position mapping: categorical value -> center of its mark
///
/// Two shapes are accepted:
///
/// ```json
/// { "行き_区分": { "a": [410, 620], "b": [520, 620] }, "帰り_区分": { ... } }
/// ```
///
/// keyed per field, or a flat `{ "a": [410, 620], "b": [520, 620] }` shared
/// by every categorical field the renderer is given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MarkPositions {
    /// Field label -> value -> point
    PerField(BTreeMap<String, BTreeMap<String, Point>>),
    /// Value -> point, for all categorical fields
    Flat(BTreeMap<String, Point>),
}

impl Default for MarkPositions {
    fn default() -> Self {
        MarkPositions::PerField(BTreeMap::new())
    }
}

impl MarkPositions {
    /// Where the mark for `value` of `field` goes, if configured
    pub fn position(&self, field: &str, value: &str) -> Option<Point> {
        match self {
            MarkPositions::PerField(fields) => fields.get(field)?.get(value).copied(),
            MarkPositions::Flat(values) => values.get(value).copied(),
        }
    }

    /// Fields named by a per-field mapping; empty for a flat mapping
    pub fn fields(&self) -> Vec<&str> {
        match self {
            MarkPositions::PerField(fields) => fields.keys().map(String::as_str).collect(),
            MarkPositions::Flat(_) => Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            MarkPositions::PerField(fields) => fields.values().all(BTreeMap::is_empty),
            MarkPositions::Flat(values) => values.is_empty(),
        }
    }
}

/// One half of the form: where text goes and where marks go
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    #[serde(default)]
    pub text: TextPositions,

    #[serde(default)]
    pub marks: MarkPositions,
}

impl Layout {
    pub fn new(text: TextPositions, marks: MarkPositions) -> Self {
        Self { text, marks }
    }
}

/// Which half of the form a layout describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormSide {
    Left,
    Right,
}

impl fmt::Display for FormSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormSide::Left => write!(f, "left"),
            FormSide::Right => write!(f, "right"),
        }
    }
}

fn default_font_size() -> f32 {
    24.0
}

fn default_mark_radius() -> f32 {
    15.0
}

fn default_mark_width() -> f32 {
    3.0
}

/// Drawing style shared by both halves
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    /// Em size of text in pixels
    #[serde(default = "default_font_size")]
    pub font_size: f32,

    #[serde(default)]
    pub text_color: Color,

    /// Outer radius of a mark in pixels
    #[serde(default = "default_mark_radius")]
    pub mark_radius: f32,

    /// Stroke width of a mark in pixels
    #[serde(default = "default_mark_width")]
    pub mark_width: f32,

    #[serde(default)]
    pub mark_color: Color,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            font_size: default_font_size(),
            text_color: Color::black(),
            mark_radius: default_mark_radius(),
            mark_width: default_mark_width(),
            mark_color: Color::black(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_point_from_array() {
        let point: Point = serde_json::from_str("[10, 20]").unwrap();
        assert_eq!(point, Point::new(10.0, 20.0));

        let point: Point = serde_json::from_str("[10.5, 20.25]").unwrap();
        assert_eq!(point, Point::new(10.5, 20.25));

        assert!(serde_json::from_str::<Point>("[10]").is_err());
        assert!(serde_json::from_str::<Point>(r#"{"x": 1, "y": 2}"#).is_err());
    }

    #[test]
    fn test_parse_per_field_marks() {
        let json = r#"{
            "行き_区分": { "a": [50, 60], "b": [90, 60] },
            "帰り_区分": { "a": [50, 100], "b": [90, 100] }
        }"#;

        let marks: MarkPositions = serde_json::from_str(json).unwrap();

        assert_eq!(marks.position("行き_区分", "a"), Some(Point::new(50.0, 60.0)));
        assert_eq!(marks.position("帰り_区分", "b"), Some(Point::new(90.0, 100.0)));
        assert_eq!(marks.position("行き_区分", "c"), None);
        assert_eq!(marks.position("unknown", "a"), None);
        assert_eq!(marks.fields(), vec!["帰り_区分", "行き_区分"]);
    }

    #[test]
    fn test_parse_flat_marks() {
        let marks: MarkPositions =
            serde_json::from_str(r#"{ "a": [50, 60], "b": [90, 60] }"#).unwrap();

        assert!(matches!(marks, MarkPositions::Flat(_)));
        assert_eq!(marks.position("行き_区分", "a"), Some(Point::new(50.0, 60.0)));
        assert_eq!(marks.position("anything", "b"), Some(Point::new(90.0, 60.0)));
        assert!(marks.fields().is_empty());
    }

    #[test]
    fn test_empty_marks() {
        let marks: MarkPositions = serde_json::from_str("{}").unwrap();
        assert!(marks.is_empty());
        assert!(MarkPositions::default().is_empty());
    }

    #[test]
    fn test_style_defaults_from_partial_json() {
        let style: Style = serde_json::from_str(r#"{ "fontSize": 32 }"#).unwrap();
        assert_eq!(style.font_size, 32.0);
        assert_eq!(style.mark_radius, 15.0);
        assert_eq!(style.mark_width, 3.0);
        assert_eq!(style.text_color, Color::black());
    }

    #[test]
    fn test_form_side_display() {
        assert_eq!(FormSide::Left.to_string(), "left");
        assert_eq!(FormSide::Right.to_string(), "right");
    }
}
