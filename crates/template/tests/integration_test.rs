//! Integration tests for layout loading and rendering onto real images

use image::{DynamicImage, Rgba, RgbaImage};
use image_core::{FontData, FormImage};
use pretty_assertions::assert_eq;
use template::{load_layout, FormData, FormRenderer, Point, RenderStats, Style, TemplateError};

fn write(dir: &std::path::Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn blank_form(width: u32, height: u32) -> FormImage {
    FormImage::from_image(DynamicImage::ImageRgba8(RgbaImage::from_pixel(
        width,
        height,
        Rgba([255, 255, 255, 255]),
    )))
}

fn is_dark(form: &FormImage, x: u32, y: u32) -> bool {
    form.pixel(x, y).map(|p| p.0[0] < 128).unwrap_or(false)
}

#[test]
fn test_load_layout_from_files() {
    let dir = tempfile::tempdir().unwrap();
    let positions = write(dir.path(), "positions_left.json", r#"{ "氏名": [10, 20] }"#);
    let circles = write(
        dir.path(),
        "circles_left.json",
        r#"{ "行き_区分": { "a": [50, 60], "b": [90, 60] } }"#,
    );

    let layout = load_layout(&positions, &circles).unwrap();

    assert_eq!(layout.text.get("氏名"), Some(Point::new(10.0, 20.0)));
    assert_eq!(
        layout.marks.position("行き_区分", "b"),
        Some(Point::new(90.0, 60.0))
    );
}

#[test]
fn test_load_layout_missing_marks_file() {
    let dir = tempfile::tempdir().unwrap();
    let positions = write(dir.path(), "positions_right.json", "{}");

    let err = load_layout(&positions, dir.path().join("circles_right.json")).unwrap_err();
    assert!(matches!(err, TemplateError::ConfigNotFound(_)));
}

#[test]
fn test_load_layout_malformed_coordinates() {
    let dir = tempfile::tempdir().unwrap();
    let positions = write(dir.path(), "positions_left.json", r#"{ "氏名": [10] }"#);
    let circles = write(dir.path(), "circles_left.json", "{}");

    let err = load_layout(&positions, &circles).unwrap_err();
    match err {
        TemplateError::ParseError(msg) => assert!(msg.contains("positions_left.json")),
        other => panic!("Expected ParseError, got {other:?}"),
    }
}

#[test]
fn test_marks_on_both_sides() {
    let dir = tempfile::tempdir().unwrap();
    let empty = write(dir.path(), "positions.json", "{}");
    let left_marks = write(dir.path(), "circles_left.json", r#"{ "a": [50, 60], "b": [90, 60] }"#);
    let right_marks = write(
        dir.path(),
        "circles_right.json",
        r#"{ "a": [250, 60], "b": [290, 60] }"#,
    );

    let left = load_layout(&empty, &left_marks).unwrap();
    let right = load_layout(&empty, &right_marks).unwrap();

    let mut data = FormData::new();
    data.insert("行き_区分", "a").insert("帰り_区分", "a");

    let mut form = blank_form(400, 120);
    let style = Style {
        mark_radius: 15.0,
        mark_width: 3.0,
        ..Style::default()
    };
    let stats = FormRenderer::new(&left)
        .with_style(style.clone())
        .with_mark_fields(["行き_区分"])
        .render(&mut form, &data)
        .unwrap();
    assert_eq!(stats, RenderStats { texts: 0, marks: 1 });

    FormRenderer::new(&right)
        .with_style(style)
        .with_mark_fields(["行き_区分"])
        .render(&mut form, &data)
        .unwrap();

    // Ring around the "a" positions on each side
    assert!(is_dark(&form, 64, 60));
    assert!(is_dark(&form, 264, 60));

    // Nothing around the "b" positions
    assert!(!is_dark(&form, 104, 60));
    assert!(!is_dark(&form, 304, 60));
    assert!(!is_dark(&form, 76, 60));
}

#[test]
fn test_text_without_font_is_an_error() {
    let mut text = template::TextPositions::new();
    text.insert("氏名", Point::new(10.0, 20.0));
    let layout = template::Layout::new(text, template::MarkPositions::default());

    let mut data = FormData::new();
    data.insert("氏名", "Taro");

    let mut form = blank_form(100, 100);
    let err = FormRenderer::new(&layout)
        .render(&mut form, &data)
        .unwrap_err();
    assert!(matches!(err, TemplateError::ImageError(_)));
}

#[test]
fn test_text_rendered_at_anchor() {
    let mut text = template::TextPositions::new();
    text.insert("氏名", Point::new(10.0, 20.0));
    let layout = template::Layout::new(text, template::MarkPositions::default());

    let mut data = FormData::new();
    data.insert("氏名", "Taro");

    let mut form = blank_form(200, 100).with_font(FontData::from_file("../../fonts/DejaVuSans.ttf").unwrap());
    FormRenderer::new(&layout).render(&mut form, &data).unwrap();

    let mut min_x = u32::MAX;
    let mut min_y = u32::MAX;
    for (x, y, pixel) in form.as_rgba().enumerate_pixels() {
        if pixel.0[0] < 200 {
            min_x = min_x.min(x);
            min_y = min_y.min(y);
        }
    }
    assert!((10..=14).contains(&min_x), "left edge at {min_x}");
    assert!((20..=35).contains(&min_y), "top edge at {min_y}");
}
