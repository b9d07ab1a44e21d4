//! Text rasterization

use crate::shape::blend_pixel;
use crate::{Color, FontData};
use ab_glyph::{point, Font, ScaleFont};
use image::RgbaImage;

/// Draw text with its anchor at (x, y)
///
/// The anchor is the top-left corner of the first line box: `x` is where
/// the pen starts and `y` is the ascender line, so the baseline sits at
/// `y + ascent`. Embedded newlines start a new line below the previous one.
///
/// # Arguments
/// * `canvas` - Target image
/// * `font` - Font to rasterize with
/// * `text` - Text to draw
/// * `x`, `y` - Anchor position in pixels
/// * `size` - Em size in pixels
/// * `color` - Fill color
pub fn draw_text(
    canvas: &mut RgbaImage,
    font: &FontData,
    text: &str,
    x: f32,
    y: f32,
    size: f32,
    color: Color,
) {
    let scale = font.px_scale(size);
    let scaled = font.font().as_scaled(scale);
    let line_height = font.line_height(size);

    for (line_no, line) in text.lines().enumerate() {
        let baseline = y + scaled.ascent() + line_no as f32 * line_height;
        let mut caret = x;
        let mut previous = None;

        for c in line.chars() {
            let id = scaled.glyph_id(c);
            if let Some(prev) = previous {
                caret += scaled.kern(prev, id);
            }

            let glyph = id.with_scale_and_position(scale, point(caret, baseline));
            caret += scaled.h_advance(id);
            previous = Some(id);

            let Some(outlined) = font.font().outline_glyph(glyph) else {
                continue;
            };
            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, coverage| {
                blend_pixel(
                    canvas,
                    bounds.min.x as i64 + gx as i64,
                    bounds.min.y as i64 + gy as i64,
                    color,
                    coverage,
                );
            });
        }
    }
}
