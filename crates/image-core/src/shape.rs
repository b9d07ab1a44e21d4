//! Mark shapes

use crate::Color;
use image::RgbaImage;

/// Blend `color` into the pixel at (x, y) with the given coverage (0.0 - 1.0)
///
/// Pixels outside the image are ignored.
pub(crate) fn blend_pixel(canvas: &mut RgbaImage, x: i64, y: i64, color: Color, coverage: f32) {
    if x < 0 || y < 0 || x >= canvas.width() as i64 || y >= canvas.height() as i64 {
        return;
    }

    let coverage = coverage.clamp(0.0, 1.0);
    if coverage == 0.0 {
        return;
    }

    let pixel = canvas.get_pixel_mut(x as u32, y as u32);
    let mix = |dst: u8, src: u8| -> u8 {
        (dst as f32 * (1.0 - coverage) + src as f32 * coverage).round() as u8
    };

    pixel.0[0] = mix(pixel.0[0], color.r);
    pixel.0[1] = mix(pixel.0[1], color.g);
    pixel.0[2] = mix(pixel.0[2], color.b);
    pixel.0[3] = pixel.0[3].max((coverage * 255.0).round() as u8);
}

/// Draw an unfilled circle centered on (cx, cy)
///
/// The ring covers every pixel whose distance from the center is within
/// `radius` and greater than `radius - width`, so the stroke grows inward.
/// A width at least as large as the radius produces a filled disc.
pub fn draw_circle(
    canvas: &mut RgbaImage,
    cx: f32,
    cy: f32,
    radius: f32,
    width: f32,
    color: Color,
) {
    if radius <= 0.0 || width <= 0.0 {
        return;
    }

    let inner = radius - width;
    let min_x = (cx - radius).floor() as i64;
    let max_x = (cx + radius).ceil() as i64;
    let min_y = (cy - radius).floor() as i64;
    let max_y = (cy + radius).ceil() as i64;

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let d = ((x as f32 - cx).powi(2) + (y as f32 - cy).powi(2)).sqrt();
            if d <= radius && (inner <= 0.0 || d > inner) {
                blend_pixel(canvas, x, y, color, 1.0);
            }
        }
    }
}
