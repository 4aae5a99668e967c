//! Glyph rasterization onto the certificate image.
//!
//! Text is measured and drawn with rusttype; coverage values are alpha-blended
//! over the base pixels so anti-aliased edges composite cleanly onto the
//! template artwork.

use image::{Rgba, RgbaImage};
use rusttype::{point, Font, Scale};

use crate::error::RenderError;

/// Parse a `#rrggbb` color string into an opaque pixel.
pub fn hex_color(s: &str) -> Result<Rgba<u8>, RenderError> {
    let digits = s.trim().trim_start_matches('#');
    if digits.len() != 6 {
        return Err(RenderError::InvalidColor(s.to_owned()));
    }
    let bytes = hex::decode(digits).map_err(|_| RenderError::InvalidColor(s.to_owned()))?;
    Ok(Rgba([bytes[0], bytes[1], bytes[2], 255]))
}

/// Pixel width and height of `text` at the given scale.
///
/// Width is the rightmost inked pixel of the laid-out glyph run; height is the
/// full line height (ascent + descent), which keeps vertical centering stable
/// across lines with different ink heights.
pub fn measure(font: &Font<'_>, scale: Scale, text: &str) -> (f32, f32) {
    let v_metrics = font.v_metrics(scale);
    let height = v_metrics.ascent - v_metrics.descent;
    if text.is_empty() {
        return (0.0, height);
    }
    let width = font
        .layout(text, scale, point(0.0, v_metrics.ascent))
        .filter_map(|g| g.pixel_bounding_box().map(|bb| bb.max.x as f32))
        .fold(0.0_f32, f32::max);
    (width, height)
}

/// Draw `text` centered on `anchor`, both horizontally and vertically.
pub fn draw_centered(
    canvas: &mut RgbaImage,
    font: &Font<'_>,
    scale: Scale,
    anchor: (f32, f32),
    color: Rgba<u8>,
    text: &str,
) {
    let (width, height) = measure(font, scale, text);
    let left = anchor.0 - width / 2.0;
    let top = anchor.1 - height / 2.0;
    draw_text(canvas, font, scale, left, top, color, text);
}

/// Draw `text` with its top-left corner at `(left, top)`.
///
/// rusttype positions glyphs from the baseline, so the baseline sits one
/// ascent below `top`.
fn draw_text(
    canvas: &mut RgbaImage,
    font: &Font<'_>,
    scale: Scale,
    left: f32,
    top: f32,
    color: Rgba<u8>,
    text: &str,
) {
    let v_metrics = font.v_metrics(scale);
    let baseline = top + v_metrics.ascent;

    for glyph in font.layout(text, scale, point(left, baseline)) {
        let Some(bb) = glyph.pixel_bounding_box() else {
            continue;
        };
        glyph.draw(|gx, gy, coverage| {
            let px = gx as i32 + bb.min.x;
            let py = gy as i32 + bb.min.y;
            if px < 0 || py < 0 {
                return;
            }
            let (px, py) = (px as u32, py as u32);
            if px >= canvas.width() || py >= canvas.height() {
                return;
            }
            if coverage <= 0.0 {
                return;
            }
            let dst = canvas.get_pixel_mut(px, py);
            let inv = 1.0 - coverage;
            dst.0[0] = (color.0[0] as f32 * coverage + dst.0[0] as f32 * inv) as u8;
            dst.0[1] = (color.0[1] as f32 * coverage + dst.0[1] as f32 * inv) as u8;
            dst.0[2] = (color.0[2] as f32 * coverage + dst.0[2] as f32 * inv) as u8;
            dst.0[3] = 255;
        });
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
