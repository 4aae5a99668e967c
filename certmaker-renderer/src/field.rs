//! The field renderer: one field descriptor drawn onto one certificate copy.

use std::path::Path;

use image::RgbaImage;
use rusttype::Scale;

use certmaker_core::{FieldSpec, Row};

use crate::draw::{draw_centered, hex_color};
use crate::error::RenderError;
use crate::fonts::FontLibrary;
use crate::layout::{layout_field, line_anchor};

/// Open and decode the base template image as RGBA.
///
/// Callers clone the returned buffer per row; the base is never mutated.
pub fn open_base_image(path: &Path) -> Result<RgbaImage, RenderError> {
    let img = image::open(path).map_err(|e| RenderError::Image {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(img.to_rgba8())
}

/// Render one field's text onto `canvas` for the given roster row.
///
/// Runs the full pipeline: resolve column value(s), fill the positional
/// formatter, word-wrap, pad to the vertical band, then draw each logical
/// line centered on its own anchor. The only side effect is drawing onto
/// `canvas`; any missing column, formatter arity mismatch, or font problem
/// propagates and the caller aborts the row.
pub fn render_field(
    canvas: &mut RgbaImage,
    row: &Row,
    field: &FieldSpec,
    fonts: &mut FontLibrary,
) -> Result<(), RenderError> {
    let font = fonts.get(&field.font_family)?;
    let color = hex_color(&field.font_color)?;
    let lines = layout_field(row, field)?;

    let scale = Scale::uniform(field.font_size);
    for (i, line) in lines.iter().enumerate() {
        if line.is_empty() {
            continue;
        }
        let anchor = line_anchor(field.coords, i, field.pad);
        draw_centered(canvas, &font, scale, anchor, color, line);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
