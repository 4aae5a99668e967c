//! Pure text layout: positional formatting, word-wrap, and band padding.
//!
//! Everything here is geometry-free and font-free so the formatting rules can
//! be tested without touching font files. Rasterization lives in [`crate::draw`].

use certmaker_core::{fill_template, FieldSpec, Row};

use crate::error::RenderError;

/// Word-wrap a formatted message into lines of at most `max_elements` tokens.
///
/// Tokens split on whitespace and rejoin with single spaces, preserving order.
/// Without a wrap width the whole message is a single line.
pub fn wrap_words(message: &str, max_elements: Option<usize>) -> Vec<String> {
    match max_elements {
        Some(m) if m > 0 => {
            let tokens: Vec<&str> = message.split_whitespace().collect();
            if tokens.is_empty() {
                return vec![String::new()];
            }
            tokens.chunks(m).map(|chunk| chunk.join(" ")).collect()
        }
        _ => vec![message.to_owned()],
    }
}

/// Pad short content to `band` lines by alternately prepending and appending
/// empty lines, starting with a prepend. Content longer than the band is
/// returned untouched and overflows the reserved area.
pub fn pad_to_band(mut lines: Vec<String>, band: usize) -> Vec<String> {
    let mut prepend = true;
    while lines.len() < band {
        if prepend {
            lines.insert(0, String::new());
        } else {
            lines.push(String::new());
        }
        prepend = !prepend;
    }
    lines
}

/// Anchor point for line `i`: lines stack downward from the field anchor,
/// spaced by `pad` pixels.
pub fn line_anchor(coords: (f32, f32), index: usize, pad: f32) -> (f32, f32) {
    (coords.0, coords.1 + index as f32 * pad)
}

/// Resolve, format, wrap, and pad one field against a roster row.
///
/// This is the full logical-line pipeline; the result is what gets drawn, one
/// line per anchor. Empty lines keep their slot but draw nothing.
pub fn layout_field(row: &Row, field: &FieldSpec) -> Result<Vec<String>, RenderError> {
    let names = field.column.names();
    let mut values = Vec::with_capacity(names.len());
    for name in &names {
        values.push(row.get(name)?);
    }
    let message = fill_template(&field.formatter, &values)?;
    Ok(pad_to_band(
        wrap_words(&message, field.max_elements),
        field.band_lines,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
