//! Glyph rectangle extraction for preview overlays
//!
//! Read-only companion to the transcoder: pulls the atlas rectangle of every
//! glyph out of a parsed descriptor so a caller can draw outlines over the
//! atlas image. Has no effect on conversion output.

use serde::{Deserialize, Serialize};

use crate::formats::bmfont::FontDescriptor;

/// One glyph's atlas rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlyphRect {
    /// Character id (code point).
    pub id: i32,
    /// Left edge in atlas pixels.
    pub x: i32,
    /// Top edge in atlas pixels.
    pub y: i32,
    /// Rectangle width.
    pub width: i32,
    /// Rectangle height.
    pub height: i32,
}

/// Extract the glyph rectangle of every `char` record.
///
/// Missing or non-numeric fields default to 0.
#[must_use]
pub fn glyph_rects(doc: &FontDescriptor) -> Vec<GlyphRect> {
    doc.chars
        .iter()
        .map(|ch| GlyphRect {
            id: int_attr(ch.get("id")),
            x: int_attr(ch.get("x")),
            y: int_attr(ch.get("y")),
            width: int_attr(ch.get("width")),
            height: int_attr(ch.get("height")),
        })
        .collect()
}

fn int_attr(value: Option<&str>) -> i32 {
    value.and_then(|v| v.parse().ok()).unwrap_or(0)
}
