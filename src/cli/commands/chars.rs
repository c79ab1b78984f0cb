//! CLI interface for glyph rectangle listing

use std::path::Path;

use crate::formats::bmfont::read_descriptor;
use crate::preview::glyph_rects;

pub fn execute(path: &Path, limit: Option<usize>) -> anyhow::Result<()> {
    let doc = read_descriptor(path)?;
    let rects = glyph_rects(&doc);
    let shown = limit.unwrap_or(rects.len()).min(rects.len());

    println!("{} glyphs:", rects.len());
    for rect in &rects[..shown] {
        println!(
            "  id={:<6} x={:<5} y={:<5} w={:<5} h={}",
            rect.id, rect.x, rect.y, rect.width, rect.height
        );
    }
    if shown < rects.len() {
        println!("  ... and {} more", rects.len() - shown);
    }

    Ok(())
}
