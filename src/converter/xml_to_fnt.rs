//! BMFont XML to classic FNT text conversion

use std::path::Path;

use crate::converter::{ConvertPhase, ConvertProgress, ConvertProgressCallback};
use crate::error::Result;
use crate::formats::bmfont;
use crate::formats::fnt;

/// Convert a BMFont XML descriptor file to classic FNT text
///
/// # Errors
/// Returns an error if reading, parsing, or writing fails.
pub fn convert_xml_to_fnt<P: AsRef<Path>>(source: P, dest: P) -> Result<()> {
    convert_xml_to_fnt_with_progress(source, dest, &|_| {})
}

/// Convert a BMFont XML descriptor file to classic FNT text with progress callback
///
/// # Errors
/// Returns an error if reading, parsing, or writing fails.
pub fn convert_xml_to_fnt_with_progress<P: AsRef<Path>>(
    source: P,
    dest: P,
    progress: ConvertProgressCallback<'_>,
) -> Result<()> {
    tracing::info!(
        "Converting XML→FNT: {:?} → {:?}",
        source.as_ref(),
        dest.as_ref()
    );

    progress(&ConvertProgress::with_file(
        ConvertPhase::ReadingSource,
        1,
        3,
        "Reading font descriptor...",
    ));
    let doc = bmfont::read_descriptor(&source)?;

    progress(&ConvertProgress::with_file(
        ConvertPhase::Converting,
        2,
        3,
        format!("Converting {} chars to FNT text...", doc.chars.len()),
    ));
    let text = fnt::serialize_fnt(&doc)?;

    progress(&ConvertProgress::with_file(
        ConvertPhase::WritingOutput,
        3,
        3,
        "Writing FNT descriptor...",
    ));
    std::fs::write(dest, text)?;

    progress(&ConvertProgress::new(ConvertPhase::Complete, 3, 3));
    tracing::info!("Conversion complete");
    Ok(())
}
