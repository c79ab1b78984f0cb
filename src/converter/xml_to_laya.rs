//! BMFont XML to Laya XML conversion

use std::path::Path;

use crate::converter::{ConvertPhase, ConvertProgress, ConvertProgressCallback};
use crate::error::Result;
use crate::formats::bmfont;
use crate::formats::laya;

/// Convert a BMFont XML descriptor file to Laya-dialect XML
///
/// # Errors
/// Returns an error if reading, parsing, or writing fails.
pub fn convert_xml_to_laya<P: AsRef<Path>>(source: P, dest: P) -> Result<()> {
    convert_xml_to_laya_with_progress(source, dest, &|_| {})
}

/// Convert a BMFont XML descriptor file to Laya-dialect XML with progress callback
///
/// # Errors
/// Returns an error if reading, parsing, or writing fails.
pub fn convert_xml_to_laya_with_progress<P: AsRef<Path>>(
    source: P,
    dest: P,
    progress: ConvertProgressCallback<'_>,
) -> Result<()> {
    tracing::info!(
        "Converting XML→Laya: {:?} → {:?}",
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
        format!("Converting {} chars to Laya XML...", doc.chars.len()),
    ));
    let xml = laya::serialize_laya(&doc)?;

    progress(&ConvertProgress::with_file(
        ConvertPhase::WritingOutput,
        3,
        3,
        "Writing Laya descriptor...",
    ));
    std::fs::write(dest, xml)?;

    progress(&ConvertProgress::new(ConvertPhase::Complete, 3, 3));
    tracing::info!("Conversion complete");
    Ok(())
}
