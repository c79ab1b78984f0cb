//! Descriptor format conversion
//!
//! This module handles conversions from AngelCode BMFont XML descriptors to
//! the two output dialects:
//! - Laya XML - the schema the Laya engine's font loader expects
//! - FNT text - the classic line-oriented `key=value` descriptor format

pub mod batch;
mod xml_to_fnt;
mod xml_to_laya;

pub use batch::{BatchConvertResult, batch_convert, find_descriptor_files};
pub use xml_to_fnt::{convert_xml_to_fnt, convert_xml_to_fnt_with_progress};
pub use xml_to_laya::{convert_xml_to_laya, convert_xml_to_laya_with_progress};

use crate::error::Result;
use crate::formats::bmfont::parse_descriptor;
use crate::formats::fnt::serialize_fnt;
use crate::formats::laya::serialize_laya;

/// Output dialect selector for the descriptor transcoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Laya engine XML dialect.
    LayaXml,
    /// Classic line-oriented FNT text.
    FntText,
}

impl Target {
    /// File extension conventionally used for this dialect.
    #[must_use]
    pub fn output_extension(self) -> &'static str {
        match self {
            Target::LayaXml => "xml",
            Target::FntText => "fnt",
        }
    }
}

/// Convert descriptor text into the selected output dialect.
///
/// A pure function: the result depends only on the input text and the
/// target, and a failure produces no partial output.
///
/// # Errors
/// Returns [`crate::Error::InvalidDocument`] if the input is not parseable
/// XML; serialization failures propagate unchanged.
pub fn transcode(source: &str, target: Target) -> Result<String> {
    let doc = parse_descriptor(source)?;
    match target {
        Target::LayaXml => serialize_laya(&doc),
        Target::FntText => serialize_fnt(&doc),
    }
}

/// Phase of a file-level conversion, for progress reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertPhase {
    /// Reading the source descriptor
    ReadingSource,
    /// Converting between formats
    Converting,
    /// Writing converted output
    WritingOutput,
    /// Operation complete
    Complete,
}

impl ConvertPhase {
    /// Get a human-readable description of this phase
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            ConvertPhase::ReadingSource => "Reading source",
            ConvertPhase::Converting => "Converting",
            ConvertPhase::WritingOutput => "Writing output",
            ConvertPhase::Complete => "Complete",
        }
    }
}

/// Progress update emitted during conversion operations.
#[derive(Debug, Clone)]
pub struct ConvertProgress {
    /// Current operation phase
    pub phase: ConvertPhase,
    /// Current item number (1-indexed)
    pub current: usize,
    /// Total number of items
    pub total: usize,
    /// Current file or step being processed (if applicable)
    pub current_file: Option<String>,
}

impl ConvertProgress {
    /// Create a new progress update
    #[must_use]
    pub fn new(phase: ConvertPhase, current: usize, total: usize) -> Self {
        Self {
            phase,
            current,
            total,
            current_file: None,
        }
    }

    /// Create a progress update with a file/step name
    #[must_use]
    pub fn with_file(
        phase: ConvertPhase,
        current: usize,
        total: usize,
        file: impl Into<String>,
    ) -> Self {
        Self {
            phase,
            current,
            total,
            current_file: Some(file.into()),
        }
    }
}

/// Progress callback type for conversion operations.
pub type ConvertProgressCallback<'a> = &'a (dyn Fn(&ConvertProgress) + Send + Sync);
