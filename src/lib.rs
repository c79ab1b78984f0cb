//! # fntconv
//!
//! Bitmap font descriptor conversion for font-asset pipelines.
//!
//! Retargets AngelCode BMFont XML descriptors for consumption by other
//! runtimes:
//!
//! - **BMFont XML → Laya XML** - the dialect the Laya engine's font loader
//!   expects (`size`/`lineHeight` folded onto `info`, whitelisted char
//!   attributes)
//! - **BMFont XML → FNT text** - the classic line-oriented `key=value`
//!   descriptor format
//!
//! Atlas images themselves are untouched; only the metadata is converted.
//!
//! ## Quick Start
//!
//! ```
//! use fntconv::converter::{Target, transcode};
//!
//! let xml = r#"<font><info size="24"/><common lineHeight="28"/></font>"#;
//! let fnt = transcode(xml, Target::FntText)?;
//! assert!(fnt.starts_with("info size=24"));
//! # Ok::<(), fntconv::Error>(())
//! ```
//!
//! ### Converting Files
//!
//! ```no_run
//! use fntconv::converter::convert_xml_to_fnt;
//!
//! convert_xml_to_fnt("font.xml", "font.fnt")?;
//! # Ok::<(), fntconv::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `fntconv` command-line binary

pub mod converter;
pub mod error;
pub mod formats;
pub mod preview;
pub mod utils;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::converter::{
        Target, convert_xml_to_fnt, convert_xml_to_laya, find_descriptor_files, transcode,
    };
    pub use crate::error::{Error, Result};
    pub use crate::formats::bmfont::{
        AttributeRecord, FontDescriptor, parse_descriptor, read_descriptor,
    };
    pub use crate::formats::fnt::serialize_fnt;
    pub use crate::formats::laya::serialize_laya;
    pub use crate::preview::{GlyphRect, glyph_rects};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
