//! Batch descriptor conversion
//!
//! Converts whole directories of XML descriptors in parallel, preserving
//! the source directory structure under the destination.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;
use walkdir::WalkDir;

use super::{ConvertPhase, ConvertProgress, Target, convert_xml_to_fnt, convert_xml_to_laya};

/// Result of a batch conversion
#[derive(Debug, Clone)]
pub struct BatchConvertResult {
    /// Number of successful conversions
    pub success_count: usize,
    /// Number of failed conversions
    pub fail_count: usize,
    /// Messages for each file processed
    pub results: Vec<String>,
}

/// Find all .xml descriptor files in a directory recursively
///
/// # Returns
/// A sorted list of paths to .xml files found in the directory tree.
pub fn find_descriptor_files<P: AsRef<Path>>(dir: P) -> Vec<PathBuf> {
    let mut files: Vec<_> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| {
            e.path().is_file()
                && e.path()
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("xml"))
        })
        .map(|e| e.path().to_path_buf())
        .collect();

    files.sort();
    files
}

/// Batch convert descriptor files in parallel
///
/// Each file converts independently; a failure is reported in the result
/// and never aborts the rest of the batch. Output files keep the source's
/// path relative to `source_base`, with the extension swapped for the
/// target's.
///
/// # Arguments
/// * `files` - List of descriptor files to convert
/// * `source_base` - Base directory of the source (for calculating relative paths)
/// * `dest_base` - Destination directory for converted files
/// * `target` - Output dialect
/// * `progress` - Callback for progress updates
pub fn batch_convert<F>(
    files: &[PathBuf],
    source_base: &Path,
    dest_base: &Path,
    target: Target,
    progress: F,
) -> BatchConvertResult
where
    F: Fn(&ConvertProgress) + Send + Sync,
{
    let success_counter = AtomicUsize::new(0);
    let fail_counter = AtomicUsize::new(0);
    let processed = AtomicUsize::new(0);
    let total = files.len();

    let results: Vec<String> = files
        .par_iter()
        .map(|path| {
            let relative_path = path.strip_prefix(source_base).unwrap_or(path.as_path());
            let display_path = relative_path.to_string_lossy();

            let current = processed.fetch_add(1, Ordering::SeqCst) + 1;
            progress(&ConvertProgress::with_file(
                ConvertPhase::Converting,
                current,
                total,
                display_path.to_string(),
            ));

            let dest = dest_base
                .join(relative_path)
                .with_extension(target.output_extension());

            if let Some(parent) = dest.parent() {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    fail_counter.fetch_add(1, Ordering::SeqCst);
                    return format!("Failed to create folder for {display_path}: {e}");
                }
            }

            let outcome = match target {
                Target::LayaXml => convert_xml_to_laya(path.as_path(), dest.as_path()),
                Target::FntText => convert_xml_to_fnt(path.as_path(), dest.as_path()),
            };

            match outcome {
                Ok(()) => {
                    success_counter.fetch_add(1, Ordering::SeqCst);
                    format!("Converted {display_path}")
                }
                Err(e) => {
                    fail_counter.fetch_add(1, Ordering::SeqCst);
                    format!("Failed to convert {display_path}: {e}")
                }
            }
        })
        .collect();

    BatchConvertResult {
        success_count: success_counter.load(Ordering::SeqCst),
        fail_count: fail_counter.load(Ordering::SeqCst),
        results,
    }
}
