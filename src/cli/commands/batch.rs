//! CLI interface for batch conversion

use std::path::Path;
use std::time::Instant;

use crate::cli::progress;
use crate::converter::{Target, batch_convert, find_descriptor_files};

pub fn execute(source: &Path, dest: &Path, to: &str, quiet: bool) -> anyhow::Result<()> {
    let target = match to.to_lowercase().as_str() {
        "laya" | "xml" => Target::LayaXml,
        "fnt" => Target::FntText,
        other => anyhow::bail!("Unsupported output format: {other} (expected laya or fnt)"),
    };

    let started = Instant::now();

    if !quiet {
        progress::print_step(
            1,
            2,
            progress::LOOKING_GLASS,
            "Scanning for XML descriptors...",
        );
    }
    let files = find_descriptor_files(source);
    if files.is_empty() {
        anyhow::bail!("No XML descriptors found in {}", source.display());
    }

    if !quiet {
        progress::print_step(
            2,
            2,
            progress::GEAR,
            &format!("Converting {} descriptors...", files.len()),
        );
    }

    let bar = if quiet {
        None
    } else {
        Some(progress::simple_bar(files.len() as u64, "Converting"))
    };

    let result = batch_convert(&files, source, dest, target, |_| {
        if let Some(pb) = &bar {
            pb.inc(1);
        }
    });

    if let Some(pb) = &bar {
        pb.finish_and_clear();
    }

    for message in &result.results {
        if message.starts_with("Failed") {
            eprintln!("{message}");
        } else if !quiet {
            println!("{message}");
        }
    }

    println!(
        "Converted {} descriptors ({} failed)",
        result.success_count, result.fail_count
    );
    if !quiet {
        progress::print_done(started.elapsed());
    }

    if result.fail_count > 0 {
        anyhow::bail!("{} of {} conversions failed", result.fail_count, files.len());
    }
    Ok(())
}
