//! CLI interface for single-file conversion

use std::path::{Path, PathBuf};

use crate::converter::{self, Target};
use crate::utils::path::suggested_output_name;

pub fn execute(source: &Path, destination: Option<&Path>, to: Option<&str>) -> anyhow::Result<()> {
    let destination: PathBuf = match destination {
        Some(dest) => dest.to_path_buf(),
        None => source.with_file_name(suggested_output_name(Some(source))),
    };

    let target = resolve_target(&destination, to)?;

    println!("Converting {:?} to {:?}", source, destination);
    match target {
        Target::LayaXml => converter::convert_xml_to_laya(source, destination.as_path())?,
        Target::FntText => converter::convert_xml_to_fnt(source, destination.as_path())?,
    }

    println!("Conversion complete");
    Ok(())
}

fn resolve_target(destination: &Path, to: Option<&str>) -> anyhow::Result<Target> {
    let format = if let Some(fmt) = to {
        fmt.to_lowercase()
    } else {
        destination
            .extension()
            .and_then(|s| s.to_str())
            .map(|s| s.to_lowercase())
            .ok_or_else(|| {
                anyhow::anyhow!("Cannot detect output format from destination file extension")
            })?
    };

    match format.as_str() {
        "laya" | "xml" => Ok(Target::LayaXml),
        "fnt" => Ok(Target::FntText),
        other => anyhow::bail!(
            "Unsupported output format: {}\n\
             Supported formats:\n\
             - fnt (classic FNT text)\n\
             - laya (Laya engine XML)",
            other
        ),
    }
}
