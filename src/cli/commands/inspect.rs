//! CLI interface for descriptor inspection

use std::path::Path;

use crate::formats::bmfont::read_descriptor;

pub fn execute(path: &Path, output: Option<&Path>) -> anyhow::Result<()> {
    let doc = read_descriptor(path)?;

    if let Some(output) = output {
        let json = serde_json::to_string_pretty(&doc)?;
        std::fs::write(output, json)?;
        println!("Wrote descriptor JSON to {}", output.display());
        return Ok(());
    }

    println!("{}:", path.display());
    if let Some(info) = &doc.info {
        let face = info.get("face").unwrap_or("<unknown>");
        let size = info.get("size").unwrap_or("?");
        println!("  Face: {face} (size {size})");
    }
    if let Some(common) = &doc.common {
        if let Some(line_height) = common.get("lineHeight") {
            println!("  Line height: {line_height}");
        }
    }
    println!("  Pages: {}", doc.pages.len());
    println!("  Chars: {}", doc.chars.len());
    if let Some(declared) = &doc.chars_count {
        if *declared != doc.chars.len().to_string() {
            println!(
                "  Declared char count: {declared} (actual {})",
                doc.chars.len()
            );
        }
    }
    println!("  Kernings: {}", doc.kernings.len());

    Ok(())
}
