//! Laya dialect XML writing

use crate::error::Result;
use crate::formats::bmfont::FontDescriptor;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};

/// Char attributes the Laya font loader consumes.
const CHAR_ATTRS: [&str; 8] = [
    "id", "x", "y", "width", "height", "xoffset", "yoffset", "xadvance",
];
/// Kerning attributes the Laya font loader consumes.
const KERNING_ATTRS: [&str; 3] = ["first", "second", "amount"];

/// Serialize a descriptor to Laya-dialect XML
///
/// The Laya loader expects `size` and `lineHeight` together on the `info`
/// element; `size` comes from the source `info` and `lineHeight` from the
/// source `common`, each defaulting to `"32"` when the attribute or its
/// element is missing. Char and kerning elements keep only the attributes
/// the loader reads, and an attribute absent on the source stays absent on
/// the output.
///
/// # Errors
/// Returns an error if XML serialization fails.
pub fn serialize_laya(doc: &FontDescriptor) -> Result<String> {
    let mut output = Vec::new();
    let mut writer = Writer::new_with_indent(&mut output, b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    writer.write_event(Event::Start(BytesStart::new("font")))?;

    let size = doc.info.as_ref().and_then(|r| r.get("size")).unwrap_or("32");
    let line_height = doc
        .common
        .as_ref()
        .and_then(|r| r.get("lineHeight"))
        .unwrap_or("32");

    let mut info = BytesStart::new("info");
    info.push_attribute(("autoScaleSize", "true"));
    info.push_attribute(("size", size));
    info.push_attribute(("lineHeight", line_height));
    writer.write_event(Event::Empty(info))?;

    writer.write_event(Event::Start(BytesStart::new("chars")))?;
    for ch in &doc.chars {
        let mut tag = BytesStart::new("char");
        for name in CHAR_ATTRS {
            if let Some(value) = ch.get(name) {
                tag.push_attribute((name, value));
            }
        }
        writer.write_event(Event::Empty(tag))?;
    }
    writer.write_event(Event::End(BytesEnd::new("chars")))?;

    if !doc.kernings.is_empty() {
        writer.write_event(Event::Start(BytesStart::new("kernings")))?;
        for kerning in &doc.kernings {
            let mut tag = BytesStart::new("kerning");
            for name in KERNING_ATTRS {
                if let Some(value) = kerning.get(name) {
                    tag.push_attribute((name, value));
                }
            }
            writer.write_event(Event::Empty(tag))?;
        }
        writer.write_event(Event::End(BytesEnd::new("kernings")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("font")))?;

    let xml = String::from_utf8(output)?;
    Ok(xml)
}
