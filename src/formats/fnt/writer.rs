//! Classic FNT text writing
//!
//! The classic descriptor is line-oriented: an `info` and a `common` line,
//! one `page` line per atlas page, a `chars count=N` header followed by one
//! `char` line per glyph, and a `kernings` section when the source has one.

use crate::error::Result;
use crate::formats::bmfont::{AttributeRecord, FontDescriptor};

/// Attribute names always quoted on `info` lines.
const INFO_QUOTED: &[&str] = &["face", "charset"];
/// Attribute names always quoted on `page` lines.
const PAGE_QUOTED: &[&str] = &["file"];

/// Serialize a descriptor to classic FNT text
///
/// The `chars count=` line uses the source `chars` container's `count`
/// attribute verbatim when present, even if it disagrees with the actual
/// number of `char` records; the counted value is only a fallback. The
/// `kernings` section appears when a `kernings` container was seen or any
/// `kerning` record exists.
///
/// # Errors
/// Infallible today; `Result` is kept for parity with the XML writer.
pub fn serialize_fnt(doc: &FontDescriptor) -> Result<String> {
    let mut out = String::new();

    if let Some(info) = &doc.info {
        out.push_str("info ");
        out.push_str(&format_attrs(info, INFO_QUOTED));
        out.push('\n');
    }

    if let Some(common) = &doc.common {
        out.push_str("common ");
        out.push_str(&format_attrs(common, &[]));
        out.push('\n');
    }

    for page in &doc.pages {
        out.push_str("page ");
        out.push_str(&format_attrs(page, PAGE_QUOTED));
        out.push('\n');
    }

    let char_count = doc
        .chars_count
        .clone()
        .unwrap_or_else(|| doc.chars.len().to_string());
    out.push_str(&format!("chars count={char_count}\n"));
    for ch in &doc.chars {
        out.push_str("char ");
        out.push_str(&format_attrs(ch, &[]));
        out.push('\n');
    }

    if doc.kernings_present || !doc.kernings.is_empty() {
        let kerning_count = doc
            .kernings_count
            .clone()
            .unwrap_or_else(|| doc.kernings.len().to_string());
        out.push_str(&format!("kernings count={kerning_count}\n"));
        for kerning in &doc.kernings {
            out.push_str("kerning ");
            out.push_str(&format_attrs(kerning, &[]));
            out.push('\n');
        }
    }

    Ok(out)
}

/// Join an element's attributes as `name=value` pairs in document order.
///
/// A value is double-quoted when its name is in the element type's
/// always-quote set, when it contains a space, or when it is empty.
fn format_attrs(record: &AttributeRecord, always_quote: &[&str]) -> String {
    let mut parts = Vec::with_capacity(record.len());
    for attr in &record.attrs {
        let quote = always_quote.contains(&attr.name.as_str())
            || attr.value.contains(' ')
            || attr.value.is_empty();
        if quote {
            parts.push(format!("{}=\"{}\"", attr.name, attr.value));
        } else {
            parts.push(format!("{}={}", attr.name, attr.value));
        }
    }
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::bmfont::parse_descriptor;
    use pretty_assertions::assert_eq;

    #[test]
    fn emits_all_attributes_in_document_order() {
        let doc = parse_descriptor(
            r#"<font>
                <info face="Test" size="24" bold="0"/>
                <common lineHeight="28" base="22"/>
                <pages><page id="0" file="test_0.png"/></pages>
                <chars count="1">
                    <char id="65" x="0" y="0" width="10" height="12" page="0" chnl="15"/>
                </chars>
            </font>"#,
        )
        .unwrap();

        let expected = "info face=\"Test\" size=24 bold=0\n\
                        common lineHeight=28 base=22\n\
                        page id=0 file=\"test_0.png\"\n\
                        chars count=1\n\
                        char id=65 x=0 y=0 width=10 height=12 page=0 chnl=15\n";
        assert_eq!(serialize_fnt(&doc).unwrap(), expected);
    }

    #[test]
    fn quotes_values_with_spaces_and_empty_values() {
        let doc = parse_descriptor(
            r#"<font><info face="Open Sans" size="24" charset="" padding="1,1,1,1"/></font>"#,
        )
        .unwrap();
        let fnt = serialize_fnt(&doc).unwrap();
        assert!(fnt.contains(r#"face="Open Sans""#));
        assert!(fnt.contains(r#"charset="""#));
        assert!(fnt.contains("size=24"));
        assert!(fnt.contains("padding=1,1,1,1"));
    }

    #[test]
    fn always_quote_set_applies_even_to_plain_values() {
        let doc = parse_descriptor(r#"<font><info face="Arial" charset="OEM"/></font>"#).unwrap();
        let fnt = serialize_fnt(&doc).unwrap();
        assert!(fnt.contains(r#"face="Arial""#));
        assert!(fnt.contains(r#"charset="OEM""#));
    }

    #[test]
    fn declared_char_count_wins_over_actual() {
        let doc = parse_descriptor(
            r#"<font><chars count="7"><char id="65"/></chars></font>"#,
        )
        .unwrap();
        let fnt = serialize_fnt(&doc).unwrap();
        assert!(fnt.contains("chars count=7\n"));
    }

    #[test]
    fn char_count_falls_back_to_counting() {
        let doc = parse_descriptor(r#"<font><chars><char id="65"/><char id="66"/></chars></font>"#)
            .unwrap();
        let fnt = serialize_fnt(&doc).unwrap();
        assert!(fnt.contains("chars count=2\n"));
    }

    #[test]
    fn no_kernings_section_without_source_kernings() {
        let doc = parse_descriptor(r#"<font><chars/></font>"#).unwrap();
        let fnt = serialize_fnt(&doc).unwrap();
        assert!(!fnt.contains("kernings"));
    }

    #[test]
    fn empty_kernings_container_still_triggers_section() {
        let doc = parse_descriptor(r#"<font><kernings/></font>"#).unwrap();
        let fnt = serialize_fnt(&doc).unwrap();
        assert!(fnt.contains("kernings count=0\n"));
    }

    #[test]
    fn kerning_lines_follow_declared_count() {
        let doc = parse_descriptor(
            r#"<font><kernings count="2">
                <kerning first="65" second="86" amount="-1"/>
                <kerning first="84" second="111" amount="-2"/>
            </kernings></font>"#,
        )
        .unwrap();
        let fnt = serialize_fnt(&doc).unwrap();
        assert!(fnt.contains("kernings count=2\n"));
        assert!(fnt.contains("kerning first=65 second=86 amount=-1\n"));
        assert!(fnt.contains("kerning first=84 second=111 amount=-2\n"));
    }
}
