//! BMFont descriptor reading

use super::document::{AttributeRecord, FontDescriptor};
use crate::error::{Error, Result};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::fs;
use std::path::Path;

/// Read a BMFont XML descriptor from disk
///
/// # Errors
/// Returns an error if the file cannot be read or has invalid XML.
pub fn read_descriptor<P: AsRef<Path>>(path: P) -> Result<FontDescriptor> {
    let content = fs::read_to_string(path)?;
    parse_descriptor(&content)
}

/// Parse a BMFont descriptor from XML text
///
/// Elements are collected by name wherever they appear in the tree: the
/// first `info`, `common`, `chars`, and `kernings` win, while `page`,
/// `char`, and `kerning` records accumulate in document order.
///
/// # Errors
/// Returns [`Error::InvalidDocument`] if the text is not well-formed XML or
/// an element carries malformed or duplicate attributes.
pub fn parse_descriptor(content: &str) -> Result<FontDescriptor> {
    let mut reader = Reader::from_str(content);
    reader.trim_text(true);

    let mut doc = FontDescriptor::default();
    let mut chars_seen = false;

    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e) | Event::Empty(e)) => match e.name().as_ref() {
                b"info" => {
                    if doc.info.is_none() {
                        doc.info = Some(record_from(&e)?);
                    }
                }
                b"common" => {
                    if doc.common.is_none() {
                        doc.common = Some(record_from(&e)?);
                    }
                }
                b"page" => doc.pages.push(record_from(&e)?),
                b"chars" => {
                    if !chars_seen {
                        chars_seen = true;
                        doc.chars_count = count_attr(&e)?;
                    }
                }
                b"char" => doc.chars.push(record_from(&e)?),
                b"kernings" => {
                    if !doc.kernings_present {
                        doc.kernings_present = true;
                        doc.kernings_count = count_attr(&e)?;
                    }
                }
                b"kerning" => doc.kernings.push(record_from(&e)?),
                _ => {}
            },
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(Error::invalid_document(e)),
        }
        buf.clear();
    }

    Ok(doc)
}

/// Capture every attribute on an element, in document order.
fn record_from(e: &BytesStart<'_>) -> Result<AttributeRecord> {
    let mut record = AttributeRecord::new();
    for attr in e.attributes() {
        let attr = attr?;
        let name = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(Error::invalid_document)?
            .into_owned();
        record.push(name, value);
    }
    Ok(record)
}

fn count_attr(e: &BytesStart<'_>) -> Result<Option<String>> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == b"count" {
            let value = attr
                .unescape_value()
                .map_err(Error::invalid_document)?
                .into_owned();
            return Ok(Some(value));
        }
    }
    Ok(None)
}
