//! Font descriptor document structures

use serde::{Deserialize, Serialize};

/// A parsed bitmap-font descriptor.
///
/// Holds the element records extracted from one AngelCode BMFont XML
/// document. A descriptor is built fresh per conversion and discarded after
/// serialization; it has no persistent identity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FontDescriptor {
    /// The `info` element, if present.
    pub info: Option<AttributeRecord>,
    /// The `common` element, if present.
    pub common: Option<AttributeRecord>,
    /// One record per `page` element.
    pub pages: Vec<AttributeRecord>,
    /// The `chars` container's `count` attribute, kept verbatim.
    pub chars_count: Option<String>,
    /// One record per `char` element, in document order.
    pub chars: Vec<AttributeRecord>,
    /// Whether a `kernings` container element was seen.
    pub kernings_present: bool,
    /// The `kernings` container's `count` attribute, kept verbatim.
    pub kernings_count: Option<String>,
    /// One record per `kerning` element, in document order.
    pub kernings: Vec<AttributeRecord>,
}

/// Ordered attributes captured from one source XML element.
///
/// No type coercion is applied; values stay the raw strings found on the
/// element. Names within one record are unique (a duplicate is rejected at
/// parse time).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttributeRecord {
    /// Attributes in document order.
    pub attrs: Vec<RecordAttr>,
}

/// A single name/value attribute pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordAttr {
    /// Attribute name.
    pub name: String,
    /// Raw string value.
    pub value: String,
}

impl AttributeRecord {
    /// Creates an empty attribute record.
    #[must_use]
    pub fn new() -> Self {
        AttributeRecord { attrs: Vec::new() }
    }

    /// Value of the attribute with the given name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Append an attribute, preserving document order.
    pub fn push(&mut self, name: String, value: String) {
        self.attrs.push(RecordAttr { name, value });
    }

    /// Number of attributes on this record.
    #[must_use]
    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    /// True when the record carries no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_first_match_in_order() {
        let mut record = AttributeRecord::new();
        record.push("size".into(), "24".into());
        record.push("face".into(), "Arial".into());

        assert_eq!(record.get("size"), Some("24"));
        assert_eq!(record.get("face"), Some("Arial"));
        assert_eq!(record.get("missing"), None);
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn descriptor_round_trips_through_json() {
        let mut info = AttributeRecord::new();
        info.push("size".into(), "24".into());

        let doc = FontDescriptor {
            info: Some(info),
            ..FontDescriptor::default()
        };

        let json = serde_json::to_string(&doc).unwrap();
        let back: FontDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(back.info.unwrap().get("size"), Some("24"));
        assert!(back.chars.is_empty());
    }
}
