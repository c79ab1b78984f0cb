//! Path utilities

use std::path::Path;

/// Suggested output filename for a converted descriptor: the source filename
/// with a trailing `.xml` (any case) replaced by `.fnt`, or `font.fnt` when
/// no usable source name is known.
#[must_use]
pub fn suggested_output_name(source: Option<&Path>) -> String {
    let Some(name) = source.and_then(Path::file_name).and_then(|n| n.to_str()) else {
        return String::from("font.fnt");
    };

    let stem = if name.to_ascii_lowercase().ends_with(".xml") {
        &name[..name.len() - 4]
    } else {
        name
    };
    format!("{stem}.fnt")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_xml_suffix_case_insensitively() {
        assert_eq!(
            suggested_output_name(Some(Path::new("atlas/font.xml"))),
            "font.fnt"
        );
        assert_eq!(
            suggested_output_name(Some(Path::new("FONT.XML"))),
            "FONT.fnt"
        );
    }

    #[test]
    fn appends_fnt_when_name_has_no_xml_suffix() {
        assert_eq!(
            suggested_output_name(Some(Path::new("font.png"))),
            "font.png.fnt"
        );
    }

    #[test]
    fn falls_back_to_fixed_name() {
        assert_eq!(suggested_output_name(None), "font.fnt");
    }
}
