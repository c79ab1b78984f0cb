use fntconv::converter::batch_convert;
use fntconv::prelude::*;
use std::fs;
use tempfile::tempdir;

const SAMPLE: &str = r#"<?xml version="1.0"?>
<font>
  <info face="Test Font" size="24" bold="0" padding="1,1,1,1" spacing="1,1" charset=""/>
  <common lineHeight="28" base="22" scaleW="256" scaleH="256" pages="1"/>
  <pages>
    <page id="0" file="test_0.png"/>
  </pages>
  <chars count="2">
    <char id="65" x="0" y="0" width="10" height="12" xoffset="0" yoffset="2" xadvance="11" page="0" chnl="15"/>
    <char id="66" x="12" y="0" width="9" height="12" xoffset="1" yoffset="2" xadvance="10" page="0" chnl="15"/>
  </chars>
</font>
"#;

const BROKEN: &str = r#"<font><info size="32""#;

#[test]
fn converts_file_to_fnt_text() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("test.xml");
    let dest = dir.path().join("test.fnt");
    fs::write(&source, SAMPLE).unwrap();

    convert_xml_to_fnt(&source, &dest).unwrap();

    let output = fs::read_to_string(&dest).unwrap();
    assert!(output.starts_with("info face=\"Test Font\" size=24 bold=0"));
    assert!(output.contains("common lineHeight=28 base=22"));
    assert!(output.contains("page id=0 file=\"test_0.png\"\n"));
    assert!(output.contains("chars count=2\n"));
    assert!(output.contains("char id=65 "));
    assert!(output.contains("char id=66 "));
    assert!(!output.contains("kernings"));
}

#[test]
fn converts_file_to_laya_xml() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("test.xml");
    let dest = dir.path().join("test_laya.xml");
    fs::write(&source, SAMPLE).unwrap();

    convert_xml_to_laya(&source, &dest).unwrap();

    let output = fs::read_to_string(&dest).unwrap();
    assert!(output.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>"));
    assert!(output.contains(r#"<info autoScaleSize="true" size="24" lineHeight="28"/>"#));
    assert!(output.contains(
        r#"<char id="65" x="0" y="0" width="10" height="12" xoffset="0" yoffset="2" xadvance="11"/>"#
    ));
    // Page records and non-whitelisted char attributes don't survive.
    assert!(!output.contains("test_0.png"));
    assert!(!output.contains("chnl"));
}

#[test]
fn invalid_xml_fails_without_output() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("broken.xml");
    let dest = dir.path().join("broken.fnt");
    fs::write(&source, BROKEN).unwrap();

    let result = convert_xml_to_fnt(&source, &dest);
    assert!(matches!(result, Err(Error::InvalidDocument { .. })));
    assert!(!dest.exists());
}

#[test]
fn missing_source_file_fails() {
    let dir = tempdir().unwrap();
    let result = convert_xml_to_fnt(
        &dir.path().join("missing.xml"),
        &dir.path().join("out.fnt"),
    );
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn batch_preserves_structure_and_reports_failures() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("src");
    let out = dir.path().join("out");
    fs::create_dir_all(src.join("nested")).unwrap();
    fs::write(src.join("a.xml"), SAMPLE).unwrap();
    fs::write(src.join("broken.xml"), BROKEN).unwrap();
    fs::write(src.join("nested").join("b.xml"), SAMPLE).unwrap();

    let files = find_descriptor_files(&src);
    assert_eq!(files.len(), 3);

    let result = batch_convert(&files, &src, &out, Target::FntText, |_| {});
    assert_eq!(result.success_count, 2);
    assert_eq!(result.fail_count, 1);
    assert!(out.join("a.fnt").exists());
    assert!(out.join("nested").join("b.fnt").exists());
    assert!(!out.join("broken.fnt").exists());
    assert!(
        result
            .results
            .iter()
            .any(|m| m.starts_with("Failed to convert"))
    );
}

#[test]
fn transcode_matches_file_level_output() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("test.xml");
    let dest = dir.path().join("test.fnt");
    fs::write(&source, SAMPLE).unwrap();

    convert_xml_to_fnt(&source, &dest).unwrap();

    let direct = transcode(SAMPLE, Target::FntText).unwrap();
    assert_eq!(fs::read_to_string(&dest).unwrap(), direct);
}
