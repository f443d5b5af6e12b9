// Copyright (c) Contributors to the inifold project.
// SPDX-License-Identifier: Apache-2.0

use rstest::rstest;
use tempfile::TempDir;

use super::*;

#[rstest]
fn test_parse_sections_and_options() {
    let text = r#"
[COMMON]
key-1 : value-1
key-2 = value-2

[DATA]
data-key : data-value
"#;
    let document = parse_str(text).expect("Should parse");

    assert_eq!(document.len(), 2);
    let common = document.section("COMMON").expect("COMMON exists");
    assert_eq!(common.options()[0].key, "key-1");
    assert_eq!(common.options()[0].value.as_deref(), Some("value-1"));
    assert_eq!(common.options()[1].key, "key-2");
    assert_eq!(common.options()[1].value.as_deref(), Some("value-2"));
}

#[rstest]
fn test_parse_splits_at_first_delimiter() {
    let document = parse_str("[s]\nkey = a : b\n").expect("Should parse");
    let option = &document.section("s").expect("s exists").options()[0];
    assert_eq!(option.key, "key");
    assert_eq!(option.value.as_deref(), Some("a : b"));
}

#[rstest]
fn test_parse_bare_key_has_no_value() {
    let document = parse_str("[s]\nuse COMMON\n").expect("Should parse");
    let option = &document.section("s").expect("s exists").options()[0];
    assert_eq!(option.key, "use COMMON");
    assert_eq!(option.value, None);
}

#[rstest]
fn test_parse_empty_value_is_present_but_empty() {
    let document = parse_str("[s]\nkey =\n").expect("Should parse");
    let option = &document.section("s").expect("s exists").options()[0];
    assert_eq!(option.value.as_deref(), Some(""));
}

#[rstest]
fn test_parse_skips_comments_and_blank_lines() {
    let text = r#"
# leading comment
[s]
; another comment
key : value

# trailing comment
"#;
    let document = parse_str(text).expect("Should parse");
    assert_eq!(document.section("s").expect("s exists").len(), 1);
}

#[rstest]
fn test_parse_continuation_lines_extend_value() {
    let text = r#"
[machine-type-5]
intel-18.0.5-mpich-7.7.6 :
    intel-18
    intel
intel-19.0.4-mpich-7.7.6 :
    intel-19
"#;
    let document = parse_str(text).expect("Should parse");
    let section = document
        .section("machine-type-5")
        .expect("section exists");

    assert_eq!(section.len(), 2);
    assert_eq!(
        section.options()[0].value.as_deref(),
        Some("intel-18\nintel")
    );
    assert_eq!(section.options()[1].value.as_deref(), Some("intel-19"));
}

#[rstest]
fn test_parse_continuation_of_bare_key() {
    let document = parse_str("[s]\nkey\n    more\n").expect("Should parse");
    let option = &document.section("s").expect("s exists").options()[0];
    assert_eq!(option.key, "key");
    assert_eq!(option.value.as_deref(), Some("more"));
}

#[rstest]
fn test_parse_duplicate_section_fails() {
    let result = parse_str("[s]\n[s]\n");
    match result {
        Err(crate::Error::DuplicateSection { name }) => assert_eq!(name, "s"),
        other => panic!("Expected DuplicateSection, got: {:?}", other),
    }
}

#[rstest]
fn test_parse_option_before_section_fails() {
    let result = parse_str("key : value\n");
    match result {
        Err(crate::Error::Syntax { line, .. }) => assert_eq!(line, 1),
        other => panic!("Expected Syntax, got: {:?}", other),
    }
}

#[rstest]
fn test_parse_continuation_without_option_fails() {
    let result = parse_str("[s]\n    dangling\n");
    assert!(matches!(result, Err(crate::Error::Syntax { line: 2, .. })));
}

#[rstest]
#[case("[unclosed\n")]
#[case("[]\n")]
fn test_parse_malformed_header_fails(#[case] text: &str) {
    assert!(matches!(parse_str(text), Err(crate::Error::Syntax { .. })));
}

#[rstest]
fn test_load_records_source_path() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("supported-envs.ini");
    std::fs::write(&path, "[s]\nkey : value\n").expect("Failed to write fixture");

    let document = load(&path).expect("Should load");
    assert_eq!(document.source_path(), Some(path.as_path()));
    assert!(document.contains("s"));
}

#[rstest]
fn test_load_missing_file_fails() {
    let tmp = TempDir::new().unwrap();
    let result = load(tmp.path().join("absent.ini"));
    match result {
        Err(crate::Error::ReadFailed { path, .. }) => {
            assert!(path.ends_with("absent.ini"));
        }
        other => panic!("Expected ReadFailed, got: {:?}", other),
    }
}
