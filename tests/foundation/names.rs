//! Integration tests for naming rules

use msgseq_foundation::name::{
    fold_name, is_header_name, names_match, split_path, validate_field_name,
    validate_identifier, validate_tag_name,
};

#[test]
fn identifiers_start_with_a_letter() {
    assert!(validate_identifier("Login").is_ok());
    assert!(validate_identifier("x").is_ok());
    assert!(validate_identifier("_x").is_err());
    assert!(validate_identifier("7x").is_err());
    assert!(validate_identifier("a b").unwrap_err().is_invalid_name());
}

#[test]
fn field_names_allow_header_prefix() {
    assert!(validate_field_name(".HB").is_ok());
    assert!(is_header_name(".HB"));
    assert!(validate_field_name("HB/HC").is_err());
}

#[test]
fn tag_names_allow_at_prefix() {
    assert!(validate_tag_name("@Retry").is_ok());
    assert!(validate_tag_name("Retry").is_ok());
    assert!(validate_tag_name("@ Retry").is_err());
}

#[test]
fn case_insensitive_matching() {
    assert!(names_match(".Seq", ".SEQ"));
    assert_eq!(fold_name("MiXeD"), "mixed");
}

#[test]
fn both_separators_split() {
    assert_eq!(split_path(".HB\\HC/HD"), [".HB", "HC", "HD"]);
}
