//! Integration tests for path addressing and traversal

use msgseq_fields::{FieldCollection, FieldValue, Value};

// =============================================================================
// Path Writes
// =============================================================================

#[test]
fn write_twice_overwrites_leaf() {
    let mut fields = FieldCollection::new();
    fields.set(".HB/HC", "2h").unwrap();
    fields.set(".HB/HC", "3h").unwrap();

    let hb = fields.get_fields(".HB").unwrap();
    assert_eq!(hb.len(), 1);
    assert_eq!(fields.get_text(".HB/HC").as_deref(), Some("3h"));
}

#[test]
fn direct_add_still_duplicates() {
    let mut fields = FieldCollection::new();
    fields.add("Name", "one").unwrap();
    fields.add("Name", "two").unwrap();
    fields.set("Name", "three").unwrap();
    let all: Vec<String> = fields.find_all("name").filter_map(|f| f.value().to_text()).collect();
    assert_eq!(all, ["three", "two"]);
}

#[test]
fn backslash_is_a_separator() {
    let mut fields = FieldCollection::new();
    fields.set("A\\B\\C", Value::from(1i8)).unwrap();
    assert_eq!(fields.get_value("a/b/c"), Some(&Value::from(1i8)));
    assert_eq!(fields.get_text("A\\b/C").as_deref(), Some("1"));
}

#[test]
fn write_through_scalar_fails_atomically() {
    let mut fields = FieldCollection::new();
    fields.set("A", "leaf").unwrap();
    let before = fields.clone();
    let err = fields.set("A/B/C", "x").unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(fields, before);

    let err = fields.set("New/bad name", "x").unwrap_err();
    assert!(err.is_invalid_name());
    assert_eq!(fields, before);
}

#[test]
fn write_follows_first_duplicate() {
    let mut fields = FieldCollection::new();
    fields.add("Group", FieldCollection::new()).unwrap();
    fields.add("Group", FieldCollection::new()).unwrap();
    fields.set("Group/Leaf", "v").unwrap();
    let groups: Vec<usize> = fields
        .find_all("group")
        .filter_map(|f| f.value().as_fields().map(FieldCollection::len))
        .collect();
    assert_eq!(groups, [1, 0]);
}

// =============================================================================
// Path Reads
// =============================================================================

#[test]
fn reads_never_fail() {
    let mut fields = FieldCollection::new();
    fields.set("A/B", "x").unwrap();
    assert!(fields.get("A/B/C").is_none());
    assert!(fields.get("Missing").is_none());
    assert!(fields.get("").is_none());
    assert!(fields.get_text("A").is_none());
    assert!(matches!(fields.get("A"), Some(FieldValue::Fields(_))));
}

#[test]
fn remove_path_takes_first_match() {
    let mut fields = FieldCollection::new();
    fields.set("A/B", "1").unwrap();
    fields.set("A/C", "2").unwrap();
    let removed = fields.remove_path("a/b").unwrap();
    assert_eq!(removed.name(), "B");
    assert_eq!(fields.get_fields("A").map(FieldCollection::len), Some(1));
    assert!(fields.remove_path("A/B").is_none());
}

// =============================================================================
// Traversal
// =============================================================================

fn sample() -> FieldCollection {
    let mut fields = FieldCollection::new();
    fields.set(".Hdr/Seq", "1").unwrap();
    fields.add("Dup", "a").unwrap();
    let mut nested = FieldCollection::new();
    nested.add("X", "1").unwrap();
    nested.add("X", "2").unwrap();
    fields.add("Dup", nested).unwrap();
    fields
}

#[test]
fn all_paths_is_pre_order_per_occurrence() {
    let fields = sample();
    let paths: Vec<String> = fields.all_paths().map(|(path, _)| path).collect();
    assert_eq!(paths, [".Hdr", ".Hdr/Seq", "Dup", "Dup", "Dup/X", "Dup/X"]);
}

#[test]
fn paths_with_value_skips_trees() {
    let fields = sample();
    let leaves: Vec<(String, String)> = fields
        .paths_with_value()
        .map(|(path, field)| (path, field.value().to_text().unwrap_or_default()))
        .collect();
    assert_eq!(
        leaves,
        [
            (".Hdr/Seq".to_string(), "1".to_string()),
            ("Dup".to_string(), "a".to_string()),
            ("Dup/X".to_string(), "1".to_string()),
            ("Dup/X".to_string(), "2".to_string()),
        ]
    );
}

#[test]
fn empty_tree_has_no_paths() {
    assert_eq!(FieldCollection::new().all_paths().count(), 0);
}
