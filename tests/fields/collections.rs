//! Integration tests for ordered field collections

use msgseq_fields::{Field, FieldCollection, FieldValue, Value};

fn names(fields: &FieldCollection) -> Vec<&str> {
    fields.iter().map(Field::name).collect()
}

// =============================================================================
// Duplicates and Order
// =============================================================================

#[test]
fn duplicates_are_preserved_in_order() {
    let mut fields = FieldCollection::new();
    fields.add("Item", "first").unwrap();
    fields.add("item", "second").unwrap();
    fields.add("ITEM", "third").unwrap();

    let all: Vec<String> = fields
        .find_all("Item")
        .filter_map(|f| f.value().to_text())
        .collect();
    assert_eq!(all, ["first", "second", "third"]);
    assert_eq!(fields.find_first("item").and_then(|f| f.value().to_text()).as_deref(), Some("first"));
    assert_eq!(fields.find_last("item").and_then(|f| f.value().to_text()).as_deref(), Some("third"));
}

#[test]
fn collected_from_duplicate_fields() {
    let fields: FieldCollection = [
        Field::new("Slow", "a").unwrap(),
        Field::new("SLOW", "b").unwrap(),
    ]
    .into_iter()
    .collect();
    assert_eq!(fields.len(), 2);
    assert_eq!(fields.find_all("slow").count(), 2);
}

#[test]
fn index_mutations_keep_relative_order() {
    let mut fields: FieldCollection = ["A", "B", "C"]
        .into_iter()
        .map(|n| Field::new(n, n).unwrap())
        .collect();
    fields.insert(1, Field::new("X", "x").unwrap()).unwrap();
    assert_eq!(names(&fields), ["A", "X", "B", "C"]);
    fields.remove_at(0).unwrap();
    assert_eq!(names(&fields), ["X", "B", "C"]);
    assert_eq!(fields.find_first("c").map(Field::name), Some("C"));
    assert!(fields.insert(9, Field::new("Z", "z").unwrap()).is_err());
    assert!(fields.remove_at(3).is_err());
}

#[test]
fn remove_by_name_removes_every_match() {
    let mut fields = FieldCollection::new();
    for (name, v) in [("A", 1), ("B", 2), ("a", 3), ("C", 4), ("A", 5)] {
        fields.add(name, Value::from(v)).unwrap();
    }
    assert_eq!(fields.remove("a"), 3);
    assert_eq!(names(&fields), ["B", "C"]);
    assert_eq!(fields.remove("a"), 0);
}

#[test]
fn rename_allows_duplicates() {
    let mut fields = FieldCollection::new();
    fields.add("A", "1").unwrap();
    fields.add("B", "2").unwrap();
    fields.rename(1, "A").unwrap();
    assert_eq!(fields.find_all("a").count(), 2);
    assert!(fields.rename(0, "bad name").unwrap_err().is_invalid_name());
    assert!(fields.rename(5, "C").is_err());
    assert_eq!(names(&fields), ["A", "A"]);
}

#[test]
fn lookups_survive_mutable_handouts() {
    let mut fields = FieldCollection::new();
    fields.add("A", "1").unwrap();
    fields.add("B", "2").unwrap();
    fields.get_at_mut(0).unwrap().set_name("Z").unwrap();
    assert!(fields.contains("z"));
    assert!(!fields.contains("a"));
    fields.add("A", "3").unwrap();
    assert_eq!(names(&fields), ["Z", "B", "A"]);
    assert_eq!(fields.find_first("a").and_then(|f| f.value().to_text()).as_deref(), Some("3"));
}

#[test]
fn header_fields_are_ordinary() {
    let mut fields = FieldCollection::new();
    fields.push(Field::header("Seq", Value::from(1u32)).unwrap());
    fields.add("Seq", Value::from(2u32)).unwrap();
    assert_eq!(fields.get_text(".seq").as_deref(), Some("1"));
    assert_eq!(fields.get_text("seq").as_deref(), Some("2"));
    assert!(fields.find_first(".Seq").is_some_and(Field::is_header));
}

#[test]
fn equality_ignores_index_state() {
    let mut a = FieldCollection::new();
    a.add("A", "1").unwrap();
    let mut b = a.clone();
    let _ = b.get_at_mut(0);
    assert_eq!(a, b);
    assert_eq!(
        a.clone().into_values().collect::<Vec<_>>(),
        [FieldValue::from("1")]
    );
}
