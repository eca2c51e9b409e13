//! Integration tests for tag sets

use msgseq_fields::{Field, FieldCollection, Tag, TagCollection};

#[test]
fn tag_uniqueness_versus_field_duplication() {
    let tags = TagCollection::from_tags([
        Tag::new("Retry", true).unwrap(),
        Tag::new("@RETRY", false).unwrap(),
    ]);
    assert!(tags.unwrap_err().is_invalid_name());

    let fields: FieldCollection = [
        Field::new("Retry", "1").unwrap(),
        Field::new("RETRY", "2").unwrap(),
    ]
    .into_iter()
    .collect();
    assert_eq!(fields.len(), 2);
}

#[test]
fn tag_grammar() {
    assert!(Tag::new("@Slow", true).is_ok());
    assert!(Tag::new("Slow", true).is_ok());
    assert!(Tag::new("@1", true).unwrap_err().is_invalid_name());
    assert!(Tag::new("a b", true).is_err());
    let mut tag = Tag::new("Slow", true).unwrap();
    assert!(tag.set_name("").is_err());
    assert_eq!(tag.name(), "Slow");
}

#[test]
fn set_get_remove() {
    let mut tags = TagCollection::new();
    tags.set("@Optional", true).unwrap();
    tags.set("Flaky", false).unwrap();
    assert!(tags.is_set("optional"));
    assert!(tags.contains("flaky"));
    assert!(!tags.is_set("flaky"));
    assert!(tags.add(Tag::new("OPTIONAL", false).unwrap()).is_err());
    assert!(tags.remove("optional").is_some_and(|t| t.state()));
    assert_eq!(tags.len(), 1);
}

#[test]
fn rename_checks_collisions() {
    let mut tags = TagCollection::new();
    tags.set("A", true).unwrap();
    tags.set("B", true).unwrap();
    assert!(tags.rename("A", "b").unwrap_err().is_invalid_name());
    tags.rename("A", "a").unwrap();
    let names: Vec<&str> = tags.iter().map(Tag::name).collect();
    assert_eq!(names, ["a", "B"]);
}

#[test]
fn fields_carry_tags() {
    let tags = TagCollection::from_tags([Tag::new("Key", true).unwrap()]).unwrap();
    let field = Field::new("Id", "7").unwrap().with_tags(tags);
    let mut fields = FieldCollection::new();
    fields.push(field);
    assert!(fields.get_at(0).is_some_and(|f| f.tags().is_set("@key")));
}
