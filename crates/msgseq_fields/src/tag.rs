//! Tags and name-unique tag sets.
//!
//! A tag is a named boolean. Unlike fields, tag names are unique within a
//! [`TagCollection`], compared case-insensitively.

use std::fmt;

use msgseq_foundation::name::{self, TAG_PREFIX};
use msgseq_foundation::{Error, Result};

/// A named boolean flag.
///
/// The optional `@` prefix is accepted on construction and not stored.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Tag {
    name: String,
    state: bool,
}

impl Tag {
    /// Creates a tag, validating its name.
    ///
    /// # Errors
    ///
    /// Returns an invalid-name error if `name` fails the tag grammar.
    pub fn new(name: impl Into<String>, state: bool) -> Result<Self> {
        Ok(Self {
            name: normalize(name.into())?,
            state,
        })
    }

    /// Returns the tag name, without any `@` prefix.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the tag state.
    #[must_use]
    pub const fn state(&self) -> bool {
        self.state
    }

    /// Sets the tag state.
    pub fn set_state(&mut self, state: bool) {
        self.state = state;
    }

    /// Renames the tag.
    ///
    /// # Errors
    ///
    /// Returns an invalid-name error if `name` fails the tag grammar.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        self.name = normalize(name.into())?;
        Ok(())
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{TAG_PREFIX}{}={}", self.name, self.state)
    }
}

fn normalize(name: String) -> Result<String> {
    name::validate_tag_name(&name)?;
    Ok(match name.strip_prefix(TAG_PREFIX) {
        Some(body) => body.to_string(),
        None => name,
    })
}

fn bare(name: &str) -> &str {
    name.strip_prefix(TAG_PREFIX).unwrap_or(name)
}

/// An ordered set of tags with case-insensitively unique names.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagCollection {
    tags: Vec<Tag>,
}

impl TagCollection {
    /// Creates an empty tag set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a tag set, failing on the first duplicate name.
    ///
    /// # Errors
    ///
    /// Returns an invalid-name error if two tags share a name.
    pub fn from_tags(tags: impl IntoIterator<Item = Tag>) -> Result<Self> {
        let mut collection = Self::new();
        for tag in tags {
            collection.add(tag)?;
        }
        Ok(collection)
    }

    /// Returns the number of tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Returns true if there are no tags.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Iterates in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.tags.iter()
    }

    fn position(&self, name: &str) -> Option<usize> {
        let name = bare(name);
        self.tags.iter().position(|t| name::names_match(&t.name, name))
    }

    /// Appends a tag.
    ///
    /// # Errors
    ///
    /// Returns an invalid-name error if a tag with the same name exists.
    pub fn add(&mut self, tag: Tag) -> Result<()> {
        if self.position(&tag.name).is_some() {
            return Err(Error::invalid_name(tag.name, "duplicate tag name"));
        }
        self.tags.push(tag);
        Ok(())
    }

    /// Sets the state of a tag, appending it if absent.
    ///
    /// # Errors
    ///
    /// Returns an invalid-name error if `name` fails the tag grammar.
    pub fn set(&mut self, name: &str, state: bool) -> Result<()> {
        match self.position(name) {
            Some(index) => self.tags[index].state = state,
            None => self.tags.push(Tag::new(name, state)?),
        }
        Ok(())
    }

    /// Looks up a tag by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Tag> {
        self.position(name).map(|index| &self.tags[index])
    }

    /// Returns true if a tag with this name exists, whatever its state.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Returns true if the tag exists and is set.
    #[must_use]
    pub fn is_set(&self, name: &str) -> bool {
        self.get(name).is_some_and(Tag::state)
    }

    /// Removes a tag by name.
    pub fn remove(&mut self, name: &str) -> Option<Tag> {
        self.position(name).map(|index| self.tags.remove(index))
    }

    /// Renames a tag in place.
    ///
    /// Renaming to a case variant of the same name is allowed.
    ///
    /// # Errors
    ///
    /// Returns an invalid-name error if `from` is absent, if `to` fails the
    /// grammar, or if `to` names a different existing tag.
    pub fn rename(&mut self, from: &str, to: &str) -> Result<()> {
        let index = self
            .position(from)
            .ok_or_else(|| Error::invalid_name(from, "no such tag"))?;
        let to = normalize(to.to_string())?;
        if self.position(&to).is_some_and(|other| other != index) {
            return Err(Error::invalid_name(to, "duplicate tag name"));
        }
        self.tags[index].name = to;
        Ok(())
    }
}

impl<'a> IntoIterator for &'a TagCollection {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
