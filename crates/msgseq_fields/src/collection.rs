//! Ordered field trees with case-insensitive, non-unique names.
//!
//! A [`FieldCollection`] is a sequence, not a set: duplicate names are kept
//! in insertion order. The sequence is the source of truth; a folded-name
//! index over it speeds up lookups and is rebuilt after every structural
//! mutation.

use std::collections::HashMap;
use std::fmt;

use msgseq_foundation::name;
use msgseq_foundation::{Error, Result};
use msgseq_value::Value;

use crate::field::{Field, FieldValue};
use crate::paths::Paths;

type NameIndex = HashMap<String, Vec<usize>>;

const NO_POSITIONS: &[usize] = &[];

/// An ordered sequence of fields addressable by index, name, or path.
#[derive(Clone)]
pub struct FieldCollection {
    entries: im::Vector<Field>,
    /// `None` after a `&mut Field` was handed out; lookups then scan.
    index: Option<NameIndex>,
}

impl Default for FieldCollection {
    fn default() -> Self {
        Self {
            entries: im::Vector::new(),
            index: Some(NameIndex::new()),
        }
    }
}

impl FieldCollection {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of top-level fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates the top-level fields in order.
    pub fn iter(&self) -> im::vector::Iter<'_, Field> {
        self.entries.iter()
    }

    // -------------------------------------------------------------------------
    // Index maintenance
    // -------------------------------------------------------------------------

    fn reindex(&mut self) {
        let mut index = NameIndex::new();
        for (position, field) in self.entries.iter().enumerate() {
            index
                .entry(name::fold_name(field.name()))
                .or_default()
                .push(position);
        }
        self.index = Some(index);
    }

    fn ensure_index(&mut self) {
        if self.index.is_none() {
            self.reindex();
        }
    }

    fn positions(&self, name: &str) -> Positions<'_> {
        match &self.index {
            Some(index) => Positions::Indexed(
                index
                    .get(&name::fold_name(name))
                    .map_or(NO_POSITIONS, Vec::as_slice)
                    .iter(),
            ),
            None => Positions::Scan {
                entries: &self.entries,
                name: name::fold_name(name),
                next: 0,
            },
        }
    }

    fn first_position(&self, name: &str) -> Option<usize> {
        self.positions(name).next()
    }

    fn last_position(&self, name: &str) -> Option<usize> {
        self.positions(name).last()
    }

    // -------------------------------------------------------------------------
    // Index-based access and mutation
    // -------------------------------------------------------------------------

    /// Returns the field at `index`.
    #[must_use]
    pub fn get_at(&self, index: usize) -> Option<&Field> {
        self.entries.get(index)
    }

    /// Mutable access to the field at `index`.
    pub fn get_at_mut(&mut self, index: usize) -> Option<&mut Field> {
        self.ensure_index();
        let field = self.entries.get_mut(index)?;
        self.index = None;
        Some(field)
    }

    /// Appends a field.
    pub fn push(&mut self, field: Field) {
        self.ensure_index();
        if let Some(index) = &mut self.index {
            index
                .entry(name::fold_name(field.name()))
                .or_default()
                .push(self.entries.len());
        }
        self.entries.push_back(field);
    }

    /// Creates and appends a field.
    ///
    /// # Errors
    ///
    /// Returns an invalid-name error if `name` fails the field grammar.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Result<()> {
        self.push(Field::new(name, value)?);
        Ok(())
    }

    /// Inserts a field before `index`; `index == len()` appends.
    ///
    /// # Errors
    ///
    /// Returns an index error if `index > len()`.
    pub fn insert(&mut self, index: usize, field: Field) -> Result<()> {
        if index > self.len() {
            return Err(Error::index_out_of_bounds(index, self.len()));
        }
        self.entries.insert(index, field);
        self.reindex();
        Ok(())
    }

    /// Removes and returns the field at `index`.
    ///
    /// # Errors
    ///
    /// Returns an index error if `index >= len()`.
    pub fn remove_at(&mut self, index: usize) -> Result<Field> {
        if index >= self.len() {
            return Err(Error::index_out_of_bounds(index, self.len()));
        }
        let field = self.entries.remove(index);
        self.reindex();
        Ok(field)
    }

    /// Removes every top-level field matching `name`, returning the count.
    pub fn remove(&mut self, name: &str) -> usize {
        let before = self.len();
        self.entries.retain(|field| !name::names_match(field.name(), name));
        let removed = before - self.len();
        if removed > 0 {
            self.reindex();
        }
        tracing::trace!(name, removed, "removed fields by name");
        removed
    }

    /// Renames the field at `index`. Duplicates are allowed.
    ///
    /// # Errors
    ///
    /// Returns an index error if `index >= len()`, or an invalid-name error
    /// if `name` fails the field grammar.
    pub fn rename(&mut self, index: usize, name: impl Into<String>) -> Result<()> {
        let length = self.len();
        let field = self
            .entries
            .get_mut(index)
            .ok_or_else(|| Error::index_out_of_bounds(index, length))?;
        field.set_name(name)?;
        self.reindex();
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Name lookup (top level only)
    // -------------------------------------------------------------------------

    /// Returns the first top-level field named `name`.
    #[must_use]
    pub fn find_first(&self, name: &str) -> Option<&Field> {
        self.first_position(name).and_then(|p| self.entries.get(p))
    }

    /// Returns the last top-level field named `name`.
    #[must_use]
    pub fn find_last(&self, name: &str) -> Option<&Field> {
        self.last_position(name).and_then(|p| self.entries.get(p))
    }

    /// Lazily yields every top-level field named `name`, in order.
    pub fn find_all(&self, name: &str) -> FindAll<'_> {
        FindAll {
            entries: &self.entries,
            positions: self.positions(name),
        }
    }

    /// Mutable access to the first top-level field named `name`.
    pub fn find_first_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.ensure_index();
        let position = self.first_position(name)?;
        self.get_at_mut(position)
    }

    /// Returns true if any top-level field is named `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.first_position(name).is_some()
    }

    // -------------------------------------------------------------------------
    // Path addressing
    // -------------------------------------------------------------------------

    /// Resolves a `/`- or `\`-separated path, taking the first match at each
    /// segment. Every segment but the last must hold a nested tree.
    #[must_use]
    pub fn field_at(&self, path: &str) -> Option<&Field> {
        let segments = name::split_path(path);
        let (leaf, parents) = segments.split_last()?;
        let mut current = self;
        for segment in parents {
            current = current.find_first(segment)?.value().as_fields()?;
        }
        current.find_first(leaf)
    }

    /// Returns the payload at `path`.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&FieldValue> {
        self.field_at(path).map(Field::value)
    }

    /// Returns the scalar at `path`.
    #[must_use]
    pub fn get_value(&self, path: &str) -> Option<&Value> {
        self.get(path).and_then(FieldValue::as_value)
    }

    /// Returns the nested tree at `path`.
    #[must_use]
    pub fn get_fields(&self, path: &str) -> Option<&FieldCollection> {
        self.get(path).and_then(FieldValue::as_fields)
    }

    /// Returns the canonical text of the scalar at `path`.
    #[must_use]
    pub fn get_text(&self, path: &str) -> Option<String> {
        self.get_value(path).map(Value::to_text)
    }

    /// Writes `value` at `path`.
    ///
    /// Missing intermediate segments are created as empty trees. If a field
    /// already exists at the full path, its payload is replaced rather than
    /// a duplicate appended. The collection is unchanged on error.
    ///
    /// # Errors
    ///
    /// Returns an invalid-name error if any segment fails the field grammar,
    /// or an invalid-argument error if an existing intermediate segment holds
    /// a scalar.
    pub fn set(&mut self, path: &str, value: impl Into<FieldValue>) -> Result<()> {
        let segments = name::split_path(path);
        for segment in &segments {
            name::validate_field_name(segment)?;
        }
        let Some((leaf, parents)) = segments.split_last() else {
            return Err(Error::invalid_argument("empty field path"));
        };

        // Nothing is created until every existing segment has been checked,
        // and once a segment is created everything below it is new.
        let mut current = self;
        for segment in parents {
            let position = match current.first_position(segment) {
                Some(position) => position,
                None => {
                    tracing::trace!(path, segment, "creating intermediate field collection");
                    current.push(Field::new(*segment, FieldCollection::new())?);
                    current.len() - 1
                }
            };
            current = match current.entries.get_mut(position).map(Field::value_mut) {
                Some(FieldValue::Fields(next)) => next,
                _ => {
                    return Err(Error::invalid_argument(format!(
                        "path segment {segment:?} of {path:?} holds a value"
                    )));
                }
            };
        }

        match current.first_position(leaf) {
            Some(position) => {
                if let Some(field) = current.entries.get_mut(position) {
                    field.set_value(value);
                }
            }
            None => current.push(Field::new(*leaf, value)?),
        }
        Ok(())
    }

    /// Removes the field at `path`, returning it.
    pub fn remove_path(&mut self, path: &str) -> Option<Field> {
        let segments = name::split_path(path);
        let (leaf, parents) = segments.split_last()?;
        let mut current = self;
        for segment in parents {
            let position = current.first_position(segment)?;
            current = current
                .entries
                .get_mut(position)
                .and_then(|field| field.value_mut().as_fields_mut())?;
        }
        let position = current.first_position(leaf)?;
        current.remove_at(position).ok()
    }

    // -------------------------------------------------------------------------
    // Traversal
    // -------------------------------------------------------------------------

    /// Pre-order walk over every field, with its `/`-joined path.
    ///
    /// Each physical field is yielded once, including fields that hold a
    /// nested tree.
    pub fn all_paths(&self) -> Paths<'_> {
        Paths::new(self, false)
    }

    /// Like [`FieldCollection::all_paths`], restricted to scalar leaves.
    pub fn paths_with_value(&self) -> Paths<'_> {
        Paths::new(self, true)
    }

    /// Consumes the collection, returning the top-level payloads in order.
    pub fn into_values(self) -> impl Iterator<Item = FieldValue> {
        self.entries.into_iter().map(Field::into_value)
    }
}

enum Positions<'a> {
    Indexed(std::slice::Iter<'a, usize>),
    Scan {
        entries: &'a im::Vector<Field>,
        name: String,
        next: usize,
    },
}

impl Iterator for Positions<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        match self {
            Self::Indexed(positions) => positions.next().copied(),
            Self::Scan {
                entries,
                name,
                next,
            } => {
                while let Some(field) = entries.get(*next) {
                    *next += 1;
                    if name::names_match(field.name(), name) {
                        return Some(*next - 1);
                    }
                }
                None
            }
        }
    }
}

/// Lazy iterator over the top-level fields sharing a name.
pub struct FindAll<'a> {
    entries: &'a im::Vector<Field>,
    positions: Positions<'a>,
}

impl<'a> Iterator for FindAll<'a> {
    type Item = &'a Field;

    fn next(&mut self) -> Option<&'a Field> {
        let position = self.positions.next()?;
        self.entries.get(position)
    }
}

impl PartialEq for FieldCollection {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for FieldCollection {}

impl fmt::Debug for FieldCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl FromIterator<Field> for FieldCollection {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        let mut collection = Self::new();
        for field in iter {
            collection.push(field);
        }
        collection
    }
}

impl Extend<Field> for FieldCollection {
    fn extend<I: IntoIterator<Item = Field>>(&mut self, iter: I) {
        for field in iter {
            self.push(field);
        }
    }
}

impl<'a> IntoIterator for &'a FieldCollection {
    type Item = &'a Field;
    type IntoIter = im::vector::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for FieldCollection {
    type Item = Field;
    type IntoIter = im::vector::ConsumingIter<Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
