//! Named fields and their payloads.

use std::fmt;

use msgseq_foundation::Result;
use msgseq_foundation::name::{self, HEADER_PREFIX};
use msgseq_value::Value;

use crate::collection::FieldCollection;
use crate::tag::TagCollection;

/// What a field holds: a scalar or a nested tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
    /// A scalar leaf.
    Value(Value),
    /// A nested field tree.
    Fields(FieldCollection),
}

impl FieldValue {
    /// Returns the scalar, if this is a leaf.
    #[must_use]
    pub const fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(v) => Some(v),
            Self::Fields(_) => None,
        }
    }

    /// Returns the nested tree, if this is not a leaf.
    #[must_use]
    pub const fn as_fields(&self) -> Option<&FieldCollection> {
        match self {
            Self::Fields(fields) => Some(fields),
            Self::Value(_) => None,
        }
    }

    /// Mutable access to the nested tree.
    pub fn as_fields_mut(&mut self) -> Option<&mut FieldCollection> {
        match self {
            Self::Fields(fields) => Some(fields),
            Self::Value(_) => None,
        }
    }

    /// Returns true for a scalar leaf.
    #[must_use]
    pub const fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Renders a scalar leaf as canonical text; trees have no text form.
    #[must_use]
    pub fn to_text(&self) -> Option<String> {
        self.as_value().map(Value::to_text)
    }
}

impl From<Value> for FieldValue {
    fn from(v: Value) -> Self {
        Self::Value(v)
    }
}

impl From<FieldCollection> for FieldValue {
    fn from(fields: FieldCollection) -> Self {
        Self::Fields(fields)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Value(Value::from(s))
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Value(Value::from(s))
    }
}

/// A named entry in a field tree.
///
/// Names start with a letter, contain no whitespace or path separator, and
/// may carry a leading `.` to mark a header field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    name: String,
    value: FieldValue,
    tags: TagCollection,
}

impl Field {
    /// Creates a field, validating its name.
    ///
    /// # Errors
    ///
    /// Returns an invalid-name error if `name` fails the field grammar.
    pub fn new(name: impl Into<String>, value: impl Into<FieldValue>) -> Result<Self> {
        let name = name.into();
        name::validate_field_name(&name)?;
        Ok(Self {
            name,
            value: value.into(),
            tags: TagCollection::new(),
        })
    }

    /// Creates a header field, adding the `.` prefix if `name` lacks it.
    ///
    /// # Errors
    ///
    /// Returns an invalid-name error if the prefixed name fails the grammar.
    pub fn header(name: impl Into<String>, value: impl Into<FieldValue>) -> Result<Self> {
        let name = name.into();
        if name::is_header_name(&name) {
            Self::new(name, value)
        } else {
            Self::new(format!("{HEADER_PREFIX}{name}"), value)
        }
    }

    /// Builder method to attach tags.
    #[must_use]
    pub fn with_tags(mut self, tags: TagCollection) -> Self {
        self.tags = tags;
        self
    }

    /// Returns the field name, including any header prefix.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the field. Its position in any collection is unchanged.
    ///
    /// # Errors
    ///
    /// Returns an invalid-name error if `name` fails the field grammar.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        name::validate_field_name(&name)?;
        self.name = name;
        Ok(())
    }

    /// Returns true if the name marks a header field.
    #[must_use]
    pub fn is_header(&self) -> bool {
        name::is_header_name(&self.name)
    }

    /// Returns the payload.
    #[must_use]
    pub const fn value(&self) -> &FieldValue {
        &self.value
    }

    /// Mutable access to the payload.
    pub fn value_mut(&mut self) -> &mut FieldValue {
        &mut self.value
    }

    /// Replaces the payload, returning the old one.
    pub fn set_value(&mut self, value: impl Into<FieldValue>) -> FieldValue {
        std::mem::replace(&mut self.value, value.into())
    }

    /// Returns the tags.
    #[must_use]
    pub const fn tags(&self) -> &TagCollection {
        &self.tags
    }

    /// Mutable access to the tags.
    pub fn tags_mut(&mut self) -> &mut TagCollection {
        &mut self.tags
    }

    pub(crate) fn into_value(self) -> FieldValue {
        self.value
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            FieldValue::Value(v) => write!(f, "{} = {v}", self.name),
            FieldValue::Fields(fields) => write!(f, "{} {{{} fields}}", self.name, fields.len()),
        }
    }
}
