//! Endpoint, command, and message records.
//!
//! Each record is a validated name plus a field tree and tag set. Endpoints
//! are shared between messages through [`Arc`].

use std::fmt;
use std::sync::Arc;

use msgseq_fields::{FieldCollection, TagCollection};
use msgseq_foundation::name;
use msgseq_foundation::{Error, Result};

/// A named participant that sends or receives messages.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Endpoint {
    name: String,
}

impl Endpoint {
    /// Creates an endpoint.
    ///
    /// # Errors
    ///
    /// Returns an invalid-name error if `name` fails the identifier grammar.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        name::validate_identifier(&name)?;
        Ok(Self { name })
    }

    /// Creates a shared endpoint.
    ///
    /// # Errors
    ///
    /// Returns an invalid-name error if `name` fails the identifier grammar.
    pub fn shared(name: impl Into<String>) -> Result<Arc<Self>> {
        Self::new(name).map(Arc::new)
    }

    /// Returns the endpoint name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A named action with parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Command {
    name: String,
    fields: FieldCollection,
    tags: TagCollection,
}

impl Command {
    /// Creates a command with no fields or tags.
    ///
    /// # Errors
    ///
    /// Returns an invalid-name error if `name` fails the identifier grammar.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        name::validate_identifier(&name)?;
        Ok(Self {
            name,
            fields: FieldCollection::new(),
            tags: TagCollection::new(),
        })
    }

    /// Builder method to attach fields.
    #[must_use]
    pub fn with_fields(mut self, fields: FieldCollection) -> Self {
        self.fields = fields;
        self
    }

    /// Builder method to attach tags.
    #[must_use]
    pub fn with_tags(mut self, tags: TagCollection) -> Self {
        self.tags = tags;
        self
    }

    /// Returns the command name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the parameters.
    #[must_use]
    pub const fn fields(&self) -> &FieldCollection {
        &self.fields
    }

    /// Mutable access to the parameters.
    pub fn fields_mut(&mut self) -> &mut FieldCollection {
        &mut self.fields
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
}

/// A named message travelling from one endpoint to another.
///
/// Source and destination are always distinct endpoints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    name: String,
    source: Arc<Endpoint>,
    destination: Arc<Endpoint>,
    fields: FieldCollection,
    tags: TagCollection,
}

fn check_route(source: &Arc<Endpoint>, destination: &Arc<Endpoint>) -> Result<()> {
    if Arc::ptr_eq(source, destination) || name::names_match(&source.name, &destination.name) {
        return Err(Error::invalid_name(
            destination.name.clone(),
            "source and destination must differ",
        ));
    }
    Ok(())
}

impl Message {
    /// Creates a message with no fields or tags.
    ///
    /// # Errors
    ///
    /// Returns an invalid-name error if `name` fails the identifier grammar
    /// or if source and destination are the same endpoint.
    pub fn new(
        name: impl Into<String>,
        source: Arc<Endpoint>,
        destination: Arc<Endpoint>,
    ) -> Result<Self> {
        let name = name.into();
        name::validate_identifier(&name)?;
        check_route(&source, &destination)?;
        Ok(Self {
            name,
            source,
            destination,
            fields: FieldCollection::new(),
            tags: TagCollection::new(),
        })
    }

    /// Builder method to attach fields.
    #[must_use]
    pub fn with_fields(mut self, fields: FieldCollection) -> Self {
        self.fields = fields;
        self
    }

    /// Builder method to attach tags.
    #[must_use]
    pub fn with_tags(mut self, tags: TagCollection) -> Self {
        self.tags = tags;
        self
    }

    /// Returns the message name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the sending endpoint.
    #[must_use]
    pub const fn source(&self) -> &Arc<Endpoint> {
        &self.source
    }

    /// Returns the receiving endpoint.
    #[must_use]
    pub const fn destination(&self) -> &Arc<Endpoint> {
        &self.destination
    }

    /// Replaces the sending endpoint.
    ///
    /// # Errors
    ///
    /// Returns an invalid-name error if it matches the destination. The
    /// message is unchanged on failure.
    pub fn set_source(&mut self, source: Arc<Endpoint>) -> Result<()> {
        check_route(&source, &self.destination)?;
        self.source = source;
        Ok(())
    }

    /// Replaces the receiving endpoint.
    ///
    /// # Errors
    ///
    /// Returns an invalid-name error if it matches the source. The message
    /// is unchanged on failure.
    pub fn set_destination(&mut self, destination: Arc<Endpoint>) -> Result<()> {
        check_route(&self.source, &destination)?;
        self.destination = destination;
        Ok(())
    }

    /// Returns the payload fields.
    #[must_use]
    pub const fn fields(&self) -> &FieldCollection {
        &self.fields
    }

    /// Mutable access to the payload fields.
    pub fn fields_mut(&mut self) -> &mut FieldCollection {
        &mut self.fields
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
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} -> {}", self.name, self.source, self.destination)
    }
}
