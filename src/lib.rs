//! msgseq - Typed values and field trees for message sequence descriptions
//!
//! This crate re-exports all layers of the msgseq system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: msgseq_document   - Line/section scanner, endpoint/command/message records
//! Layer 2: msgseq_fields     - Field trees with path addressing, tag sets
//! Layer 1: msgseq_value      - Typed values: parsing, rendering, coercion
//! Layer 0: msgseq_foundation - Error, binary codec, scaled formatting, names
//! ```

pub use msgseq_document as document;
pub use msgseq_fields as fields;
pub use msgseq_foundation as foundation;
pub use msgseq_value as value;

pub use msgseq_fields::{Field, FieldCollection, FieldValue, Tag, TagCollection};
pub use msgseq_foundation::{Error, ErrorKind, Result};
pub use msgseq_value::{Value, ValueKind};
