//! Field trees and tag sets for msgseq.
//!
//! This crate provides:
//! - [`Field`] - A named scalar or nested tree, with tags
//! - [`FieldCollection`] - Ordered, duplicate-preserving fields with path addressing
//! - [`Tag`] / [`TagCollection`] - Named booleans with unique names
//!
//! Names compare case-insensitively throughout. Paths separate segments with
//! `/` or `\`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collection;
pub mod field;
pub mod paths;
#[cfg(feature = "serde")]
mod serde_impl;
pub mod tag;

pub use collection::{FieldCollection, FindAll};
pub use field::{Field, FieldValue};
pub use paths::Paths;
pub use tag::{Tag, TagCollection};

pub use msgseq_value::Value;
