//! Typed scalar values for msgseq.
//!
//! This crate provides:
//! - [`Value`] - The closed union of scalar variants
//! - [`ValueKind`] - Variant tags with canonical names
//! - [`ByteSize`] - Byte counts with SI and binary magnitude grammars
//! - [`ValueConfig`] - Temporal defaults for parsing
//!
//! Every variant has a non-throwing parse ([`Value::try_parse`]), a throwing
//! parse ([`Value::parse`]), a canonical text form ([`Value::to_text`]), and
//! a set of non-throwing coercion queries (`as_*`, [`Value::coerce`]).

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod coerce;
pub mod config;
pub mod kind;
pub mod parse;
#[cfg(feature = "serde")]
mod serde_impl;
pub mod size;
pub mod temporal;
pub mod value;

pub use config::{LocalOffset, ReferenceDate, ValueConfig};
pub use kind::ValueKind;
pub use size::ByteSize;
pub use value::Value;
