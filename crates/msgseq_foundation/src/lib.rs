//! Foundation layer for msgseq.
//!
//! This crate provides:
//! - [`Error`] - The error taxonomy shared by every layer
//! - [`codec`] - Sign-aware byte/integer reinterpretation
//! - [`scale`] - SI and binary magnitude formatting
//! - [`name`] - Naming rules for fields, tags, and records

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod codec;
pub mod error;
pub mod name;
pub mod scale;

pub use codec::Width;
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use scale::{DecimalPattern, Ladder, Magnitude};
