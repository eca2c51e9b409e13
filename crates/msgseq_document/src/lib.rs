//! Document scanning and records for msgseq.
//!
//! This crate provides:
//! - [`scan_lines`] - Physical line splitting with mixed terminators
//! - [`group_sections`] / [`Document`] - `[Name]` sections over those lines
//! - [`Endpoint`], [`Command`], [`Message`] - Named records over field trees

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod line;
pub mod record;
pub mod section;

pub use config::ScanConfig;
pub use line::{Line, scan_lines, scan_lines_with};
pub use record::{Command, Endpoint, Message};
pub use section::{Document, Section, group_sections};
