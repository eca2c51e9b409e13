//! Integration tests for Layer 3: Document
//!
//! Tests for line scanning, section grouping, and records.

mod scanning;
