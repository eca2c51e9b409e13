//! Integration tests for Layer 2: Fields
//!
//! Tests for field collections, path addressing, traversal, and tag sets.

mod collections;
mod paths;
mod tags;
