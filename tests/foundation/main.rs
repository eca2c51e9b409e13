//! Integration tests for Layer 0: Foundation
//!
//! Tests for the error taxonomy, binary codec, scaled formatting, and naming rules.

mod codec;
mod names;
mod scale;
