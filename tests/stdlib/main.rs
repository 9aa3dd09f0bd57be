//! Integration tests for Layer 2: Standard Library
//!
//! Tests the reusable leaf functions as composed building blocks.

mod math;
mod selection;
