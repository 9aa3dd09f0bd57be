//! Integration tests for Layer 1: Engine
//!
//! Tests for evaluation, composition, provenance queries, and limits.

mod composition;
mod limits;
mod queries;
