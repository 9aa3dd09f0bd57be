//! Lineage - composable functions that explain their results
//!
//! This crate re-exports all layers of the Lineage system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: lineage_debug       Explanations, graph rendering
//! Layer 2: lineage_stdlib      Math, comparison, attribute, selection leaves
//! Layer 1: lineage_engine      Values, functions, composition, tracer
//! Layer 0: lineage_foundation  Core types (Datum, Designator, Error)
//! ```

pub use lineage_debug as debug;
pub use lineage_engine as engine;
pub use lineage_foundation as foundation;
pub use lineage_stdlib as stdlib;
