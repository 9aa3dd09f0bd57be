//! Raw data, designators, and error types for Lineage.
//!
//! This crate provides:
//! - [`Datum`] - Raw data carried through computations
//! - [`Designator`] / [`AtomicDesignator`] - The path algebra naming roles
//! - [`Type`] - Type descriptors for runtime checks
//! - [`Error`] - Rich error types with context
//! - Persistent collections ([`LinVec`], [`LinMap`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod datum;
pub mod designator;
pub mod error;
pub mod types;

pub use collections::{LinMap, LinVec};
pub use datum::Datum;
pub use designator::{AtomicDesignator, Designator};
pub use error::{Error, ErrorContext, ErrorKind, Result, SemanticLimit};
pub use types::Type;
