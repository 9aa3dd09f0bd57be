//! Traced values, functions, composition, and provenance graphs for Lineage.
//!
//! This crate provides:
//! - [`Value`] - Self-describing results and the provenance query protocol
//! - [`Function`] - Atomic, describing, composed, and enumerating functions
//! - [`ComposedFunction`] - Call graphs with positional and named slots
//! - [`Tracer`] / [`NodeFactory`] - Session-scoped provenance graphs
//! - [`EvalLimits`] / [`TracerConfig`] - Depth guards for evaluation and queries

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod composed;
pub mod enumerate;
pub mod function;
pub mod graph;
pub mod limits;
pub mod value;

pub use composed::{ArgSpec, ComposedFunction};
pub use enumerate::{Element, Enumerate};
pub use function::{AtomicFunction, DescribingFunction, Function};
pub use graph::{DesignatedObject, NodeFactory, NodeId, ObjectNode, Tracer, TracerConfig};
pub use limits::EvalLimits;
pub use value::{ArgSource, Filter, SlotBinding, Value, ValueKind};
