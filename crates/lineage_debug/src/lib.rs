//! Explanations and provenance graph rendering for Lineage.
//!
//! This crate provides:
//! - [`Explanation`] / [`Explainer`] - Query a value and collect its sources
//! - [`HumanFormatter`] / [`JsonFormatter`] - Render the provenance graph
//! - [`ExplainConfig`] - Rendering and session configuration

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod explain;
pub mod format;

pub use config::ExplainConfig;
pub use explain::{Explainer, Explanation, SourceReport, explain};
pub use format::{ExplainFormatter, HumanFormatter, JsonFormatter};
