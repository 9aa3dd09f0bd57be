//! Explanations: "where did this value come from?"
//!
//! An [`Explanation`] runs one provenance query over a value and keeps the
//! resulting graph together with the sources it reached, in evaluation order.
//!
//! # Example
//!
//! ```text
//! explain(&greater_than(width(el), 100))
//! ;; value:   false
//! ;; sources: # of .width of @0 of !   = {id h2, width 80px}
//! ;;          # of @1 of !             = 100
//! ```

use lineage_engine::{Filter, NodeId, Tracer, Value};
use lineage_foundation::{Datum, Designator};
use tracing::debug;

use crate::config::ExplainConfig;
use crate::format::{ExplainFormatter, HumanFormatter, JsonFormatter};

// =============================================================================
// Source Report
// =============================================================================

/// One original source reached by a query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceReport {
    /// The node standing for the source.
    pub node: NodeId,

    /// How the explained value reached the source.
    pub designator: Designator,

    /// The source's raw content.
    pub datum: Datum,
}

impl SourceReport {
    /// Returns the access path without the leading constant marker.
    #[must_use]
    pub fn path(&self) -> Designator {
        self.designator.tail().unwrap_or_else(|| self.designator.clone())
    }
}

// =============================================================================
// Explanation
// =============================================================================

/// The provenance graph of one value.
#[derive(Debug)]
pub struct Explanation {
    value: Value,
    tracer: Tracer,
    sources: Vec<SourceReport>,
}

impl Explanation {
    /// Returns the explained value.
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Returns the tracer session holding the graph.
    #[must_use]
    pub fn tracer(&self) -> &Tracer {
        &self.tracer
    }

    /// Returns the root node of the graph.
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.tracer.unknown_node()
    }

    /// Returns every source reached, in evaluation order.
    ///
    /// A source reached along two paths appears once per path.
    #[must_use]
    pub fn sources(&self) -> &[SourceReport] {
        &self.sources
    }

    /// Returns the number of sources reached.
    #[must_use]
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Returns the sources whose access path mentions `needle`.
    #[must_use]
    pub fn sources_through(&self, needle: &str) -> Vec<&SourceReport> {
        self.sources
            .iter()
            .filter(|s| s.designator.to_string().contains(needle))
            .collect()
    }

    /// Renders the explanation according to `config`.
    #[must_use]
    pub fn render(&self, config: &ExplainConfig) -> String {
        if config.json_output {
            JsonFormatter::from_config(config).format(self)
        } else {
            HumanFormatter::from_config(config).format(self)
        }
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Builds explanations with a non-default starting designator or filter.
pub struct Explainer<'a> {
    designator: Designator,
    filter: Filter<'a>,
    config: ExplainConfig,
}

impl Default for Explainer<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Explainer<'a> {
    /// Creates an explainer querying from the return value.
    #[must_use]
    pub fn new() -> Self {
        Self {
            designator: Designator::return_value(),
            filter: None,
            config: ExplainConfig::default(),
        }
    }

    /// Sets the designator the query starts from.
    #[must_use]
    pub fn with_designator(mut self, designator: Designator) -> Self {
        self.designator = designator;
        self
    }

    /// Sets the opaque filter handed to the query.
    #[must_use]
    pub fn with_filter(mut self, filter: Filter<'a>) -> Self {
        self.filter = filter;
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn with_config(mut self, config: ExplainConfig) -> Self {
        self.config = config;
        self
    }

    /// Runs the query and collects the sources.
    ///
    /// # Panics
    ///
    /// Panics if the query exceeds the configured tracer depth.
    #[must_use]
    pub fn explain(&self, value: &Value) -> Explanation {
        let mut tracer = Tracer::with_config(self.config.tracer.clone());
        let root = tracer.unknown_node();
        let leaves = value.query(self.filter, &self.designator, root, &mut tracer);
        let sources = leaves
            .into_iter()
            .map(|node| {
                let object = tracer.designated_object(node);
                SourceReport {
                    node,
                    designator: object.designator().clone(),
                    datum: object.value().datum().clone(),
                }
            })
            .collect::<Vec<_>>();
        debug!(
            nodes = tracer.node_count(),
            sources = sources.len(),
            "built explanation"
        );
        Explanation {
            value: value.clone(),
            tracer,
            sources,
        }
    }
}

/// Explains `value` from its return-value designator with default settings.
///
/// # Panics
///
/// Panics if the query exceeds the default tracer depth.
#[must_use]
pub fn explain(value: &Value) -> Explanation {
    Explainer::new().explain(value)
}
