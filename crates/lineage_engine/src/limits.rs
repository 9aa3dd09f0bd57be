//! Evaluation limits and per-call evaluation state.

use std::sync::Arc;

use lineage_foundation::{Error, Result, SemanticLimit};

use crate::value::Value;

/// Bounds applied to one `evaluate` call.
#[derive(Clone, Debug)]
pub struct EvalLimits {
    /// Maximum nesting depth of function calls.
    pub max_depth: usize,
}

impl Default for EvalLimits {
    fn default() -> Self {
        Self { max_depth: 256 }
    }
}

impl EvalLimits {
    /// Creates the default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum nesting depth.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Limits that effectively never trip.
    #[must_use]
    pub fn unlimited() -> Self {
        Self {
            max_depth: usize::MAX,
        }
    }
}

/// Mutable state threaded through one evaluation.
pub(crate) struct EvalContext<'a> {
    limits: &'a EvalLimits,
    depth: usize,
    /// Named bindings visible from enclosing composed functions.
    scope: im::HashMap<Arc<str>, Value>,
}

impl<'a> EvalContext<'a> {
    pub(crate) fn new(limits: &'a EvalLimits) -> Self {
        Self {
            limits,
            depth: 0,
            scope: im::HashMap::new(),
        }
    }

    /// Enters a call frame, failing if the depth limit is exceeded.
    pub(crate) fn enter(&mut self, function: &str) -> Result<()> {
        if self.depth >= self.limits.max_depth {
            return Err(Error::limit_exceeded(SemanticLimit::MaxDepth {
                limit: self.limits.max_depth,
                function: Some(function.to_string()),
            }));
        }
        self.depth += 1;
        Ok(())
    }

    pub(crate) fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub(crate) fn depth(&self) -> usize {
        self.depth
    }

    pub(crate) fn lookup(&self, name: &str) -> Option<&Value> {
        self.scope.get(name)
    }

    /// Replaces the visible scope, returning the previous one.
    pub(crate) fn swap_scope(&mut self, scope: im::HashMap<Arc<str>, Value>) -> im::HashMap<Arc<str>, Value> {
        std::mem::replace(&mut self.scope, scope)
    }

    pub(crate) fn scope(&self) -> &im::HashMap<Arc<str>, Value> {
        &self.scope
    }
}
