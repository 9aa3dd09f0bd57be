//! Enumerations: leaf functions producing a traceable sequence.
//!
//! An implementation only lists raw elements, each optionally tagged with its
//! absolute path inside the input. The engine wraps every element as a
//! located value over the input and bundles them into a sequence, so any
//! element picked later (via [`Value::elements`]) still traces back to the
//! document it came from.

use std::sync::Arc;

use lineage_foundation::{Datum, Result};
use tracing::trace;

use crate::value::Value;

/// One raw element produced by an enumeration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    /// The element's content.
    pub datum: Datum,
    /// Absolute path of the element inside the input, if known.
    pub path: Option<Arc<str>>,
}

impl Element {
    /// Creates an element without a path; its position is used instead.
    #[must_use]
    pub fn new(datum: impl Into<Datum>) -> Self {
        Self {
            datum: datum.into(),
            path: None,
        }
    }

    /// Creates an element found at `path`.
    #[must_use]
    pub fn at(path: impl Into<Arc<str>>, datum: impl Into<Datum>) -> Self {
        Self {
            datum: datum.into(),
            path: Some(path.into()),
        }
    }
}

/// A leaf function of arity one that returns an ordered sequence.
pub trait Enumerate: Send + Sync {
    /// Name used in logs, errors, and explanations.
    fn name(&self) -> &str;

    /// Lists the elements found in `input`, in order.
    ///
    /// # Errors
    ///
    /// Returns an error if `input` cannot be enumerated.
    fn enumerate(&self, input: &Datum) -> Result<Vec<Element>>;
}

/// Runs an enumeration and wraps its output as a sequence value.
pub(crate) fn enumerate_value(f: &dyn Enumerate, input: &Value) -> Result<Value> {
    let found = f.enumerate(input.datum())?;
    trace!(function = f.name(), count = found.len(), "enumerated");
    let elements = found
        .into_iter()
        .enumerate()
        .map(|(i, element)| {
            let path = element.path.unwrap_or_else(|| Arc::from(format!("[{i}]")));
            Value::located(path, input.clone(), element.datum)
        })
        .collect();
    Ok(Value::sequence(f.name(), input.clone(), elements))
}
