//! The function model.
//!
//! Leaf computations plug in through one of three traits, chosen once when the
//! function is defined:
//!
//! - [`AtomicFunction`] computes a raw [`Datum`]; the engine records the inputs.
//! - [`DescribingFunction`] returns a [`Value`] that already explains itself.
//! - [`Enumerate`] produces a sequence of located elements.
//!
//! [`Function`] wraps any of these, or a [`ComposedFunction`], behind one
//! cheaply cloneable handle.

use std::fmt;
use std::sync::Arc;

use lineage_foundation::{Datum, Error, Result};
use tracing::trace;

use crate::composed::ComposedFunction;
use crate::enumerate::{Enumerate, enumerate_value};
use crate::limits::{EvalContext, EvalLimits};
use crate::value::Value;

// =============================================================================
// Leaf Traits
// =============================================================================

/// A leaf computation returning raw data.
pub trait AtomicFunction: Send + Sync {
    /// Name used in logs, errors, and explanations.
    fn name(&self) -> &str;

    /// Number of arguments the function takes.
    fn arity(&self) -> usize;

    /// Computes the output from exactly `arity()` arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if an argument has the wrong type or the computation
    /// itself fails.
    fn compute(&self, args: &[Value]) -> Result<Datum>;
}

/// A leaf computation that builds its own self-describing result.
///
/// The returned value is passed through unchanged, so the implementation is
/// responsible for linking it to its inputs (usually with
/// [`Value::derived`] or [`Value::located`]).
pub trait DescribingFunction: Send + Sync {
    /// Name used in logs, errors, and explanations.
    fn name(&self) -> &str;

    /// Number of arguments the function takes.
    fn arity(&self) -> usize;

    /// Computes the self-describing output.
    ///
    /// # Errors
    ///
    /// Returns an error if an argument has the wrong type or the computation
    /// itself fails.
    fn describe(&self, args: &[Value]) -> Result<Value>;
}

/// Zero-arity function returning a fixed value.
struct ConstantFunction(Value);

impl DescribingFunction for ConstantFunction {
    fn name(&self) -> &str {
        "constant"
    }

    fn arity(&self) -> usize {
        0
    }

    fn describe(&self, _args: &[Value]) -> Result<Value> {
        Ok(self.0.clone())
    }
}

// =============================================================================
// Function
// =============================================================================

/// Any evaluable function.
#[derive(Clone)]
pub enum Function {
    /// A raw-returning leaf.
    Atomic(Arc<dyn AtomicFunction>),
    /// A self-describing leaf.
    Describing(Arc<dyn DescribingFunction>),
    /// A call graph over other functions.
    Composed(Arc<ComposedFunction>),
    /// A leaf producing a traceable sequence.
    Enumerate(Arc<dyn Enumerate>),
}

impl Function {
    /// Wraps a raw-returning leaf.
    pub fn atomic(f: impl AtomicFunction + 'static) -> Self {
        Self::Atomic(Arc::new(f))
    }

    /// Wraps a self-describing leaf.
    pub fn describing(f: impl DescribingFunction + 'static) -> Self {
        Self::Describing(Arc::new(f))
    }

    /// Wraps an enumeration.
    pub fn enumerate(f: impl Enumerate + 'static) -> Self {
        Self::Enumerate(Arc::new(f))
    }

    /// A zero-arity function returning `value` unchanged.
    #[must_use]
    pub fn constant(value: impl Into<Value>) -> Self {
        Self::describing(ConstantFunction(value.into()))
    }

    /// Returns the function's name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Atomic(f) => f.name(),
            Self::Describing(f) => f.name(),
            Self::Composed(f) => f.name(),
            Self::Enumerate(f) => f.name(),
        }
    }

    /// Returns the number of external arguments the function consumes.
    #[must_use]
    pub fn arity(&self) -> usize {
        match self {
            Self::Atomic(f) => f.arity(),
            Self::Describing(f) => f.arity(),
            Self::Composed(f) => f.arity(),
            Self::Enumerate(_) => 1,
        }
    }

    /// Returns the composed function inside, if any.
    #[must_use]
    pub fn as_composed(&self) -> Option<&ComposedFunction> {
        match self {
            Self::Composed(f) => Some(f),
            _ => None,
        }
    }

    /// Lifts a raw datum or passes a value through.
    #[must_use]
    pub fn lift(raw: impl Into<Value>) -> Value {
        Value::lift(raw)
    }

    /// Binds a named variable, returning the bound copy.
    ///
    /// Leaf functions have no variables and are returned unchanged.
    #[must_use]
    pub fn set_to(&self, name: &str, value: impl Into<Value>) -> Self {
        match self {
            Self::Composed(f) => Self::from(f.as_ref().clone().set(name, value)),
            _ => self.clone(),
        }
    }

    /// Evaluates the function under the default [`EvalLimits`].
    ///
    /// # Errors
    ///
    /// Returns an error if the argument count does not match, a named
    /// variable is unbound, a leaf computation fails, or the depth limit is
    /// exceeded.
    pub fn evaluate(&self, args: &[Value]) -> Result<Value> {
        self.evaluate_with(args, &EvalLimits::default())
    }

    /// Evaluates the function under explicit limits.
    ///
    /// # Errors
    ///
    /// See [`Function::evaluate`].
    pub fn evaluate_with(&self, args: &[Value], limits: &EvalLimits) -> Result<Value> {
        let mut ctx = EvalContext::new(limits);
        self.evaluate_in(args, &mut ctx)
    }

    pub(crate) fn evaluate_in(&self, args: &[Value], ctx: &mut EvalContext<'_>) -> Result<Value> {
        ctx.enter(self.name())?;
        trace!(function = self.name(), arity = self.arity(), depth = ctx.depth(), "evaluate");
        let result = match self {
            Self::Atomic(f) => check_arity(f.name(), f.arity(), args.len())
                .and_then(|()| f.compute(args))
                .map(|output| Value::atomic_return(f.name(), output, args.to_vec())),
            Self::Describing(f) => {
                check_arity(f.name(), f.arity(), args.len()).and_then(|()| f.describe(args))
            }
            Self::Composed(f) => f.evaluate_in(args, ctx),
            Self::Enumerate(f) => check_arity(f.name(), 1, args.len())
                .and_then(|()| enumerate_value(f.as_ref(), &args[0])),
        };
        ctx.leave();
        result
    }
}

fn check_arity(name: &str, arity: usize, actual: usize) -> Result<()> {
    if arity == actual {
        Ok(())
    } else {
        Err(Error::arity_mismatch(arity.to_string(), actual).in_frame(name))
    }
}

impl From<ComposedFunction> for Function {
    fn from(f: ComposedFunction) -> Self {
        Self::Composed(Arc::new(f))
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Atomic(a) => write!(f, "Atomic({})", a.name()),
            Self::Describing(d) => write!(f, "Describing({})", d.name()),
            Self::Composed(c) => write!(f, "{c:?}"),
            Self::Enumerate(e) => write!(f, "Enumerate({})", e.name()),
        }
    }
}
