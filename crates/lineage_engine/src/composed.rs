//! Composed functions: call graphs over other functions.
//!
//! Each argument slot of a [`ComposedFunction`] is classified once, when the
//! function is built:
//!
//! ```text
//! "@0"      -> ArgSpec::Positional(0)   the first external argument
//! "$x"      -> ArgSpec::Named("x")      bound later with `set`
//! 2, "px"   -> ArgSpec::Constant(..)    a literal
//! Function  -> ArgSpec::Nested(..)      evaluated on the same arguments
//! ```
//!
//! ```text
//! ComposedFunction::new(addition()).arg("@0").arg(2)   arity 1
//!     .evaluate(&[3.into()])                           => 5
//! ```

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use lineage_foundation::{Datum, Error, Result};
use tracing::debug;

use crate::function::Function;
use crate::limits::{EvalContext, EvalLimits};
use crate::value::{ArgSource, SlotBinding, Value};

// =============================================================================
// Argument Specs
// =============================================================================

/// How one argument slot of a composed function gets its value.
#[derive(Clone, Debug)]
pub enum ArgSpec {
    /// A literal.
    Constant(Value),
    /// The external argument at this position.
    Positional(usize),
    /// A named free variable, without its `$` sigil.
    Named(Arc<str>),
    /// A function evaluated on the same external arguments.
    Nested(Function),
}

impl ArgSpec {
    /// Classifies a textual argument.
    ///
    /// `@N` is a positional reference, `$name` a named variable; anything
    /// else (including a malformed `@x` or a bare `$`) is a string literal.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        if let Some(index) = text.strip_prefix('@').and_then(|n| n.parse::<usize>().ok()) {
            return Self::Positional(index);
        }
        match text.strip_prefix('$') {
            Some(name) if !name.is_empty() => Self::Named(Arc::from(name)),
            _ => Self::Constant(Value::from(text)),
        }
    }

    fn source(&self) -> ArgSource {
        match self {
            Self::Constant(_) => ArgSource::Constant,
            Self::Positional(i) => ArgSource::Positional(*i),
            Self::Named(name) => ArgSource::Named(name.clone()),
            Self::Nested(_) => ArgSource::Nested,
        }
    }
}

impl From<&str> for ArgSpec {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

impl From<String> for ArgSpec {
    fn from(text: String) -> Self {
        Self::parse(&text)
    }
}

impl From<Value> for ArgSpec {
    fn from(value: Value) -> Self {
        Self::Constant(value)
    }
}

impl From<Datum> for ArgSpec {
    fn from(datum: Datum) -> Self {
        Self::Constant(Value::constant(datum))
    }
}

impl From<i64> for ArgSpec {
    fn from(n: i64) -> Self {
        Self::Constant(Value::from(n))
    }
}

impl From<i32> for ArgSpec {
    fn from(n: i32) -> Self {
        Self::Constant(Value::from(n))
    }
}

impl From<f64> for ArgSpec {
    fn from(n: f64) -> Self {
        Self::Constant(Value::from(n))
    }
}

impl From<bool> for ArgSpec {
    fn from(b: bool) -> Self {
        Self::Constant(Value::from(b))
    }
}

impl From<Function> for ArgSpec {
    fn from(f: Function) -> Self {
        Self::Nested(f)
    }
}

impl From<ComposedFunction> for ArgSpec {
    fn from(f: ComposedFunction) -> Self {
        Self::Nested(Function::from(f))
    }
}

// =============================================================================
// Composed Function
// =============================================================================

/// A function defined by wiring other functions together.
///
/// Immutable: [`ComposedFunction::set`] returns a bound copy and leaves the
/// original untouched, so one definition can be reused with different
/// bindings.
#[derive(Clone)]
pub struct ComposedFunction {
    name: Arc<str>,
    inner: Function,
    args: Vec<ArgSpec>,
    bindings: im::HashMap<Arc<str>, Value>,
}

impl ComposedFunction {
    /// Starts a composition around `inner` with no argument slots.
    pub fn new(inner: impl Into<Function>) -> Self {
        let inner = inner.into();
        Self {
            name: Arc::from(format!("composed({})", inner.name())),
            inner,
            args: Vec::new(),
            bindings: im::HashMap::new(),
        }
    }

    /// Appends one argument slot.
    #[must_use]
    pub fn arg(mut self, spec: impl Into<ArgSpec>) -> Self {
        self.args.push(spec.into());
        self
    }

    /// Appends several argument slots.
    #[must_use]
    pub fn with_args<I, A>(mut self, specs: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<ArgSpec>,
    {
        self.args.extend(specs.into_iter().map(Into::into));
        self
    }

    /// Returns a copy with the named variable bound to `value`.
    ///
    /// The name may be given with or without its `$` sigil.
    #[must_use]
    pub fn set(&self, name: &str, value: impl Into<Value>) -> Self {
        let name = name.strip_prefix('$').unwrap_or(name);
        let mut bound = self.clone();
        bound.bindings = self.bindings.update(Arc::from(name), value.into());
        bound
    }

    /// Returns `composed(<inner name>)`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the wrapped function.
    #[must_use]
    pub fn inner(&self) -> &Function {
        &self.inner
    }

    /// Returns the argument slots in order.
    #[must_use]
    pub fn args(&self) -> &[ArgSpec] {
        &self.args
    }

    /// Returns the value bound to a named variable, if any.
    #[must_use]
    pub fn binding(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name.strip_prefix('$').unwrap_or(name))
    }

    /// Returns the number of distinct positional references, nested
    /// compositions included. Named variables do not count.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.positional_indices().len()
    }

    fn positional_indices(&self) -> BTreeSet<usize> {
        let mut indices = BTreeSet::new();
        for spec in &self.args {
            match spec {
                ArgSpec::Positional(i) => {
                    indices.insert(*i);
                }
                ArgSpec::Nested(Function::Composed(f)) => indices.extend(f.positional_indices()),
                ArgSpec::Nested(f) => indices.extend(0..f.arity()),
                ArgSpec::Constant(_) | ArgSpec::Named(_) => {}
            }
        }
        indices
    }

    /// Evaluates under the default [`EvalLimits`].
    ///
    /// # Errors
    ///
    /// Returns an error if a positional reference has no matching argument,
    /// a named variable is unbound, the inner function fails, or the depth
    /// limit is exceeded.
    pub fn evaluate(&self, args: &[Value]) -> Result<Value> {
        self.evaluate_with(args, &EvalLimits::default())
    }

    /// Evaluates under explicit limits.
    ///
    /// # Errors
    ///
    /// See [`ComposedFunction::evaluate`].
    pub fn evaluate_with(&self, args: &[Value], limits: &EvalLimits) -> Result<Value> {
        let mut ctx = EvalContext::new(limits);
        ctx.enter(self.name())?;
        let result = self.evaluate_in(args, &mut ctx);
        ctx.leave();
        result
    }

    pub(crate) fn evaluate_in(&self, args: &[Value], ctx: &mut EvalContext<'_>) -> Result<Value> {
        // Own bindings shadow those of enclosing compositions.
        let scope = self.bindings.clone().union(ctx.scope().clone());
        let outer = ctx.swap_scope(scope);
        let result = self.call(args, ctx);
        ctx.swap_scope(outer);
        result.map_err(|e| e.in_frame(self.name()))
    }

    fn call(&self, args: &[Value], ctx: &mut EvalContext<'_>) -> Result<Value> {
        let mut bindings = Vec::with_capacity(self.args.len());
        for (slot, spec) in self.args.iter().enumerate() {
            let value = match spec {
                ArgSpec::Constant(value) => value.clone(),
                ArgSpec::Positional(i) => args
                    .get(*i)
                    .cloned()
                    .ok_or_else(|| Error::arity_mismatch(format!("at least {}", i + 1), args.len()))?,
                ArgSpec::Named(name) => ctx
                    .lookup(name)
                    .cloned()
                    .ok_or_else(|| Error::unbound_variable(name.as_ref()))?,
                ArgSpec::Nested(f) => f.evaluate_in(nested_args(f, args), ctx)?,
            };
            bindings.push(SlotBinding {
                slot,
                source: spec.source(),
                value,
            });
        }
        debug!(
            function = self.name(),
            slots = bindings.len(),
            external = args.len(),
            "resolved slot bindings"
        );

        let values: Vec<Value> = bindings.iter().map(|b| b.value.clone()).collect();
        let result = self.inner.evaluate_in(&values, ctx)?;
        Ok(Value::composed(self.inner.name(), result, bindings))
    }
}

/// Arguments handed to a nested function.
///
/// Compositions see every external argument and pick by position; leaves get
/// the leading `arity` arguments (all of them if there are fewer, so the
/// arity check reports the shortfall).
fn nested_args<'a>(f: &Function, args: &'a [Value]) -> &'a [Value] {
    match f {
        Function::Composed(_) => args,
        _ => args.get(..f.arity()).unwrap_or(args),
    }
}

impl fmt::Debug for ComposedFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComposedFunction")
            .field("inner", &self.inner)
            .field("args", &self.args)
            .field("bound", &self.bindings.keys().collect::<BTreeSet<_>>())
            .finish()
    }
}
