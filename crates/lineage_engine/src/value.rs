//! Self-describing values and the provenance query protocol.
//!
//! A [`Value`] is what every evaluation returns. Besides its raw [`Datum`], it
//! remembers the values it was computed from, so that [`Value::query`] can
//! rebuild the lineage graph on demand:
//!
//! ```text
//! ComposedFunction(addition, @0, 2).evaluate(3)
//!
//! ?                         (tracer root)
//! └── !          5          (composed value)
//!     └── !      5          (atomic return value)
//!         ├── # of @0 of !  3   (leaf)
//!         └── # of @1 of !  2   (leaf)
//! ```

use std::any::Any;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use lineage_foundation::{AtomicDesignator, Datum, Designator};
use tracing::trace;

use crate::graph::{NodeId, Tracer};

/// Opaque hook handed through a query untouched.
///
/// The core traversal never inspects it; domain wrappers may downcast it.
pub type Filter<'a> = Option<&'a dyn Any>;

// =============================================================================
// Slot Bindings
// =============================================================================

/// Where the value supplied to one argument slot of a composed function came from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ArgSource {
    /// A literal given when the function was built.
    Constant,
    /// The external argument at this position.
    Positional(usize),
    /// A named variable bound with `set`.
    Named(Arc<str>),
    /// The result of a nested function.
    Nested,
}

impl fmt::Display for ArgSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant => write!(f, "constant"),
            Self::Positional(i) => write!(f, "@{i}"),
            Self::Named(name) => write!(f, "${name}"),
            Self::Nested => write!(f, "nested"),
        }
    }
}

/// The value actually supplied to one argument slot of a composed function.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SlotBinding {
    /// Index of the slot in the inner function's argument list.
    pub slot: usize,
    /// Where the value came from.
    pub source: ArgSource,
    /// The supplied value.
    pub value: Value,
}

// =============================================================================
// Value Kinds
// =============================================================================

/// The closed set of value shapes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// A literal or an original input. Always a leaf of the lineage graph.
    Constant(Datum),

    /// The output of one atomic function call.
    AtomicReturn {
        /// Name of the function that produced the output.
        function: Arc<str>,
        /// The raw output.
        output: Datum,
        /// The inputs consumed, in argument order.
        inputs: Vec<Value>,
    },

    /// The output of a composed function.
    Composed {
        /// Name of the inner function.
        function: Arc<str>,
        /// What the inner function returned.
        result: Value,
        /// The value supplied to each argument slot, in slot order.
        bindings: Vec<SlotBinding>,
    },

    /// One element drawn from an enumeration.
    Enumerated {
        /// Position of the element in the backing sequence.
        index: usize,
        /// The element itself.
        element: Value,
        /// The backing sequence value.
        sequence: Value,
    },

    /// The sequence produced by an enumeration.
    Sequence {
        /// Name of the enumeration.
        function: Arc<str>,
        /// The value the enumeration ran over.
        input: Value,
        /// The element values, each located inside `input`.
        elements: Vec<Value>,
        /// The raw list of element data.
        output: Datum,
    },

    /// A datum read from a source value through a named role.
    Derived {
        /// The role naming how `output` relates to `source`.
        role: AtomicDesignator,
        /// The value the datum was read from.
        source: Value,
        /// The raw datum.
        output: Datum,
    },

    /// A datum found at an absolute path inside a source value.
    ///
    /// Querying re-roots the designator at `Path(path)`: the consumer chain
    /// that reached this value is dropped, so every consumer of one element
    /// meets at the same source node.
    Located {
        /// The path of the datum inside `source`.
        path: Arc<str>,
        /// The document the datum was found in.
        source: Value,
        /// The raw datum.
        output: Datum,
    },
}

// =============================================================================
// Value
// =============================================================================

struct ValueInner {
    kind: ValueKind,
    hash: u64,
}

/// A self-describing datum: raw content plus how it was obtained.
///
/// Values are immutable and cheaply cloneable. Equality is structural; the
/// hash is computed once at construction.
#[derive(Clone)]
pub struct Value(Arc<ValueInner>);

impl Value {
    fn new(kind: ValueKind) -> Self {
        let mut hasher = DefaultHasher::new();
        kind.hash(&mut hasher);
        let hash = hasher.finish();
        Self(Arc::new(ValueInner { kind, hash }))
    }

    /// Wraps anything convertible into a value.
    ///
    /// Values pass through unchanged; raw data become constant sources.
    #[must_use]
    pub fn lift(raw: impl Into<Value>) -> Self {
        raw.into()
    }

    /// Creates a constant source value.
    #[must_use]
    pub fn constant(datum: impl Into<Datum>) -> Self {
        Self::new(ValueKind::Constant(datum.into()))
    }

    /// Creates the value returned by one atomic call.
    #[must_use]
    pub fn atomic_return(function: impl Into<Arc<str>>, output: Datum, inputs: Vec<Value>) -> Self {
        Self::new(ValueKind::AtomicReturn {
            function: function.into(),
            output,
            inputs,
        })
    }

    /// Creates the value returned by a composed function.
    #[must_use]
    pub fn composed(function: impl Into<Arc<str>>, result: Value, bindings: Vec<SlotBinding>) -> Self {
        Self::new(ValueKind::Composed {
            function: function.into(),
            result,
            bindings,
        })
    }

    /// Creates a domain wrapper: `output` was read from `source` through `role`.
    #[must_use]
    pub fn derived(role: AtomicDesignator, source: Value, output: impl Into<Datum>) -> Self {
        Self::new(ValueKind::Derived {
            role,
            source,
            output: output.into(),
        })
    }

    /// Creates a domain wrapper: `output` sits at `path` inside `source`.
    #[must_use]
    pub fn located(path: impl Into<Arc<str>>, source: Value, output: impl Into<Datum>) -> Self {
        Self::new(ValueKind::Located {
            path: path.into(),
            source,
            output: output.into(),
        })
    }

    pub(crate) fn sequence(function: impl Into<Arc<str>>, input: Value, elements: Vec<Value>) -> Self {
        let output = Datum::List(elements.iter().map(|e| e.datum().clone()).collect());
        Self::new(ValueKind::Sequence {
            function: function.into(),
            input,
            elements,
            output,
        })
    }

    /// Returns the shape of this value.
    #[must_use]
    pub fn kind(&self) -> &ValueKind {
        &self.0.kind
    }

    /// Returns the raw content of this value.
    #[must_use]
    pub fn datum(&self) -> &Datum {
        match self.kind() {
            ValueKind::Constant(datum) => datum,
            ValueKind::AtomicReturn { output, .. }
            | ValueKind::Sequence { output, .. }
            | ValueKind::Derived { output, .. }
            | ValueKind::Located { output, .. } => output,
            ValueKind::Composed { result, .. } => result.datum(),
            ValueKind::Enumerated { element, .. } => element.datum(),
        }
    }

    /// Returns true if this value is a constant source.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        matches!(self.kind(), ValueKind::Constant(_))
    }

    /// Returns the slot bindings if this value came from a composed function.
    #[must_use]
    pub fn bindings(&self) -> Option<&[SlotBinding]> {
        match self.kind() {
            ValueKind::Composed { bindings, .. } => Some(bindings),
            _ => None,
        }
    }

    /// Returns every element of an enumeration result as an individually
    /// traceable value.
    ///
    /// A composed value forwards to its inner result. Anything that is not a
    /// sequence yields no elements.
    #[must_use]
    pub fn elements(&self) -> Vec<Value> {
        match self.kind() {
            ValueKind::Sequence { elements, .. } => elements
                .iter()
                .enumerate()
                .map(|(index, element)| {
                    Self::new(ValueKind::Enumerated {
                        index,
                        element: element.clone(),
                        sequence: self.clone(),
                    })
                })
                .collect(),
            ValueKind::Composed { result, .. } => result.elements(),
            _ => Vec::new(),
        }
    }

    /// Returns a short label naming what produced this value.
    #[must_use]
    pub fn label(&self) -> String {
        match self.kind() {
            ValueKind::Constant(_) => "constant".to_string(),
            ValueKind::AtomicReturn { function, .. } | ValueKind::Sequence { function, .. } => {
                function.to_string()
            }
            ValueKind::Composed { function, .. } => format!("composed({function})"),
            ValueKind::Enumerated { index, .. } => format!("element[{index}]"),
            ValueKind::Derived { role, .. } => format!("derived({role})"),
            ValueKind::Located { path, .. } => format!("located({path})"),
        }
    }

    // =========================================================================
    // Query
    // =========================================================================

    /// Builds the lineage graph of this value under `parent`.
    ///
    /// `designator` names this value's role relative to whatever is being
    /// explained (usually [`Designator::return_value`]). Returns the leaf nodes
    /// (original sources) in left-to-right evaluation order.
    ///
    /// # Panics
    ///
    /// Panics if the traversal goes deeper than the tracer's configured
    /// maximum depth.
    pub fn query(
        &self,
        filter: Filter<'_>,
        designator: &Designator,
        parent: NodeId,
        tracer: &mut Tracer,
    ) -> Vec<NodeId> {
        self.query_at(filter, designator, parent, tracer, 0)
    }

    fn query_at(
        &self,
        filter: Filter<'_>,
        designator: &Designator,
        parent: NodeId,
        tracer: &mut Tracer,
        depth: usize,
    ) -> Vec<NodeId> {
        tracer.check_depth(depth);

        match self.kind() {
            ValueKind::Constant(_) => {
                let marked = designator.prepend(AtomicDesignator::Constant);
                let node = tracer.get_object_node(&marked, self);
                tracer.add_child(parent, node);
                trace!(designator = %marked, depth, "reached leaf");
                vec![node]
            }
            ValueKind::AtomicReturn { inputs, .. } => {
                let node = self.attach(designator, parent, tracer);
                let mut leaves = Vec::new();
                for (i, input) in inputs.iter().enumerate() {
                    let role = designator.prepend(AtomicDesignator::InputArgument(i));
                    leaves.extend(input.query_at(filter, &role, node, tracer, depth + 1));
                }
                leaves
            }
            ValueKind::Composed { result, .. } => {
                let node = self.attach(designator, parent, tracer);
                result.query_at(filter, designator, node, tracer, depth + 1)
            }
            ValueKind::Enumerated { index, element, .. } => {
                let node = self.attach(designator, parent, tracer);
                let role = designator.prepend(AtomicDesignator::NthElement(*index));
                element.query_at(filter, &role, node, tracer, depth + 1)
            }
            ValueKind::Sequence {
                input, elements, ..
            } => {
                let node = self.attach(designator, parent, tracer);
                if elements.is_empty() {
                    // An empty result is explained by what was searched.
                    let role = designator.prepend(AtomicDesignator::InputArgument(0));
                    return input.query_at(filter, &role, node, tracer, depth + 1);
                }
                let mut leaves = Vec::new();
                for (i, element) in elements.iter().enumerate() {
                    let role = designator.prepend(AtomicDesignator::NthElement(i));
                    leaves.extend(element.query_at(filter, &role, node, tracer, depth + 1));
                }
                leaves
            }
            ValueKind::Derived { role, source, .. } => {
                let node = self.attach(designator, parent, tracer);
                let role = designator.prepend(role.clone());
                source.query_at(filter, &role, node, tracer, depth + 1)
            }
            ValueKind::Located { path, source, .. } => {
                let node = self.attach(designator, parent, tracer);
                // Paths are absolute within their source: the consumer chain
                // does not carry over.
                let at = Designator::atomic(AtomicDesignator::Path(path.clone()));
                source.query_at(filter, &at, node, tracer, depth + 1)
            }
        }
    }

    fn attach(&self, designator: &Designator, parent: NodeId, tracer: &mut Tracer) -> NodeId {
        let node = tracer.get_object_node(designator, self);
        tracer.add_child(parent, node);
        trace!(designator = %designator, value = %self.label(), "attached node");
        node
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || (self.0.hash == other.0.hash && self.0.kind == other.0.kind)
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.0.hash);
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            ValueKind::Constant(datum) => write!(f, "Constant({datum:?})"),
            _ => write!(f, "{}({:?})", self.label(), self.datum()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.datum(), f)
    }
}

// Raw data lift to constant sources.

impl From<Datum> for Value {
    fn from(datum: Datum) -> Self {
        Self::constant(datum)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::constant(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::constant(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::constant(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::constant(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::constant(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::constant(s)
    }
}

impl From<&Value> for Value {
    fn from(v: &Value) -> Self {
        v.clone()
    }
}
