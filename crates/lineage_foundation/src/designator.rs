//! Designators: names for roles and positions inside a computation.
//!
//! An [`AtomicDesignator`] names a single step ("the return value", "the
//! second input", "attribute `width`"). A [`Designator`] is a non-empty chain
//! of atomic steps read innermost first, so `@0 of !` means "the first input
//! of the return value".
//!
//! ```text
//! compose(@1, !)          => @1 of !
//! compose(#, @1 of !)     => # of @1 of !
//! (# of @1 of !).head()   => #
//! (# of @1 of !).tail()   => @1 of !
//! ```

use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::collections::LinVec;

// =============================================================================
// Atomic Designator
// =============================================================================

/// A single addressing step.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AtomicDesignator {
    /// The return value of a function. Displayed as `!`.
    ReturnValue,
    /// The input argument at the given position. Displayed as `@i`.
    InputArgument(usize),
    /// Marks a literal source. Displayed as `#`.
    Constant,
    /// The unknown root of a tracing session. Displayed as `?`.
    Unknown,
    /// The element at the given index of a sequence. Displayed as `[i]`.
    NthElement(usize),
    /// A named attribute of an object. Displayed as `.name`.
    Attribute(Arc<str>),
    /// An absolute path inside a source document. Displayed as the path.
    Path(Arc<str>),
}

impl AtomicDesignator {
    /// Creates an attribute designator.
    #[must_use]
    pub fn attribute(name: impl Into<Arc<str>>) -> Self {
        Self::Attribute(name.into())
    }

    /// Creates a path designator.
    #[must_use]
    pub fn path(path: impl Into<Arc<str>>) -> Self {
        Self::Path(path.into())
    }
}

impl fmt::Display for AtomicDesignator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReturnValue => write!(f, "!"),
            Self::InputArgument(i) => write!(f, "@{i}"),
            Self::Constant => write!(f, "#"),
            Self::Unknown => write!(f, "?"),
            Self::NthElement(i) => write!(f, "[{i}]"),
            Self::Attribute(name) => write!(f, ".{name}"),
            Self::Path(path) => write!(f, "{path}"),
        }
    }
}

// =============================================================================
// Designator (compound chain)
// =============================================================================

/// A non-empty chain of atomic designators.
///
/// Equality is structural: two designators are equal iff their atomic parts
/// are equal element-wise. Cloning is O(1).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Designator {
    parts: LinVec<AtomicDesignator>,
}

impl Designator {
    /// Creates a designator consisting of a single atomic step.
    #[must_use]
    pub fn atomic(part: AtomicDesignator) -> Self {
        Self {
            parts: LinVec::unit(part),
        }
    }

    /// Creates a designator from a sequence of parts, innermost first.
    ///
    /// Returns `None` if `parts` is empty.
    pub fn from_parts(parts: impl IntoIterator<Item = AtomicDesignator>) -> Option<Self> {
        let parts: LinVec<AtomicDesignator> = parts.into_iter().collect();
        if parts.is_empty() {
            None
        } else {
            Some(Self { parts })
        }
    }

    /// The return-value designator `!`.
    #[must_use]
    pub fn return_value() -> Self {
        Self::atomic(AtomicDesignator::ReturnValue)
    }

    /// The input-argument designator `@index`.
    #[must_use]
    pub fn input(index: usize) -> Self {
        Self::atomic(AtomicDesignator::InputArgument(index))
    }

    /// The constant marker `#`.
    #[must_use]
    pub fn constant() -> Self {
        Self::atomic(AtomicDesignator::Constant)
    }

    /// The unknown root `?`.
    #[must_use]
    pub fn unknown() -> Self {
        Self::atomic(AtomicDesignator::Unknown)
    }

    /// Prepends `outer` in front of `inner`'s chain.
    #[must_use]
    pub fn compose(outer: &Designator, inner: &Designator) -> Self {
        Self {
            parts: outer.parts.concat(&inner.parts),
        }
    }

    /// Prepends a single atomic step in front of this chain.
    #[must_use]
    pub fn prepend(&self, part: AtomicDesignator) -> Self {
        Self {
            parts: self.parts.push_front(part),
        }
    }

    /// Returns the first (innermost) step.
    #[must_use]
    pub fn head(&self) -> &AtomicDesignator {
        match self.parts.first() {
            Some(part) => part,
            None => unreachable!("designator chains are never empty"),
        }
    }

    /// Returns the chain without its head, or `None` for a single step.
    #[must_use]
    pub fn tail(&self) -> Option<Designator> {
        if self.parts.len() <= 1 {
            return None;
        }
        Some(Self {
            parts: self.parts.skip(1),
        })
    }

    /// Returns the last (outermost) step.
    #[must_use]
    pub fn last(&self) -> &AtomicDesignator {
        match self.parts.last() {
            Some(part) => part,
            None => unreachable!("designator chains are never empty"),
        }
    }

    /// Returns the step if this chain has exactly one.
    #[must_use]
    pub fn as_atomic(&self) -> Option<&AtomicDesignator> {
        if self.is_atomic() {
            self.parts.first()
        } else {
            None
        }
    }

    /// Returns true if this chain has exactly one step.
    #[must_use]
    pub fn is_atomic(&self) -> bool {
        self.parts.len() == 1
    }

    /// Returns the number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Always false; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterates over the steps, innermost first.
    pub fn parts(&self) -> impl DoubleEndedIterator<Item = &AtomicDesignator> {
        self.parts.iter()
    }
}

impl From<AtomicDesignator> for Designator {
    fn from(part: AtomicDesignator) -> Self {
        Self::atomic(part)
    }
}

impl fmt::Display for Designator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                write!(f, " of ")?;
            }
            write!(f, "{part}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Designator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Designator({self})")
    }
}
