//! Type descriptors for runtime checks on raw data.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Type descriptor of a [`Datum`](crate::Datum).
///
/// Leaf functions use these to report what they expected when an input has
/// the wrong shape.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Type {
    /// The nil type (only value: nil).
    Nil,
    /// Boolean type.
    Bool,
    /// 64-bit signed integer.
    Int,
    /// 64-bit floating point.
    Float,
    /// Either numeric type.
    Number,
    /// String type.
    String,
    /// Ordered list.
    List,
    /// Map keyed by data.
    Map,
    /// Any type (accepts any datum).
    Any,
}

impl Type {
    /// Returns true if this type is `Any`.
    #[must_use]
    pub const fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// Checks if a datum of type `actual` is accepted where `self` is expected.
    ///
    /// `Number` accepts both `Int` and `Float`; `Float` accepts `Int`.
    #[must_use]
    pub fn accepts(&self, actual: &Type) -> bool {
        match (self, actual) {
            (Self::Any, _) | (Self::Number | Self::Float, Self::Int) => true,
            (Self::Number, Self::Float) => true,
            _ => self == actual,
        }
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Nil => "nil",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::Number => "number",
            Self::String => "string",
            Self::List => "list",
            Self::Map => "map",
            Self::Any => "any",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
