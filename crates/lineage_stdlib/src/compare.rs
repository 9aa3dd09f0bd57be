//! Comparison and boolean leaf functions.
//!
//! These are typically the last step of a check: when one returns `false`,
//! querying its result leads back to the operands that made it fail.

use std::cmp::Ordering;

use lineage_engine::{AtomicFunction, Function, Value};
use lineage_foundation::{Datum, Error, Result, Type};

/// Orders two data, promoting ints against floats.
///
/// Returns `None` when a NaN is involved: such data are unordered.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn compare_data(a: &Datum, b: &Datum) -> Result<Option<Ordering>> {
    match (a, b) {
        (Datum::Int(x), Datum::Int(y)) => Ok(Some(x.cmp(y))),
        (Datum::Float(x), Datum::Float(y)) => Ok(x.partial_cmp(y)),
        (Datum::Int(x), Datum::Float(y)) => Ok((*x as f64).partial_cmp(y)),
        (Datum::Float(x), Datum::Int(y)) => Ok(x.partial_cmp(&(*y as f64))),
        (Datum::String(x), Datum::String(y)) => Ok(Some(x.cmp(y))),
        (Datum::Int(_) | Datum::Float(_) | Datum::String(_), _) => {
            Err(Error::type_mismatch(a.datum_type(), b.datum_type()))
        }
        _ => Err(Error::type_mismatch(Type::Number, a.datum_type())),
    }
}

/// Loose equality: numbers compare by IEEE value across int and float.
#[allow(clippy::cast_precision_loss, clippy::float_cmp)]
fn equal_data(a: &Datum, b: &Datum) -> bool {
    match (a, b) {
        (Datum::Float(x), Datum::Float(y)) => x == y,
        (Datum::Int(x), Datum::Float(y)) | (Datum::Float(y), Datum::Int(x)) => (*x as f64) == *y,
        _ => a == b,
    }
}

fn expect_bool(d: &Datum) -> Result<bool> {
    d.as_bool()
        .ok_or_else(|| Error::type_mismatch(Type::Bool, d.datum_type()))
}

macro_rules! ordering_fn {
    ($(#[$doc:meta])* $ty:ident, $name:literal, $ctor:ident, $pred:expr) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Debug, Default)]
        pub struct $ty;

        impl AtomicFunction for $ty {
            fn name(&self) -> &str {
                $name
            }

            fn arity(&self) -> usize {
                2
            }

            fn compute(&self, args: &[Value]) -> Result<Datum> {
                let ord = compare_data(args[0].datum(), args[1].datum())?;
                Ok(Datum::Bool(ord.is_some_and($pred)))
            }
        }

        #[doc = concat!("Returns [`", stringify!($ty), "`] as a [`Function`].")]
        #[must_use]
        pub fn $ctor() -> Function {
            Function::atomic($ty)
        }
    };
}

ordering_fn!(
    /// `@0 > @1`.
    GreaterThan,
    "greater-than",
    greater_than,
    Ordering::is_gt
);
ordering_fn!(
    /// `@0 < @1`.
    LessThan,
    "less-than",
    less_than,
    Ordering::is_lt
);
ordering_fn!(
    /// `@0 >= @1`.
    GreaterOrEqual,
    "greater-or-equal",
    greater_or_equal,
    Ordering::is_ge
);
ordering_fn!(
    /// `@0 <= @1`.
    LessOrEqual,
    "less-or-equal",
    less_or_equal,
    Ordering::is_le
);

/// `@0 == @1`. Never fails; data of different kinds are simply unequal.
#[derive(Clone, Copy, Debug, Default)]
pub struct Equals;

impl AtomicFunction for Equals {
    fn name(&self) -> &str {
        "equals"
    }

    fn arity(&self) -> usize {
        2
    }

    fn compute(&self, args: &[Value]) -> Result<Datum> {
        Ok(Datum::Bool(equal_data(args[0].datum(), args[1].datum())))
    }
}

/// Returns [`Equals`] as a [`Function`].
#[must_use]
pub fn equals() -> Function {
    Function::atomic(Equals)
}

/// Boolean conjunction of two booleans.
#[derive(Clone, Copy, Debug, Default)]
pub struct And;

impl AtomicFunction for And {
    fn name(&self) -> &str {
        "and"
    }

    fn arity(&self) -> usize {
        2
    }

    fn compute(&self, args: &[Value]) -> Result<Datum> {
        let a = expect_bool(args[0].datum())?;
        let b = expect_bool(args[1].datum())?;
        Ok(Datum::Bool(a && b))
    }
}

/// Returns [`And`] as a [`Function`].
#[must_use]
pub fn and() -> Function {
    Function::atomic(And)
}

/// Boolean disjunction of two booleans.
#[derive(Clone, Copy, Debug, Default)]
pub struct Or;

impl AtomicFunction for Or {
    fn name(&self) -> &str {
        "or"
    }

    fn arity(&self) -> usize {
        2
    }

    fn compute(&self, args: &[Value]) -> Result<Datum> {
        let a = expect_bool(args[0].datum())?;
        let b = expect_bool(args[1].datum())?;
        Ok(Datum::Bool(a || b))
    }
}

/// Returns [`Or`] as a [`Function`].
#[must_use]
pub fn or() -> Function {
    Function::atomic(Or)
}

/// Boolean negation.
#[derive(Clone, Copy, Debug, Default)]
pub struct Not;

impl AtomicFunction for Not {
    fn name(&self) -> &str {
        "not"
    }

    fn arity(&self) -> usize {
        1
    }

    fn compute(&self, args: &[Value]) -> Result<Datum> {
        Ok(Datum::Bool(!expect_bool(args[0].datum())?))
    }
}

/// Returns [`Not`] as a [`Function`].
#[must_use]
pub fn not() -> Function {
    Function::atomic(Not)
}
