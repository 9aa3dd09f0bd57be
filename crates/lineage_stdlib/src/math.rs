//! Arithmetic leaf functions.
//!
//! Ints stay ints; mixing an int with a float promotes to float. Int results
//! outside the range of `i64` fail with an overflow error.

use lineage_engine::{AtomicFunction, Function, Value};
use lineage_foundation::{Datum, Error, ErrorKind, Result, Type};

fn number_mismatch(d: &Datum) -> Error {
    Error::type_mismatch(Type::Number, d.datum_type())
}

/// Adds two data.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn add_data(a: &Datum, b: &Datum) -> Result<Datum> {
    match (a, b) {
        (Datum::Int(x), Datum::Int(y)) => x
            .checked_add(*y)
            .map(Datum::Int)
            .ok_or_else(|| Error::overflow("addition")),
        (Datum::Float(x), Datum::Float(y)) => Ok(Datum::Float(x + y)),
        (Datum::Int(x), Datum::Float(y)) => Ok(Datum::Float(*x as f64 + y)),
        (Datum::Float(x), Datum::Int(y)) => Ok(Datum::Float(x + *y as f64)),
        (Datum::Int(_) | Datum::Float(_), _) => Err(number_mismatch(b)),
        _ => Err(number_mismatch(a)),
    }
}

/// Subtracts two data.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn sub_data(a: &Datum, b: &Datum) -> Result<Datum> {
    match (a, b) {
        (Datum::Int(x), Datum::Int(y)) => x
            .checked_sub(*y)
            .map(Datum::Int)
            .ok_or_else(|| Error::overflow("subtraction")),
        (Datum::Float(x), Datum::Float(y)) => Ok(Datum::Float(x - y)),
        (Datum::Int(x), Datum::Float(y)) => Ok(Datum::Float(*x as f64 - y)),
        (Datum::Float(x), Datum::Int(y)) => Ok(Datum::Float(x - *y as f64)),
        (Datum::Int(_) | Datum::Float(_), _) => Err(number_mismatch(b)),
        _ => Err(number_mismatch(a)),
    }
}

/// Multiplies two data.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn mul_data(a: &Datum, b: &Datum) -> Result<Datum> {
    match (a, b) {
        (Datum::Int(x), Datum::Int(y)) => x
            .checked_mul(*y)
            .map(Datum::Int)
            .ok_or_else(|| Error::overflow("multiplication")),
        (Datum::Float(x), Datum::Float(y)) => Ok(Datum::Float(x * y)),
        (Datum::Int(x), Datum::Float(y)) => Ok(Datum::Float(*x as f64 * y)),
        (Datum::Float(x), Datum::Int(y)) => Ok(Datum::Float(x * *y as f64)),
        (Datum::Int(_) | Datum::Float(_), _) => Err(number_mismatch(b)),
        _ => Err(number_mismatch(a)),
    }
}

/// Divides two data. Int division truncates.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn div_data(a: &Datum, b: &Datum) -> Result<Datum> {
    match (a, b) {
        (Datum::Int(_) | Datum::Float(_), Datum::Int(0)) => Err(Error::new(ErrorKind::DivisionByZero)),
        (Datum::Int(_) | Datum::Float(_), Datum::Float(y)) if *y == 0.0 => {
            Err(Error::new(ErrorKind::DivisionByZero))
        }
        (Datum::Int(x), Datum::Int(y)) => x
            .checked_div(*y)
            .map(Datum::Int)
            .ok_or_else(|| Error::overflow("division")),
        (Datum::Float(x), Datum::Float(y)) => Ok(Datum::Float(x / y)),
        (Datum::Int(x), Datum::Float(y)) => Ok(Datum::Float(*x as f64 / y)),
        (Datum::Float(x), Datum::Int(y)) => Ok(Datum::Float(x / *y as f64)),
        (Datum::Int(_) | Datum::Float(_), _) => Err(number_mismatch(b)),
        _ => Err(number_mismatch(a)),
    }
}

/// Negates a datum.
pub(crate) fn neg_datum(a: &Datum) -> Result<Datum> {
    match a {
        Datum::Int(x) => x
            .checked_neg()
            .map(Datum::Int)
            .ok_or_else(|| Error::overflow("negation")),
        Datum::Float(x) => Ok(Datum::Float(-x)),
        _ => Err(number_mismatch(a)),
    }
}

// =============================================================================
// Functions
// =============================================================================

macro_rules! binary_math {
    ($(#[$doc:meta])* $ty:ident, $name:literal, $op:path, $ctor:ident) => {
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
                $op(args[0].datum(), args[1].datum())
            }
        }

        #[doc = concat!("Returns [`", stringify!($ty), "`] as a [`Function`].")]
        #[must_use]
        pub fn $ctor() -> Function {
            Function::atomic($ty)
        }
    };
}

binary_math!(
    /// `@0 + @1`.
    Addition,
    "addition",
    add_data,
    addition
);
binary_math!(
    /// `@0 - @1`.
    Subtraction,
    "subtraction",
    sub_data,
    subtraction
);
binary_math!(
    /// `@0 * @1`.
    Multiplication,
    "multiplication",
    mul_data,
    multiplication
);
binary_math!(
    /// `@0 / @1`. Fails on a zero divisor.
    Division,
    "division",
    div_data,
    division
);

/// `-@0`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Negation;

impl AtomicFunction for Negation {
    fn name(&self) -> &str {
        "negation"
    }

    fn arity(&self) -> usize {
        1
    }

    fn compute(&self, args: &[Value]) -> Result<Datum> {
        neg_datum(args[0].datum())
    }
}

/// Returns [`Negation`] as a [`Function`].
#[must_use]
pub fn negation() -> Function {
    Function::atomic(Negation)
}
