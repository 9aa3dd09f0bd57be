//! Attribute readers: describing leaves that link a field back to its object.
//!
//! ```text
//! NumericAttribute("width") on {width "200px"}  => 200
//! query from !                                  => # of .width of !
//! ```

use std::sync::Arc;

use lineage_engine::{DescribingFunction, Function, Value};
use lineage_foundation::{AtomicDesignator, Datum, Result};

/// Reads a named field of a map datum. Absent fields read as nil.
#[derive(Clone, Debug)]
pub struct Attribute {
    name: Arc<str>,
}

impl Attribute {
    /// Creates a reader for the field `name`.
    #[must_use]
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the field name.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.name
    }
}

impl DescribingFunction for Attribute {
    fn name(&self) -> &str {
        &self.name
    }

    fn arity(&self) -> usize {
        1
    }

    fn describe(&self, args: &[Value]) -> Result<Value> {
        let output = args[0].datum().field(&self.name).cloned().unwrap_or(Datum::Nil);
        Ok(Value::derived(
            AtomicDesignator::Attribute(self.name.clone()),
            args[0].clone(),
            output,
        ))
    }
}

/// Reads a named field as a number.
///
/// Numbers pass through as floats; strings yield their leading number
/// (`"200px"` reads as `200.0`). Anything else reads as nil.
#[derive(Clone, Debug)]
pub struct NumericAttribute {
    name: Arc<str>,
}

impl NumericAttribute {
    /// Creates a numeric reader for the field `name`.
    #[must_use]
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self { name: name.into() }
    }
}

impl DescribingFunction for NumericAttribute {
    fn name(&self) -> &str {
        &self.name
    }

    fn arity(&self) -> usize {
        1
    }

    fn describe(&self, args: &[Value]) -> Result<Value> {
        let output = args[0]
            .datum()
            .field(&self.name)
            .and_then(read_number)
            .map_or(Datum::Nil, Datum::Float);
        Ok(Value::derived(
            AtomicDesignator::Attribute(self.name.clone()),
            args[0].clone(),
            output,
        ))
    }
}

fn read_number(d: &Datum) -> Option<f64> {
    match d {
        Datum::String(s) => leading_number(s),
        _ => d.as_number(),
    }
}

/// Parses the longest numeric prefix of `s`, ignoring leading whitespace.
pub(crate) fn leading_number(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - digits_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if frac_end > frac_start || digits > 0 {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }
    s[..end].parse().ok()
}

/// Returns an [`Attribute`] reader as a [`Function`].
#[must_use]
pub fn attribute(name: &str) -> Function {
    Function::describing(Attribute::new(name))
}

/// Returns a [`NumericAttribute`] reader as a [`Function`].
#[must_use]
pub fn numeric_attribute(name: &str) -> Function {
    Function::describing(NumericAttribute::new(name))
}

/// Reads the `width` dimension of an element.
#[must_use]
pub fn dimension_width() -> Function {
    numeric_attribute("width")
}

/// Reads the `height` dimension of an element.
#[must_use]
pub fn dimension_height() -> Function {
    numeric_attribute("height")
}
