//! Integration tests for Layer 3: Debug
//!
//! Tests explanations and their rendering.

mod explanation;
mod rendering;

use lineage_engine::{ComposedFunction, Value};
use lineage_foundation::Datum;
use lineage_stdlib::{addition, find_by_key};

/// A price list with two items.
pub fn catalog() -> Value {
    Value::constant(Datum::record([(
        "items",
        Datum::from(vec![
            Datum::record([("name", Datum::from("pen")), ("price", Datum::Int(3))]),
            Datum::record([("name", Datum::from("ink")), ("price", Datum::Int(5))]),
        ]),
    )]))
}

/// The first price added to itself: one source reached along two paths.
pub fn doubled_first_price() -> Value {
    let prices = find_by_key("price").evaluate(&[catalog()]).unwrap();
    let first = prices.elements()[0].clone();
    ComposedFunction::new(addition())
        .arg("@0")
        .arg("@1")
        .evaluate(&[first.clone(), first])
        .unwrap()
}
