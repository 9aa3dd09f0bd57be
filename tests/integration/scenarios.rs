//! Basic evaluate-then-query scenarios

use lineage::debug::explain;
use lineage::engine::{ComposedFunction, Element, Enumerate, Function, Value};
use lineage::foundation::{Datum, Result};
use lineage::stdlib::addition;

use crate::init_tracing;

#[test]
fn constant_composition() {
    init_tracing();
    let f = ComposedFunction::new(addition()).arg(1).arg(2);
    assert_eq!(f.arity(), 0);
    assert_eq!(f.evaluate(&[]).unwrap().datum(), &Datum::Int(3));
}

#[test]
fn one_positional_argument() {
    init_tracing();
    let f = ComposedFunction::new(addition()).arg("@0").arg(2);
    assert_eq!(f.arity(), 1);
    let v = f.evaluate(&[Value::from(3)]).unwrap();
    assert_eq!(v.datum(), &Datum::Int(5));
    assert_eq!(explain(&v).source_count(), 2);
}

#[test]
fn named_binding_ignores_surplus_argument() {
    init_tracing();
    let f = ComposedFunction::new(addition()).arg("$x").arg(2).set("$x", 3);
    let v = f.evaluate(&[Value::from(10)]).unwrap();
    assert_eq!(v.datum(), &Datum::Int(5));

    let e = explain(&v);
    assert_eq!(e.source_count(), 2);
    for source in e.sources() {
        assert!(e.tracer().children(source.node).is_empty());
    }
}

/// Wraps a single datum as a one-element list at `/only`.
struct Only;

impl Enumerate for Only {
    fn name(&self) -> &str {
        "only"
    }

    fn enumerate(&self, input: &Datum) -> Result<Vec<Element>> {
        Ok(input
            .field("only")
            .map(|d| vec![Element::at("/only", d.clone())])
            .unwrap_or_default())
    }
}

#[test]
fn enumeration_over_one_element() {
    init_tracing();
    let source = Value::constant(Datum::record([("only", 9i64)]));
    let seq = Function::enumerate(Only).evaluate(&[source.clone()]).unwrap();
    assert_eq!(seq.datum(), &Datum::from(vec![9i64]));

    let elements = seq.elements();
    assert_eq!(elements.len(), 1);
    let e = explain(&elements[0]);
    assert_eq!(e.source_count(), 1);
    let leaf = &e.sources()[0];
    assert_eq!(leaf.path().to_string(), "/only");
    assert_eq!(&leaf.datum, source.datum());
}
