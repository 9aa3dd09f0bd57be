//! Integration tests for provenance queries
//!
//! Tests leaf counts, designators, ordering, and node sharing.

use lineage_engine::{ComposedFunction, NodeId, Tracer, Value};
use lineage_foundation::{AtomicDesignator, Datum, Designator};
use lineage_stdlib::{addition, attribute, multiplication};

fn leaves_of(value: &Value) -> (Tracer, Vec<NodeId>) {
    let mut tracer = Tracer::new();
    let root = tracer.unknown_node();
    let leaves = value.query(None, &Designator::return_value(), root, &mut tracer);
    (tracer, leaves)
}

#[test]
fn leaf_count_matches_constant_inputs() {
    // (@0 + 1) * (@1 + 2): four constant sources
    let left = ComposedFunction::new(addition()).arg("@0").arg(1);
    let right = ComposedFunction::new(addition()).arg("@1").arg(2);
    let f = ComposedFunction::new(multiplication()).arg(left).arg(right);
    let v = f.evaluate(&[Value::from(3), Value::from(4)]).unwrap();
    assert_eq!(v.datum(), &Datum::Int(24));

    let (tracer, leaves) = leaves_of(&v);
    assert_eq!(leaves.len(), 4);
    let data: Vec<_> = leaves
        .iter()
        .map(|n| tracer.designated_object(*n).value().datum().clone())
        .collect();
    assert_eq!(
        data,
        vec![Datum::Int(3), Datum::Int(1), Datum::Int(4), Datum::Int(2)]
    );
}

#[test]
fn leaves_are_childless_and_marked_constant() {
    let v = ComposedFunction::new(addition())
        .arg("$x")
        .arg(2)
        .set("$x", 3)
        .evaluate(&[Value::from(10)])
        .unwrap();
    let (tracer, leaves) = leaves_of(&v);
    assert_eq!(leaves.len(), 2);
    for leaf in leaves {
        assert!(tracer.children(leaf).is_empty());
        let d = tracer.designated_object(leaf).designator();
        assert_eq!(d.head(), &AtomicDesignator::Constant);
    }
}

#[test]
fn nested_designators_chain_roles() {
    let inner = ComposedFunction::new(addition()).arg("@0").arg(1);
    let outer = ComposedFunction::new(addition()).arg(inner).arg(10);
    let v = outer.evaluate(&[Value::from(5)]).unwrap();

    let (tracer, leaves) = leaves_of(&v);
    let shown: Vec<String> = leaves
        .iter()
        .map(|n| tracer.designated_object(*n).designator().to_string())
        .collect();
    assert_eq!(
        shown,
        vec!["# of @0 of @0 of !", "# of @1 of @0 of !", "# of @1 of !"]
    );
}

#[test]
fn requery_reuses_every_node() {
    let element = Value::constant(Datum::record([("a", 1i64), ("b", 2i64)]));
    let f = ComposedFunction::new(addition())
        .arg(attribute("a"))
        .arg(attribute("b"));
    let v = f.evaluate(&[element]).unwrap();
    assert_eq!(v.datum(), &Datum::Int(3));

    let (mut tracer, leaves) = leaves_of(&v);
    assert_eq!(leaves.len(), 2);
    // Different roles keep the two reads apart.
    assert_ne!(leaves[0], leaves[1]);

    let before = tracer.node_count();
    let root = tracer.unknown_node();
    let again = v.query(None, &Designator::return_value(), root, &mut tracer);
    assert_eq!(again, leaves);
    assert_eq!(tracer.node_count(), before);
    assert_eq!(tracer.children(root).len(), 1);
}

#[test]
fn query_is_deterministic() {
    let v = ComposedFunction::new(addition())
        .arg("@0")
        .arg("@1")
        .evaluate(&[Value::from(1), Value::from(2)])
        .unwrap();
    let (t1, l1) = leaves_of(&v);
    let (t2, l2) = leaves_of(&v);
    assert_eq!(l1, l2);
    assert_eq!(t1.node_count(), t2.node_count());
    for (a, b) in l1.iter().zip(&l2) {
        assert_eq!(t1.designated_object(*a), t2.designated_object(*b));
    }
}

#[test]
fn explicit_starting_designator_is_kept() {
    let v = addition().evaluate(&[Value::from(1), Value::from(2)]).unwrap();
    let mut tracer = Tracer::new();
    let root = tracer.unknown_node();
    let leaves = v.query(None, &Designator::input(4), root, &mut tracer);
    assert_eq!(
        tracer.designated_object(leaves[1]).designator().to_string(),
        "# of @1 of @4"
    );
}
