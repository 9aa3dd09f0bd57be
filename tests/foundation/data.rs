//! Integration tests for raw data and persistent collections
//!
//! Tests Datum equality, ordering, and LinVec/LinMap immutability.

use lineage_foundation::{Datum, LinMap, LinVec, Type};

// =============================================================================
// Datum
// =============================================================================

#[test]
fn datum_types() {
    assert_eq!(Datum::Nil.datum_type(), Type::Nil);
    assert_eq!(Datum::from(1).datum_type(), Type::Int);
    assert_eq!(Datum::from(1.5).datum_type(), Type::Float);
    assert_eq!(Datum::from("x").datum_type(), Type::String);
    assert_eq!(Datum::from(vec![1i64]).datum_type(), Type::List);
    assert_eq!(Datum::record([("a", 1i64)]).datum_type(), Type::Map);
}

#[test]
fn number_type_accepts_ints_and_floats() {
    assert!(Type::Number.accepts(&Type::Int));
    assert!(Type::Number.accepts(&Type::Float));
    assert!(!Type::Number.accepts(&Type::String));
    assert!(Type::Any.accepts(&Type::Map));
}

#[test]
fn nested_records() {
    let doc = Datum::record([(
        "items",
        Datum::from(vec![Datum::record([("price", 3i64)])]),
    )]);
    let first = doc
        .field("items")
        .and_then(Datum::as_list)
        .and_then(|items| items.get(0))
        .and_then(|item| item.field("price"));
    assert_eq!(first, Some(&Datum::Int(3)));
}

#[test]
fn records_compare_structurally() {
    let a = Datum::record([("x", 1i64), ("y", 2i64)]);
    let b = Datum::record([("y", 2i64), ("x", 1i64)]);
    assert_eq!(a, b);
    assert_eq!(a.to_string(), "{x 1, y 2}");
}

// =============================================================================
// Collections
// =============================================================================

#[test]
fn vector_immutability() {
    let v1 = LinVec::new().push_back(Datum::Int(1));
    let v2 = v1.push_back(Datum::Int(2));

    assert_eq!(v1.len(), 1);
    assert_eq!(v2.len(), 2);
    assert_eq!(v2.get(1), Some(&Datum::Int(2)));
}

#[test]
fn vector_structural_sharing() {
    let mut v = LinVec::new();
    for i in 0..1000 {
        v = v.push_back(Datum::Int(i));
    }
    let v2 = v.clone();
    let v3 = v2.push_front(Datum::Nil);
    assert_eq!(v.len(), 1000);
    assert_eq!(v3.len(), 1001);
    assert_eq!(v3.first(), Some(&Datum::Nil));
}

#[test]
fn map_insert_and_remove() {
    let m: LinMap<Datum, Datum> = LinMap::new();
    let m1 = m.insert(Datum::from("a"), Datum::Int(1));
    let m2 = m1.remove(&Datum::from("a"));

    assert!(m.is_empty());
    assert_eq!(m1.get(&Datum::from("a")), Some(&Datum::Int(1)));
    assert!(!m2.contains_key(&Datum::from("a")));
}
