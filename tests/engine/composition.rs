//! Integration tests for composed functions
//!
//! Tests arity, positional and named slots, nesting, and immutable binding.

use lineage_engine::{ArgSource, ComposedFunction, Function, Value};
use lineage_foundation::{Datum, ErrorKind};
use lineage_stdlib::{addition, multiplication, negation, subtraction};

fn ints(values: &[i64]) -> Vec<Value> {
    values.iter().copied().map(Value::from).collect()
}

// =============================================================================
// Arity
// =============================================================================

#[test]
fn arity_of_constant_composition_is_zero() {
    let f = ComposedFunction::new(addition()).arg(1).arg(2);
    assert_eq!(f.arity(), 0);
    assert_eq!(f.evaluate(&[]).unwrap().datum(), &Datum::Int(3));
}

#[test]
fn arity_counts_nested_positions() {
    // (@0 * @1) - @2
    let product = ComposedFunction::new(multiplication()).arg("@0").arg("@1");
    let f = ComposedFunction::new(subtraction()).arg(product).arg("@2");
    assert_eq!(f.arity(), 3);
    assert_eq!(Function::from(f.clone()).arity(), 3);

    let v = f.evaluate(&ints(&[4, 5, 6])).unwrap();
    assert_eq!(v.datum(), &Datum::Int(14));
}

#[test]
fn named_variables_do_not_count() {
    let f = ComposedFunction::new(addition()).arg("$x").arg("@1");
    assert_eq!(f.arity(), 1);
}

// =============================================================================
// Binding
// =============================================================================

#[test]
fn unbound_variable_fails_until_set() {
    let f = ComposedFunction::new(addition()).arg("$x").arg(2);
    let err = f.evaluate(&[]).unwrap_err();
    assert!(err.is_unbound_variable());
    assert!(matches!(err.kind, ErrorKind::UnboundVariable(ref n) if n == "x"));

    let v = f.set("$x", 3).evaluate(&ints(&[10])).unwrap();
    assert_eq!(v.datum(), &Datum::Int(5));
}

#[test]
fn set_leaves_the_original_reusable() {
    let template = Function::from(ComposedFunction::new(addition()).arg("$x").arg("@0"));
    let plus_one = template.set_to("x", 1);
    let plus_ten = template.set_to("x", 10);

    assert_eq!(plus_one.evaluate(&ints(&[5])).unwrap().datum(), &Datum::Int(6));
    assert_eq!(plus_ten.evaluate(&ints(&[5])).unwrap().datum(), &Datum::Int(15));
    assert!(template.evaluate(&ints(&[5])).is_err());
}

#[test]
fn bindings_record_where_slots_came_from() {
    let f = ComposedFunction::new(addition()).arg("$x").arg("@0").set("x", 1);
    let v = f.evaluate(&ints(&[2])).unwrap();
    let sources: Vec<_> = v.bindings().unwrap().iter().map(|b| b.source.clone()).collect();
    assert_eq!(
        sources,
        vec![ArgSource::Named("x".into()), ArgSource::Positional(0)]
    );
}

// =============================================================================
// Nesting
// =============================================================================

#[test]
fn nested_functions_share_external_arguments() {
    // -(@0 + @0)
    let double = ComposedFunction::new(addition()).arg("@0").arg("@0");
    let f = ComposedFunction::new(negation()).arg(double);
    assert_eq!(f.arity(), 1);
    assert_eq!(f.evaluate(&ints(&[21])).unwrap().datum(), &Datum::Int(-42));
}

#[test]
fn composition_law() {
    // Composed(f, "@0", "@1") evaluates like f itself.
    let direct = addition().evaluate(&ints(&[7, 8])).unwrap();
    let wrapped = ComposedFunction::new(addition())
        .arg("@0")
        .arg("@1")
        .evaluate(&ints(&[7, 8]))
        .unwrap();
    assert_eq!(direct.datum(), wrapped.datum());
}

#[test]
fn positional_past_the_end_is_arity_mismatch() {
    let f = ComposedFunction::new(addition()).arg("@0").arg("@3");
    let err = f.evaluate(&ints(&[1, 2])).unwrap_err();
    assert!(err.is_arity_mismatch());
}

#[test]
fn literal_strings_stay_literal() {
    let f = ComposedFunction::new(addition()).arg("@0").arg("px");
    let err = f.evaluate(&ints(&[1])).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::TypeMismatch { .. }));
}
