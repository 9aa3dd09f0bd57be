//! Integration tests for evaluation and query depth guards

use lineage_engine::{ComposedFunction, EvalLimits, Function, Tracer, TracerConfig, Value};
use lineage_foundation::{Designator, ErrorKind, SemanticLimit};
use lineage_stdlib::negation;

/// Wraps negation around `@0`, `depth` times.
fn negations(depth: usize) -> Function {
    let mut f = Function::from(ComposedFunction::new(negation()).arg("@0"));
    for _ in 1..depth {
        f = Function::from(ComposedFunction::new(negation()).arg(f));
    }
    f
}

#[test]
fn shallow_nesting_evaluates() {
    let v = negations(10).evaluate(&[Value::from(1)]).unwrap();
    assert_eq!(v.datum().as_int(), Some(1));
}

#[test]
fn deep_nesting_trips_the_depth_guard() {
    let err = negations(300).evaluate(&[Value::from(1)]).unwrap_err();
    match err.kind {
        ErrorKind::LimitExceeded(SemanticLimit::MaxDepth { limit, .. }) => assert_eq!(limit, 256),
        other => panic!("expected depth limit, got {other:?}"),
    }
    assert!(!err.context.unwrap().stack.is_empty());
}

#[test]
fn limits_are_configurable() {
    let f = negations(300);
    let v = f
        .evaluate_with(&[Value::from(1)], &EvalLimits::new().with_max_depth(1000))
        .unwrap();
    assert_eq!(v.datum().as_int(), Some(1));

    assert!(negations(3)
        .evaluate_with(&[Value::from(1)], &EvalLimits::new().with_max_depth(2))
        .is_err());
}

#[test]
#[should_panic(expected = "provenance query exceeded max depth")]
fn deep_query_panics() {
    let v = negations(50)
        .evaluate_with(&[Value::from(1)], &EvalLimits::unlimited())
        .unwrap();
    let mut tracer = Tracer::with_config(TracerConfig::new().with_max_depth(20));
    let root = tracer.unknown_node();
    let _ = v.query(None, &Designator::return_value(), root, &mut tracer);
}
