//! Integration tests for error types
//!
//! Tests error kinds, messages, and context frames.

use lineage_foundation::{Error, ErrorContext, ErrorKind, SemanticLimit, Type};

#[test]
fn arity_mismatch_message() {
    let err = Error::arity_mismatch("2", 1);
    assert!(err.is_arity_mismatch());
    assert_eq!(err.to_string(), "arity mismatch: expected 2, got 1");
}

#[test]
fn type_mismatch_message() {
    let err = Error::type_mismatch(Type::Number, Type::Bool);
    assert_eq!(err.to_string(), "type mismatch: expected number, got bool");
}

#[test]
fn limit_exceeded_message() {
    let err = Error::limit_exceeded(SemanticLimit::MaxDepth {
        limit: 8,
        function: None,
    });
    assert!(matches!(err.kind, ErrorKind::LimitExceeded(_)));
    assert_eq!(
        err.to_string(),
        "limit exceeded: max evaluation depth (8) exceeded"
    );
}

#[test]
fn context_collects_frames() {
    let err = Error::unbound_variable("x")
        .with_context(ErrorContext::new().with_source("price check"))
        .in_frame("composed(addition)");
    let ctx = err.context.unwrap();
    assert_eq!(ctx.source.as_deref(), Some("price check"));
    assert_eq!(ctx.stack, vec!["composed(addition)"]);
}
