//! Building explanations

use std::any::Any;

use lineage_debug::{ExplainConfig, Explainer, explain};
use lineage_engine::{TracerConfig, Value};
use lineage_foundation::{Datum, Designator};

use crate::{catalog, doubled_first_price};

#[test]
fn shared_source_has_two_parents() {
    let v = doubled_first_price();
    assert_eq!(v.datum(), &Datum::Int(6));

    let e = explain(&v);
    assert_eq!(e.source_count(), 2);
    let [a, b] = e.sources() else {
        panic!("expected two sources");
    };
    assert_eq!(a.node, b.node);
    assert_eq!(a.designator.to_string(), "# of /items[0]/price");
    assert_eq!(&a.datum, catalog().datum());
    assert_eq!(e.tracer().parents(a.node).len(), 2);
    assert_eq!(e.tracer().leaves_under(e.root()), vec![a.node]);
}

#[test]
fn sources_through_filters_by_path() {
    let e = explain(&doubled_first_price());
    assert_eq!(e.sources_through("/items[0]").len(), 2);
    assert!(e.sources_through("/items[1]").is_empty());
    assert_eq!(e.sources()[0].path().to_string(), "/items[0]/price");
}

#[test]
fn constant_value_explains_itself() {
    let e = explain(&Value::from(7));
    assert_eq!(e.source_count(), 1);
    assert_eq!(e.sources()[0].designator.to_string(), "# of !");
    assert_eq!(e.tracer().node_count(), 2);
}

#[test]
fn explainer_starting_designator() {
    let e = Explainer::new()
        .with_designator(Designator::input(2))
        .explain(&Value::from(7));
    assert_eq!(e.sources()[0].designator.to_string(), "# of @2");
}

#[test]
#[should_panic(expected = "exceeded max depth")]
fn explainer_respects_tracer_depth() {
    let config = ExplainConfig::new().with_tracer(TracerConfig::new().with_max_depth(2));
    let _ = Explainer::new()
        .with_config(config)
        .explain(&doubled_first_price());
}

#[test]
fn filter_is_passed_through() {
    let marker = 42u8;
    let plain = explain(&doubled_first_price());
    let filtered = Explainer::new()
        .with_filter(Some(&marker as &dyn Any))
        .explain(&doubled_first_price());
    assert_eq!(plain.sources(), filtered.sources());
}
