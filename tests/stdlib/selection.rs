//! Enumerations over documents and the elements they produce

use lineage_engine::{ComposedFunction, Tracer, Value};
use lineage_foundation::{Datum, Designator};
use lineage_stdlib::{addition, find_by_key, find_matching};

fn catalog() -> Value {
    Value::constant(Datum::record([(
        "items",
        Datum::from(vec![
            Datum::record([("name", Datum::from("pen")), ("price", Datum::Int(3))]),
            Datum::record([("name", Datum::from("ink")), ("price", Datum::Int(5))]),
        ]),
    )]))
}

fn source_designators(value: &Value) -> Vec<String> {
    let mut tracer = Tracer::new();
    let root = tracer.unknown_node();
    value
        .query(None, &Designator::return_value(), root, &mut tracer)
        .into_iter()
        .map(|n| tracer.designated_object(n).designator().to_string())
        .collect()
}

#[test]
fn sequence_lists_every_match() {
    let prices = find_by_key("price").evaluate(&[catalog()]).unwrap();
    assert_eq!(prices.datum(), &Datum::from(vec![3i64, 5]));
    assert_eq!(
        source_designators(&prices),
        vec!["# of /items[0]/price", "# of /items[1]/price"]
    );
}

#[test]
fn picked_element_traces_to_its_path() {
    let prices = find_by_key("price").evaluate(&[catalog()]).unwrap();
    let second = &prices.elements()[1];
    assert_eq!(second.datum(), &Datum::Int(5));
    assert_eq!(second.label(), "element[1]");
    assert_eq!(source_designators(second), vec!["# of /items[1]/price"]);
}

#[test]
fn elements_feed_further_computation() {
    let prices = find_by_key("price").evaluate(&[catalog()]).unwrap();
    let elements = prices.elements();
    let total = ComposedFunction::new(addition())
        .arg("@0")
        .arg("@1")
        .evaluate(&elements)
        .unwrap();
    assert_eq!(total.datum(), &Datum::Int(8));
    assert_eq!(
        source_designators(&total),
        vec!["# of /items[0]/price", "# of /items[1]/price"]
    );
}

#[test]
fn empty_search_is_explained_by_its_input() {
    let none = find_matching("name", "brush").evaluate(&[catalog()]).unwrap();
    assert!(none.elements().is_empty());
    assert_eq!(source_designators(&none), vec!["# of @0 of !"]);
}

#[test]
fn composed_enumeration_forwards_elements() {
    let f = ComposedFunction::new(find_matching("name", "ink")).arg("@0");
    let found = f.evaluate(&[catalog()]).unwrap();
    let elements = found.elements();
    assert_eq!(elements.len(), 1);
    assert_eq!(elements[0].datum().field("price"), Some(&Datum::Int(5)));
    assert_eq!(source_designators(&elements[0]), vec!["# of /items[1]"]);
}
