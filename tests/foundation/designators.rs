//! Integration tests for the designator algebra
//!
//! Tests composition, head/tail splitting, and display.

use lineage_foundation::{AtomicDesignator, Designator};

#[test]
fn composed_chain_reads_innermost_first() {
    let d = Designator::compose(&Designator::input(0), &Designator::return_value());
    let d = d.prepend(AtomicDesignator::Constant);
    assert_eq!(d.to_string(), "# of @0 of !");
    assert_eq!(d.len(), 3);
}

#[test]
fn head_and_tail() {
    let d = Designator::compose(
        &Designator::atomic(AtomicDesignator::attribute("width")),
        &Designator::return_value(),
    );
    assert_eq!(d.head(), &AtomicDesignator::attribute("width"));

    let tail = d.tail().unwrap();
    assert!(tail.is_atomic());
    assert_eq!(tail.as_atomic(), Some(&AtomicDesignator::ReturnValue));
    assert_eq!(tail.tail(), None);
}

#[test]
fn path_designators_display_raw() {
    let d = Designator::atomic(AtomicDesignator::path("/items[1]/price"));
    assert_eq!(d.to_string(), "/items[1]/price");
    let d = d.prepend(AtomicDesignator::Constant);
    assert_eq!(d.to_string(), "# of /items[1]/price");
}

#[test]
fn equality_is_elementwise() {
    let a = Designator::from_parts([
        AtomicDesignator::NthElement(0),
        AtomicDesignator::ReturnValue,
    ]);
    let b = Designator::compose(
        &Designator::atomic(AtomicDesignator::NthElement(0)),
        &Designator::return_value(),
    );
    assert_eq!(a, Some(b));
    assert_ne!(
        Designator::atomic(AtomicDesignator::NthElement(0)),
        Designator::atomic(AtomicDesignator::InputArgument(0))
    );
}

#[test]
fn parts_iterate_in_order() {
    let d = Designator::input(2).prepend(AtomicDesignator::Constant);
    let shown: Vec<String> = d.parts().map(ToString::to_string).collect();
    assert_eq!(shown, vec!["#", "@2"]);
    assert_eq!(d.last(), &AtomicDesignator::InputArgument(2));
}
