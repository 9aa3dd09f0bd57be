//! Rendering explanations as text and JSON

use lineage_debug::{ExplainConfig, ExplainFormatter, HumanFormatter, JsonFormatter, explain};
use lineage_engine::Value;

use crate::doubled_first_price;

#[test]
fn shared_node_is_rendered_once() {
    let out = explain(&doubled_first_price()).render(&ExplainConfig::verbose());
    assert!(out.starts_with("value: 6\n?\n"));
    assert_eq!(out.matches("(shared)").count(), 1);
    assert_eq!(out.matches("# of /items[0]/price").count(), 4);
}

#[test]
fn compact_hides_data() {
    let out = explain(&doubled_first_price()).render(&ExplainConfig::compact());
    assert!(!out.contains("value:"));
    assert!(!out.contains(" = "));
    assert!(out.contains("sources:\n  # of /items[0]/price\n"));
}

#[test]
fn json_lists_shared_node_once() {
    let e = explain(&doubled_first_price());
    let out = JsonFormatter::new().format(&e);
    let node = e.sources()[0].node;
    let needle = format!("{{\"id\":{},", node.index());
    assert_eq!(out.matches(&needle).count(), 1);
    assert_eq!(out.matches("\"designator\":\"# of /items[0]/price\"").count(), 3);
}

#[test]
fn render_follows_json_flag() {
    let e = explain(&doubled_first_price());
    let out = e.render(&ExplainConfig::json());
    assert!(out.starts_with("{\n  \"value\": 6,"));
    assert_eq!(out, JsonFormatter::new().pretty().format(&e));
}

#[test]
fn format_many_joins_explanations() {
    let a = explain(&Value::from(1));
    let b = explain(&Value::from(2));
    let human = HumanFormatter::new().format_many(&[&a, &b]);
    assert_eq!(human.matches("sources:").count(), 2);

    let json = JsonFormatter::new().format_many(&[&a, &b]);
    assert!(json.starts_with("[{\"value\":1,"));
    assert!(json.ends_with("}]"));
}
