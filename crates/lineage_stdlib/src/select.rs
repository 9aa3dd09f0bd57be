//! Document selection: enumerations over nested map/list data.
//!
//! Paths are absolute from the document root. Map entries append `/key`,
//! list items append `[i]`:
//!
//! ```text
//! {items [{price 3} {price 5}]}
//!
//! FindByKey("price")  => /items[0]/price = 3
//!                        /items[1]/price = 5
//! ```

use std::sync::Arc;

use lineage_engine::{Element, Enumerate, Function};
use lineage_foundation::{Datum, Result};

/// Walks `datum` depth-first in document order, calling `visit` with each
/// node's path. Map entries are visited in key order.
fn walk(datum: &Datum, path: &mut String, visit: &mut dyn FnMut(&str, &Datum)) {
    visit(path.as_str(), datum);
    match datum {
        Datum::Map(map) => {
            for (key, child) in map.iter() {
                let len = path.len();
                path.push('/');
                path.push_str(&key.to_string());
                walk(child, path, visit);
                path.truncate(len);
            }
        }
        Datum::List(items) => {
            for (i, child) in items.iter().enumerate() {
                let len = path.len();
                path.push_str(&format!("[{i}]"));
                walk(child, path, visit);
                path.truncate(len);
            }
        }
        _ => {}
    }
}

/// Finds every value stored under a given key, at any depth.
#[derive(Clone, Debug)]
pub struct FindByKey {
    key: Datum,
    name: String,
}

impl FindByKey {
    /// Creates a search for the key `key`.
    #[must_use]
    pub fn new(key: &str) -> Self {
        Self {
            key: Datum::from(key),
            name: format!("find-by-key({key})"),
        }
    }
}

impl Enumerate for FindByKey {
    fn name(&self) -> &str {
        &self.name
    }

    fn enumerate(&self, input: &Datum) -> Result<Vec<Element>> {
        let mut found = Vec::new();
        let mut path = String::new();
        walk(input, &mut path, &mut |at: &str, node: &Datum| {
            if let Some(value) = node.as_map().and_then(|m| m.get(&self.key)) {
                found.push(Element::at(format!("{at}/{}", self.key), value.clone()));
            }
        });
        Ok(found)
    }
}

/// Finds every map whose `field` equals a given datum, at any depth.
///
/// The document root itself is included when it matches.
#[derive(Clone, Debug)]
pub struct FindMatching {
    field: Datum,
    expected: Datum,
    name: String,
}

impl FindMatching {
    /// Creates a search for maps with `field == expected`.
    #[must_use]
    pub fn new(field: &str, expected: impl Into<Datum>) -> Self {
        let expected = expected.into();
        Self {
            name: format!("find-matching({field}={expected})"),
            field: Datum::from(field),
            expected,
        }
    }
}

impl Enumerate for FindMatching {
    fn name(&self) -> &str {
        &self.name
    }

    fn enumerate(&self, input: &Datum) -> Result<Vec<Element>> {
        let mut found = Vec::new();
        let mut path = String::new();
        walk(input, &mut path, &mut |at: &str, node: &Datum| {
            let matches = node
                .as_map()
                .and_then(|m| m.get(&self.field))
                .is_some_and(|v| v == &self.expected);
            if matches {
                let at: Arc<str> = if at.is_empty() { Arc::from("/") } else { Arc::from(at) };
                found.push(Element::at(at, node.clone()));
            }
        });
        Ok(found)
    }
}

/// Returns a [`FindByKey`] enumeration as a [`Function`].
#[must_use]
pub fn find_by_key(key: &str) -> Function {
    Function::enumerate(FindByKey::new(key))
}

/// Returns a [`FindMatching`] enumeration as a [`Function`].
#[must_use]
pub fn find_matching(field: &str, expected: impl Into<Datum>) -> Function {
    Function::enumerate(FindMatching::new(field, expected))
}
