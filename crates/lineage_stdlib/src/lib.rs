//! Reusable leaf functions for Lineage.
//!
//! This crate provides leaf functions organized by category:
//! - Math functions (addition, subtraction, multiplication, division, negation)
//! - Comparison and boolean functions (equals, orderings, and, or, not)
//! - Attribute readers (plain and numeric field access on map data)
//! - Selection enumerations (find by key, find matching maps)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod attribute;
pub mod compare;
pub mod math;
pub mod select;

pub use attribute::{
    Attribute, NumericAttribute, attribute, dimension_height, dimension_width, numeric_attribute,
};
pub use compare::{
    And, Equals, GreaterOrEqual, GreaterThan, LessOrEqual, LessThan, Not, Or, and, equals,
    greater_or_equal, greater_than, less_or_equal, less_than, not, or,
};
pub use math::{
    Addition, Division, Multiplication, Negation, Subtraction, addition, division,
    multiplication, negation, subtraction,
};
pub use select::{FindByKey, FindMatching, find_by_key, find_matching};
