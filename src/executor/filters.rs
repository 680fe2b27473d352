//! Predicate evaluation for query execution
//!
//! Evaluates a single predicate against a record.
//! No type coercion. Every input has a defined boolean result.

use crate::query::{Predicate, PredicateOp};
use crate::value::{Record, Value};

/// Evaluates predicates against records
pub struct PredicateFilter;

impl PredicateFilter {
    /// Checks if a record matches the predicate.
    ///
    /// A field absent from the record never matches.
    pub fn matches(record: &Record, predicate: &Predicate) -> bool {
        match record.get(&predicate.field) {
            Some(actual) => Self::compare(actual, predicate.op, &predicate.value),
            None => false,
        }
    }

    /// Kind-matched comparison of `actual <op> expected`.
    ///
    /// - Int vs Int: numeric eq / gt / lt
    /// - Text vs Text: equality only; gt and lt are always false
    /// - Mixed kinds: always false
    fn compare(actual: &Value, op: PredicateOp, expected: &Value) -> bool {
        match (actual, expected) {
            (Value::Int(a), Value::Int(b)) => match op {
                PredicateOp::Equal => a == b,
                PredicateOp::GreaterThan => a > b,
                PredicateOp::LessThan => a < b,
            },
            (Value::Text(a), Value::Text(b)) => match op {
                PredicateOp::Equal => a == b,
                // No lexicographic ordering in the predicate language
                PredicateOp::GreaterThan | PredicateOp::LessThan => false,
            },
            (Value::Int(_), Value::Text(_)) | (Value::Text(_), Value::Int(_)) => false,
        }
    }
}

/// Evaluates `predicate` against `record`
pub fn evaluate(record: &Record, predicate: &Predicate) -> bool {
    PredicateFilter::matches(record, predicate)
}
