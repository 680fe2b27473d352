//! Query structures
//!
//! A query is a projection plus exactly one filter predicate. There is no
//! conjunction or disjunction.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// Comparison operator of a predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PredicateOp {
    /// field = value
    #[serde(rename = "eq")]
    Equal,
    /// field > value
    #[serde(rename = "gt")]
    GreaterThan,
    /// field < value
    #[serde(rename = "lt")]
    LessThan,
}

impl PredicateOp {
    /// Returns the operator name for explain output
    pub fn op_name(&self) -> &'static str {
        match self {
            PredicateOp::Equal => "eq",
            PredicateOp::GreaterThan => "gt",
            PredicateOp::LessThan => "lt",
        }
    }
}

impl fmt::Display for PredicateOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.op_name())
    }
}

/// A single predicate (field, operator, comparison value)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Predicate {
    /// Field name
    pub field: String,
    /// Comparison operator
    pub op: PredicateOp,
    /// Value to compare against
    pub value: Value,
}

impl Predicate {
    /// Create a predicate
    pub fn new(field: impl Into<String>, op: PredicateOp, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            op,
            value: value.into(),
        }
    }

    /// Create an equality predicate
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(field, PredicateOp::Equal, value)
    }

    /// Create a greater-than predicate
    pub fn gt(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(field, PredicateOp::GreaterThan, value)
    }

    /// Create a less-than predicate
    pub fn lt(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(field, PredicateOp::LessThan, value)
    }
}

/// Projection plus single-predicate filter.
///
/// `select_fields` order is preserved for explain rendering only. Projected
/// rows are records, so their fields iterate in name order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    /// Fields to project, in order
    #[serde(rename = "select", default)]
    pub select_fields: Vec<String>,
    /// Filter predicate
    #[serde(rename = "where")]
    pub where_clause: Predicate,
}

impl Query {
    /// Creates a query with an empty projection
    pub fn new(where_clause: Predicate) -> Self {
        Self {
            select_fields: Vec::new(),
            where_clause,
        }
    }

    /// Appends a field to the projection
    pub fn select(mut self, field: impl Into<String>) -> Self {
        self.select_fields.push(field.into());
        self
    }

    /// Replaces the projection
    pub fn with_select<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.select_fields = fields.into_iter().map(Into::into).collect();
        self
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&super::explain::explain(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_builder() {
        let query = Query::new(Predicate::gt("score", 20i64))
            .select("id")
            .select("user");

        assert_eq!(query.select_fields, vec!["id", "user"]);
        assert_eq!(query.where_clause.field, "score");
        assert_eq!(query.where_clause.op, PredicateOp::GreaterThan);
        assert_eq!(query.where_clause.value, Value::int(20));
    }

    #[test]
    fn test_with_select_replaces() {
        let query = Query::new(Predicate::eq("id", 1i64))
            .select("a")
            .with_select(["b", "c"]);
        assert_eq!(query.select_fields, vec!["b", "c"]);
    }

    #[test]
    fn test_op_names() {
        assert_eq!(PredicateOp::Equal.op_name(), "eq");
        assert_eq!(PredicateOp::GreaterThan.op_name(), "gt");
        assert_eq!(PredicateOp::LessThan.op_name(), "lt");
    }

    #[test]
    fn test_query_from_json() {
        let query: Query = serde_json::from_str(
            r#"{"select": ["id"], "where": {"field": "user", "op": "eq", "value": "bob"}}"#,
        )
        .unwrap();

        assert_eq!(query, Query::new(Predicate::eq("user", "bob")).select("id"));
    }

    #[test]
    fn test_query_from_json_missing_select() {
        let query: Query =
            serde_json::from_str(r#"{"where": {"field": "n", "op": "lt", "value": 3}}"#).unwrap();
        assert!(query.select_fields.is_empty());
        assert_eq!(query.where_clause, Predicate::lt("n", 3i64));
    }

    #[test]
    fn test_unknown_op_rejected() {
        let result = serde_json::from_str::<Query>(
            r#"{"select": [], "where": {"field": "n", "op": "gte", "value": 3}}"#,
        );
        assert!(result.is_err());
    }
}
