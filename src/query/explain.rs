//! Explain plan rendering
//!
//! Produces a fixed single-line plan from the query structure alone:
//!
//! ```text
//! SCAN -> FILTER(<field> <op>) -> PROJECT(<f1>,<f2>,...)
//! ```
//!
//! The format is a stable contract. The dataset is never consulted.

use super::ast::Query;

/// Renders the explain plan for a query
pub fn explain(query: &Query) -> String {
    let predicate = &query.where_clause;
    format!(
        "SCAN -> FILTER({} {}) -> PROJECT({})",
        predicate.field,
        predicate.op.op_name(),
        query.select_fields.join(",")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::Predicate;

    #[test]
    fn test_explain_reference_query() {
        let query = Query::new(Predicate::gt("score", 20i64)).with_select(["id", "user"]);
        assert_eq!(
            explain(&query),
            "SCAN -> FILTER(score gt) -> PROJECT(id,user)"
        );
    }

    #[test]
    fn test_explain_empty_projection() {
        let query = Query::new(Predicate::eq("user", "alice"));
        assert_eq!(explain(&query), "SCAN -> FILTER(user eq) -> PROJECT()");
    }

    #[test]
    fn test_explain_preserves_field_order() {
        let query = Query::new(Predicate::lt("age", 30i64)).with_select(["z", "a", "m"]);
        assert_eq!(explain(&query), "SCAN -> FILTER(age lt) -> PROJECT(z,a,m)");
    }

    #[test]
    fn test_explain_ignores_predicate_value() {
        let a = Query::new(Predicate::eq("id", 1i64)).select("id");
        let b = Query::new(Predicate::eq("id", "one")).select("id");
        assert_eq!(explain(&a), explain(&b));
    }

    #[test]
    fn test_display_matches_explain() {
        let query = Query::new(Predicate::gt("score", 20i64)).with_select(["id"]);
        assert_eq!(query.to_string(), explain(&query));
    }
}
