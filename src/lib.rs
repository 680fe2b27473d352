//! fuelql - A strict, deterministic, fuel-bounded query evaluator
//!
//! Evaluates a single-predicate, projecting query over an in-memory dataset.
//! Every call visits at most `fuel_limit` records and returns the matching
//! rows, the number of records visited, and an order-independent content
//! fingerprint of the rows.
//!
//! ```
//! use fuelql::executor::Engine;
//! use fuelql::query::{explain, Predicate, Query};
//! use fuelql::value::{record, Value};
//!
//! let dataset = vec![
//!     record([("id", Value::int(1)), ("user", Value::text("alice")), ("score", Value::int(42))]),
//!     record([("id", Value::int(2)), ("user", Value::text("bob")), ("score", Value::int(12))]),
//! ];
//! let query = Query::new(Predicate::gt("score", 20i64)).with_select(["id", "user"]);
//!
//! let result = Engine::new(100).execute(&dataset, &query);
//! assert_eq!(result.cost, 2);
//! assert_eq!(result.len(), 1);
//! assert_eq!(explain(&query), "SCAN -> FILTER(score gt) -> PROJECT(id,user)");
//! ```

pub mod cli;
pub mod executor;
pub mod observability;
pub mod query;
pub mod value;
