//! Query model for fuelql
//!
//! A query selects a list of fields from every record that satisfies a
//! single predicate.
//!
//! # Design Principles
//!
//! - One predicate per query (no AND / OR)
//! - Explicit operators: eq, gt, lt
//! - Explain output is a pure function of query structure

mod ast;
mod explain;

pub use ast::{Predicate, PredicateOp, Query};
pub use explain::explain;
