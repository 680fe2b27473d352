//! Query Executor subsystem for fuelql
//!
//! The executor runs a query over an in-memory dataset and produces a
//! deterministic result bundle: rows, cost, and fingerprint.
//!
//! # Execution Flow (strict order)
//!
//! 1. Visit records in dataset order
//! 2. Charge one unit of fuel per visited record; stop when fuel is spent
//! 3. Filter each visited record by the single predicate
//! 4. Project matches onto the selected fields
//! 5. Fingerprint the projected rows
//!
//! # Invariants
//!
//! - `cost == min(fuel_limit, dataset.len())`
//! - Matches keep their relative dataset order
//! - The fingerprint ignores row order
//! - Execution never fails

mod executor;
mod filters;
mod fingerprint;
mod result;

pub use executor::{Engine, DEFAULT_FUEL_LIMIT};
pub use filters::{evaluate, PredicateFilter};
pub use fingerprint::{fingerprint_of, SEED_FINGERPRINT};
pub use result::ExecResult;
