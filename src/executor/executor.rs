//! Query executor for fuelql
//!
//! Executes a query against an in-memory dataset, producing deterministic
//! results.
//!
//! Execution flow (strict order):
//! 1. Initialize the per-call fuel counter from the engine's fuel limit
//! 2. Visit records in dataset order, one unit of fuel per record
//! 3. Stop as soon as fuel reaches zero
//! 4. Filter each visited record with the predicate
//! 5. Project matching records onto the selected fields
//! 6. Fingerprint the output

use crate::query::Query;
use crate::value::Record;

use super::filters::PredicateFilter;
use super::fingerprint::fingerprint_of;
use super::result::ExecResult;

/// Default fuel limit (records visited per call)
pub const DEFAULT_FUEL_LIMIT: u64 = 1_000_000;

/// Fuel-bounded query engine.
///
/// The only state is the configured fuel limit, which is never mutated by
/// execution. All per-call state is local to [`Engine::execute`], so one
/// engine can serve any number of calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Engine {
    fuel_limit: u64,
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            fuel_limit: DEFAULT_FUEL_LIMIT,
        }
    }
}

impl Engine {
    /// Creates an engine with the given fuel limit
    pub fn new(fuel_limit: u64) -> Self {
        Self { fuel_limit }
    }

    /// Set the fuel limit.
    pub fn with_fuel_limit(mut self, fuel_limit: u64) -> Self {
        self.fuel_limit = fuel_limit;
        self
    }

    /// Returns the configured fuel limit
    pub fn fuel_limit(&self) -> u64 {
        self.fuel_limit
    }

    /// Executes a query and returns the result bundle.
    ///
    /// Visits at most `fuel_limit` records; records past that point are
    /// never evaluated or charged. `cost` is always
    /// `min(fuel_limit, dataset.len())`. This method cannot fail.
    pub fn execute(&self, dataset: &[Record], query: &Query) -> ExecResult {
        let mut fuel = self.fuel_limit;
        let mut cost = 0u64;
        let mut rows = Vec::new();

        for record in dataset {
            // Fuel check
            if fuel == 0 {
                break;
            }
            fuel -= 1;
            cost += 1;

            if PredicateFilter::matches(record, &query.where_clause) {
                rows.push(project(record, &query.select_fields));
            }
        }

        let fingerprint = fingerprint_of(&rows);

        ExecResult {
            rows,
            cost,
            fingerprint,
        }
    }
}

/// Copies the selected fields present in `record`. Absent fields are
/// omitted, not null-filled.
fn project(record: &Record, select_fields: &[String]) -> Record {
    select_fields
        .iter()
        .filter_map(|field| {
            record
                .get_key_value(field.as_str())
                .map(|(k, v)| (k.clone(), v.clone()))
        })
        .collect()
}
