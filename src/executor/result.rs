//! Result types for query execution

use serde::{Serialize, Serializer};

use crate::value::{Dataset, Record};

/// Result of a single `execute` call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecResult {
    /// Projected matching records, in scan order
    pub rows: Dataset,
    /// Records visited (one unit of fuel each)
    pub cost: u64,
    /// Order-independent content fingerprint of `rows`
    #[serde(serialize_with = "serialize_fingerprint")]
    pub fingerprint: u64,
}

impl ExecResult {
    /// Returns true if no records matched
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the number of result rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns an iterator over the rows
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.rows.iter()
    }

    /// Returns true if the scan stopped before visiting all `dataset_len`
    /// records
    pub fn fuel_exhausted(&self, dataset_len: usize) -> bool {
        self.cost < dataset_len as u64
    }

    /// Fingerprint as 16 lowercase hex digits
    pub fn fingerprint_hex(&self) -> String {
        format!("{:016x}", self.fingerprint)
    }
}

fn serialize_fingerprint<S: Serializer>(fingerprint: &u64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{:016x}", fingerprint))
}
