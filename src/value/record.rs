//! Records and datasets
//!
//! A record maps field names to values. Field names are unique within a
//! record. An ordered map keeps iteration deterministic; the order carries
//! no query semantics.

use std::collections::BTreeMap;

use super::value::Value;

/// A single record: field name to value
pub type Record = BTreeMap<String, Value>;

/// An ordered sequence of records. Order determines scan order.
pub type Dataset = Vec<Record>;

/// Builds a record from `(field, value)` pairs.
///
/// A repeated field name keeps the last value.
pub fn record<K, V, I>(fields: I) -> Record
where
    K: Into<String>,
    V: Into<Value>,
    I: IntoIterator<Item = (K, V)>,
{
    fields
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
