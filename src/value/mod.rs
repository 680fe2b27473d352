//! Value model for fuelql
//!
//! # Design Principles
//!
//! - Closed set of kinds: `Int` and `Text`
//! - No implicit coercion between kinds
//! - Deterministic payload hashing, independent of process and platform

mod hash;
mod record;
mod value;

pub use hash::{field_hash, mix, payload_hash};
pub use record::{record, Dataset, Record};
pub use value::{Value, ValueKind};
