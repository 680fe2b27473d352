//! Scalar value types
//!
//! Values are a closed set of kinds. There is no implicit coercion between
//! kinds: an `Int` never compares equal to a `Text`, even when the text
//! spells the same number.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::hash::payload_hash;

/// The kind tag of a [`Value`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Signed 64-bit integer
    Int,
    /// UTF-8 text
    Text,
}

impl ValueKind {
    /// Returns the canonical kind name
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Int => "int",
            ValueKind::Text => "text",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A typed scalar field value.
///
/// Serialized untagged: a JSON integer is `Int`, a JSON string is `Text`.
/// Any other JSON type is rejected at deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Text(String),
}

impl Value {
    /// Creates an integer value
    pub fn int(value: i64) -> Self {
        Value::Int(value)
    }

    /// Creates a text value
    pub fn text(value: impl Into<String>) -> Self {
        Value::Text(value.into())
    }

    /// Returns the kind tag
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Int(_) => ValueKind::Int,
            Value::Text(_) => ValueKind::Text,
        }
    }

    /// Returns true if both values have the same kind
    pub fn same_kind(&self, other: &Value) -> bool {
        self.kind() == other.kind()
    }

    /// Returns the integer payload, if this is an `Int`
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            Value::Text(_) => None,
        }
    }

    /// Returns the text payload, if this is a `Text`
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Int(_) => None,
            Value::Text(s) => Some(s),
        }
    }

    /// Deterministic 64-bit hash of the payload.
    ///
    /// The kind tag does not participate: `Int(i)` hashes the eight
    /// little-endian bytes of `i`, `Text(s)` hashes the bytes of `s`.
    /// An `Int` and a `Text` with identical payload bytes collide.
    pub fn payload_hash(&self) -> u64 {
        match self {
            Value::Int(i) => payload_hash(&i.to_le_bytes()),
            Value::Text(s) => payload_hash(s.as_bytes()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{}", i),
            Value::Text(s) => write!(f, "{:?}", s),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}
