//! Observability events for fuelql
//!
//! Events are explicit and typed.

use std::fmt;

/// Observable events in fuelql
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Configuration
    /// Configuration loaded
    ConfigLoaded,

    // Query operations
    /// Query received, execution begins
    QueryStart,
    /// Query executed
    QueryComplete,
    /// Scan stopped before the end of the dataset
    FuelExhausted,

    // Explain operations
    /// Explain rendered
    ExplainComplete,

    // Request handling
    /// Request could not be read or decoded
    RequestRejected,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::QueryStart => "QUERY_BEGIN",
            Event::QueryComplete => "QUERY_COMPLETE",
            Event::FuelExhausted => "FUEL_EXHAUSTED",
            Event::ExplainComplete => "EXPLAIN_COMPLETE",
            Event::RequestRejected => "REQUEST_REJECTED",
        }
    }

    /// Returns true if this event reports a failure
    pub fn is_failure(&self) -> bool {
        matches!(self, Event::RequestRejected)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
