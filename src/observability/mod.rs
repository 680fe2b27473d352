//! Observability subsystem for fuelql
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. The engine never logs; callers log around engine calls
//! 3. Deterministic output

mod events;
mod logger;

use std::io::{self, Write};

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log a lifecycle event with fields to stderr
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    write_event(event, fields, &mut io::stderr());
}

/// Write a lifecycle event to `writer`. Failure events log at ERROR.
pub fn write_event<W: Write>(event: Event, fields: &[(&str, &str)], writer: &mut W) {
    let severity = if event.is_failure() {
        Severity::Error
    } else {
        Severity::Info
    };
    Logger::log_to_writer(severity, event.as_str(), fields, writer);
}
