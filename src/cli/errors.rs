//! CLI-specific error types
//!
//! The engine itself cannot fail; errors only arise while loading
//! configuration or reading and decoding requests.

use std::io;

use thiserror::Error;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file could not be read or parsed
    #[error("FUELQL_CLI_CONFIG_ERROR: {0}")]
    Config(String),

    /// I/O error (stdin/stdout)
    #[error("FUELQL_CLI_IO_ERROR: {0}")]
    Io(String),

    /// Request is empty or not a valid request document
    #[error("FUELQL_CLI_INVALID_REQUEST: {0}")]
    InvalidRequest(String),
}

impl CliError {
    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// Invalid request
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::Config(_) => "FUELQL_CLI_CONFIG_ERROR",
            Self::Io(_) => "FUELQL_CLI_IO_ERROR",
            Self::InvalidRequest(_) => "FUELQL_CLI_INVALID_REQUEST",
        }
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        match self {
            Self::Config(msg) | Self::Io(msg) | Self::InvalidRequest(msg) => msg,
        }
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        if e.is_io() {
            Self::io_error(e.to_string())
        } else {
            Self::invalid_request(format!("JSON error: {}", e))
        }
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
