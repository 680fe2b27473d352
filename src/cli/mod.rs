//! CLI module for fuelql
//!
//! Provides command-line interface for:
//! - query: One-shot query execution
//! - explain: One-shot explain rendering

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{
    explain, query, run, run_command, ExplainRequest, ExplainResponse, QueryRequest,
    QueryResponse,
};
pub use config::{Config, DEFAULT_CONFIG_PATH};
pub use errors::{CliError, CliResult};
pub use io::{read_request, write_error, write_response};
