//! CLI command implementations
//!
//! Each command reads one JSON request, answers with one JSON response, and
//! exits. Lifecycle events go to stderr through the structured logger.

use std::io::{self, BufRead, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::executor::ExecResult;
use crate::observability::{log_event_with_fields, Event, Logger};
use crate::query::{explain as render_plan, Query};
use crate::value::Dataset;

use super::args::Command;
use super::config::Config;
use super::errors::CliResult;
use super::io::{read_request, write_error, write_response};

/// Request body of the `query` command
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QueryRequest {
    /// Records to scan, in scan order
    #[serde(default)]
    pub dataset: Dataset,
    /// Query to execute
    pub query: Query,
}

/// Request body of the `explain` command
#[derive(Debug, Clone, Deserialize)]
pub struct ExplainRequest {
    /// Query to explain
    pub query: Query,
}

/// Response data of the `query` command
#[derive(Debug, Serialize)]
pub struct QueryResponse {
    #[serde(flatten)]
    pub result: ExecResult,
    /// Explain plan of the executed query
    pub plan: String,
}

/// Response data of the `explain` command
#[derive(Debug, Serialize)]
pub struct ExplainResponse {
    pub plan: String,
}

/// Parse CLI arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    let stdin = io::stdin();
    run_command(cli.command, stdin.lock(), &mut io::stdout())
}

/// Run the appropriate command, reading the request from `input` and
/// writing the response to `output`.
///
/// On failure an error response is written to `output` before the error is
/// returned.
pub fn run_command<R: BufRead, W: Write>(
    cmd: Command,
    input: R,
    output: &mut W,
) -> CliResult<()> {
    let result = match cmd {
        Command::Query { config } => {
            load_config(config.as_deref()).and_then(|config| query(&config, input, output))
        }
        Command::Explain { config } => {
            load_config(config.as_deref()).and_then(|config| explain(&config, input, output))
        }
    };

    if let Err(err) = &result {
        log_event_with_fields(Event::RequestRejected, &[("code", err.code())]);
        let _ = write_error(output, err.code(), err.message());
    }

    result
}

fn load_config(path: Option<&Path>) -> CliResult<Config> {
    let config = Config::resolve(path)?;
    if config.log_queries {
        let fuel_limit = config.fuel_limit.to_string();
        log_event_with_fields(Event::ConfigLoaded, &[("fuel_limit", fuel_limit.as_str())]);
    }
    Ok(config)
}

/// Execute one query request.
///
/// Reads a [`QueryRequest`] from `input` and writes a [`QueryResponse`]
/// to `output`.
pub fn query<R: BufRead, W: Write>(config: &Config, input: R, output: &mut W) -> CliResult<()> {
    let request: QueryRequest = read_request(input)?;
    let engine = config.engine();
    let plan = render_plan(&request.query);
    let dataset_len = request.dataset.len();

    if config.log_queries {
        let fuel_limit = engine.fuel_limit().to_string();
        let records = dataset_len.to_string();
        log_event_with_fields(
            Event::QueryStart,
            &[
                ("fuel_limit", fuel_limit.as_str()),
                ("plan", plan.as_str()),
                ("records", records.as_str()),
            ],
        );
    }

    let result = engine.execute(&request.dataset, &request.query);

    if config.log_queries {
        let cost = result.cost.to_string();
        if result.fuel_exhausted(dataset_len) {
            let skipped = (dataset_len as u64 - result.cost).to_string();
            Logger::warn(
                Event::FuelExhausted.as_str(),
                &[("cost", cost.as_str()), ("skipped", skipped.as_str())],
            );
        }
        let fingerprint = result.fingerprint_hex();
        let rows = result.len().to_string();
        log_event_with_fields(
            Event::QueryComplete,
            &[
                ("cost", cost.as_str()),
                ("fingerprint", fingerprint.as_str()),
                ("rows", rows.as_str()),
            ],
        );
    }

    write_response(output, &QueryResponse { result, plan })
}

/// Render the explain plan of one request.
///
/// Reads an [`ExplainRequest`] from `input`; any `dataset` key is ignored.
pub fn explain<R: BufRead, W: Write>(config: &Config, input: R, output: &mut W) -> CliResult<()> {
    let request: ExplainRequest = read_request(input)?;
    let plan = render_plan(&request.query);

    if config.log_queries {
        log_event_with_fields(Event::ExplainComplete, &[("plan", plan.as_str())]);
    }

    write_response(output, &ExplainResponse { plan })
}
