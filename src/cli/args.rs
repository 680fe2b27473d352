//! CLI argument definitions using clap
//!
//! Commands:
//! - fuelql query [--config <path>]
//! - fuelql explain [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// fuelql - A strict, deterministic, fuel-bounded query evaluator
#[derive(Parser, Debug)]
#[command(name = "fuelql")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Execute a single query request read from stdin and exit
    Query {
        /// Path to configuration file (default: ./fuelql.json if present)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Render the explain plan of a query request read from stdin and exit
    Explain {
        /// Path to configuration file (default: ./fuelql.json if present)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
