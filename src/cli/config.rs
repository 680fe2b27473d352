//! Configuration file handling
//!
//! A configuration file is a JSON object. Every field is optional:
//!
//! ```json
//! { "fuel_limit": 1000000, "log_queries": true }
//! ```
//!
//! Unknown keys are rejected.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::executor::{Engine, DEFAULT_FUEL_LIMIT};

use super::errors::{CliError, CliResult};

/// Config file consulted when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "./fuelql.json";

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Records visited per query before the scan stops (default 1,000,000)
    #[serde(default = "default_fuel_limit")]
    pub fuel_limit: u64,

    /// Whether query lifecycle events are logged (default true)
    #[serde(default = "default_log_queries")]
    pub log_queries: bool,
}

fn default_fuel_limit() -> u64 {
    DEFAULT_FUEL_LIMIT
}
fn default_log_queries() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fuel_limit: default_fuel_limit(),
            log_queries: default_log_queries(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::config_error(format!("Failed to read config {:?}: {}", path, e))
        })?;

        Self::parse(&content)
    }

    /// Parse configuration from a JSON string
    pub fn parse(content: &str) -> CliResult<Self> {
        serde_json::from_str(content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))
    }

    /// Resolves the configuration for a command.
    ///
    /// An explicit path must load. Without one, the default path is used if
    /// it exists, otherwise built-in defaults apply.
    pub fn resolve(explicit: Option<&Path>) -> CliResult<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_PATH);
                if default_path.exists() {
                    Self::load(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Builds the engine described by this configuration
    pub fn engine(&self) -> Engine {
        Engine::new(self.fuel_limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.fuel_limit, DEFAULT_FUEL_LIMIT);
        assert!(config.log_queries);
        assert_eq!(config.engine(), Engine::default());
    }

    #[test]
    fn test_parse_partial() {
        let config = Config::parse(r#"{"fuel_limit": 5}"#).unwrap();
        assert_eq!(config.fuel_limit, 5);
        assert!(config.log_queries);
        assert_eq!(config.engine().fuel_limit(), 5);

        let config = Config::parse("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_zero_fuel_is_valid() {
        let config = Config::parse(r#"{"fuel_limit": 0}"#).unwrap();
        assert_eq!(config.engine().fuel_limit(), 0);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = Config::parse(r#"{"fuel": 5}"#).unwrap_err();
        assert_eq!(err.code(), "FUELQL_CLI_CONFIG_ERROR");
    }

    #[test]
    fn test_negative_fuel_rejected() {
        assert!(Config::parse(r#"{"fuel_limit": -1}"#).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"fuel_limit": 42, "log_queries": false}}"#).unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.fuel_limit, 42);
        assert!(!config.log_queries);

        let resolved = Config::resolve(Some(file.path())).unwrap();
        assert_eq!(resolved, config);
    }

    #[test]
    fn test_explicit_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.json");

        let err = Config::resolve(Some(&missing)).unwrap_err();
        assert_eq!(err.code(), "FUELQL_CLI_CONFIG_ERROR");
    }
}
