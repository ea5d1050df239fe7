//! Configuration types for boilerplate.toml

use std::path::Path;

use boilerplate_core::Dialect;
use serde::{Deserialize, Serialize};

/// Database connection configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Connection string handed to the driver, e.g. `":memory:"` or
    /// `"host=localhost user=postgres"`
    pub url: String,
}

/// Main configuration struct for boilerplate.toml
///
/// ```toml
/// dialect = "postgres"
///
/// [database]
/// url = "host=localhost user=postgres dbname=app"
/// ```
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Database dialect (sqlite, postgres)
    #[serde(default)]
    pub dialect: Dialect,
    /// Database connection configuration
    pub database: DatabaseConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::IoError(format!("{}: {e}", path.display())))?;
        Self::parse(&contents)
    }

    /// Parse configuration from a TOML string
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
}
