use boilerplate_core::{DecodeError, Dialect, GenerateError};
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum StoreError {
    /// No rows returned when at least one was expected
    #[error("No rows found")]
    NotFound,

    /// A named placeholder with no value in the bound record
    #[error("Missing value for parameter :{0}")]
    MissingParameter(String),

    /// A column the record expected is not in the result row
    #[error("Missing column: {0}")]
    MissingColumn(String),

    /// A column value that could not be converted
    #[error("Failed to decode column {column}: {source}")]
    Decode {
        column: String,
        #[source]
        source: DecodeError,
    },

    /// Error in statement
    #[error("Statement error: {0}")]
    Statement(String),

    /// The driver for this dialect was not compiled in
    #[error("Unsupported dialect: {0} (enable the `{0}` feature)")]
    UnsupportedDialect(Dialect),

    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Rusqlite specific errors
    #[cfg(feature = "sqlite")]
    #[error("Rusqlite error: {0}")]
    Rusqlite(#[from] rusqlite::Error),

    /// Postgres specific errors
    #[cfg(feature = "postgres")]
    #[error("Postgres error: {0}")]
    Postgres(#[from] postgres::Error),
}

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;
