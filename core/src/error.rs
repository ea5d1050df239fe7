use thiserror::Error;

use crate::ValueKind;

/// Invalid generation options.
///
/// This is a caller bug in how the options were built, never a transient
/// condition, so it is reported before any statement text is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// No primary key columns were given
    #[error("No primary key specified for table: {table}")]
    MissingPrimaryKey { table: String },
}

/// Failure turning a stored value back into its in-memory form
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The stored value has a kind the target cannot be read from
    #[error("unsupported type: {found} for {target}")]
    UnsupportedKind {
        target: &'static str,
        found: ValueKind,
    },

    /// An integer list element that is not a number
    #[error("invalid integer {token:?}")]
    InvalidInteger {
        token: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// An integer that does not fit the target type
    #[error("integer {value} out of range for {target}")]
    OutOfRange { target: &'static str, value: i64 },

    /// Malformed JSON document
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),

    /// Text stored as bytes that is not valid UTF-8
    #[error("invalid utf-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("invalid uuid: {0}")]
    Uuid(#[from] uuid::Error),
}
