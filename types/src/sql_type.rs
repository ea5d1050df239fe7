//! Column type declarations and their per-dialect rendering
//!
//! Storage types are declared once in a dialect-neutral form, e.g.
//! `BIGSERIAL NOT NULL PRIMARY KEY` or `UUID`, and rewritten textually for
//! the target dialect by [`rewrite_sql_type`]. [`ColumnType`] names the
//! common intents so schemas don't have to spell the raw text out.

use crate::Dialect;

/// Rewrite a raw storage type declaration for `dialect`.
///
/// SQLite has no `SERIAL` or `UUID` types:
/// - `SERIAL`/`BIGSERIAL` become `INTEGER`, `NOT NULL` is dropped and
///   ` AUTOINCREMENT` is appended
/// - `UUID` becomes `TEXT`
///
/// PostgreSQL has no `AUTOINCREMENT`: the token is removed and every `INT`
/// substring is replaced by `SERIAL`. The replacement is a plain substring
/// replace, so `INTEGER` turns into `SERIALEGER`; schemas targeting both
/// dialects should declare `SERIAL` types instead.
///
/// Any other declaration is returned as is.
///
/// # Examples
///
/// ```
/// use boilerplate_types::{Dialect, rewrite_sql_type};
///
/// assert_eq!(
///     rewrite_sql_type(Dialect::SQLite, "BIGSERIAL NOT NULL PRIMARY KEY"),
///     "INTEGER PRIMARY KEY AUTOINCREMENT"
/// );
/// assert_eq!(rewrite_sql_type(Dialect::PostgreSQL, "UUID"), "UUID");
/// ```
#[must_use]
pub fn rewrite_sql_type(dialect: Dialect, raw: &str) -> String {
    let mut sql_type = raw.to_owned();
    match dialect {
        Dialect::SQLite => {
            if sql_type.contains("SERIAL") {
                sql_type = sql_type
                    .replace("BIGSERIAL", "INTEGER")
                    .replace("SERIAL", "INTEGER")
                    .replace("NOT NULL", "");
                sql_type.push_str(" AUTOINCREMENT");
                sql_type = sql_type.replace("  ", " ");
            }
            if sql_type.contains("UUID") {
                sql_type = sql_type.replace("UUID", "TEXT");
            }
        }
        Dialect::PostgreSQL => {
            if sql_type.contains("AUTOINCREMENT") {
                sql_type = sql_type.replace("AUTOINCREMENT", "").replace("INT", "SERIAL");
            }
        }
    }
    sql_type
}

/// Common column type intents
///
/// Each intent maps to the raw declaration a hand-written schema would use;
/// the dialect rewriting is still applied afterwards so both spellings produce
/// the same statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ColumnType {
    /// Auto-incrementing 32-bit key
    Serial,
    /// Auto-incrementing 64-bit key
    BigSerial,
    Integer,
    BigInt,
    Real,
    Boolean,
    Text,
    Uuid,
    /// JSON document, backed by a `JsonObject`
    Json,
    /// Array of text, backed by a `StringList`
    TextArray,
    /// Array of integers, backed by an `IntList`
    IntArray,
    Timestamp,
}

impl ColumnType {
    /// Dialect-neutral declaration for this intent
    #[must_use]
    pub const fn as_raw(&self) -> &'static str {
        match self {
            Self::Serial => "SERIAL",
            Self::BigSerial => "BIGSERIAL",
            Self::Integer => "INTEGER",
            Self::BigInt => "BIGINT",
            Self::Real => "REAL",
            Self::Boolean => "BOOLEAN",
            Self::Text => "TEXT",
            Self::Uuid => "UUID",
            Self::Json => "JSONB",
            Self::TextArray => "TEXT[]",
            Self::IntArray => "INT[]",
            Self::Timestamp => "TIMESTAMP",
        }
    }
}

impl core::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_raw())
    }
}
