//! Shared type definitions for boilerplate
//!
//! This crate provides the schema vocabulary used by the statement generator:
//!
//! - [`Dialect`] - Target database dialect (SQLite, PostgreSQL)
//! - [`ColumnDef`] / [`Column`] - Column descriptors in declaration order
//! - [`ColumnType`] - Common column type intents
//! - [`rewrite_sql_type`] - Per-dialect storage type rewriting
//!
//! # Features
//!
//! - `serde` - Enable serde serialization/deserialization

mod column;
mod dialect;
mod sql_type;

pub use column::{Column, ColumnDef, SKIP};
pub use dialect::{Dialect, DialectParseError};
pub use sql_type::{ColumnType, rewrite_sql_type};

/// Prelude module for commonly used types
pub mod prelude {
    pub use crate::{Column, ColumnDef, ColumnType, Dialect};
}
