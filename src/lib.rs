//! # Boilerplate
//!
//! Derive the standard CRUD statements for a table from its column list and
//! persist list and JSON fields in a single column, on SQLite or PostgreSQL.
//!
//! ## Quick Start
//!
//! ```rust
//! # #[cfg(feature = "sqlite")]
//! # fn main() -> boilerplate::Result<()> {
//! use boilerplate::prelude::*;
//!
//! struct Note {
//!     id: i64,
//!     body: String,
//!     tags: Option<StringList>,
//! }
//!
//! impl Columns for Note {
//!     const COLUMNS: &'static [ColumnDef] = &[
//!         ColumnDef::new("id", "BIGSERIAL NOT NULL PRIMARY KEY"),
//!         ColumnDef::new("body", "TEXT NOT NULL"),
//!         ColumnDef::new("tags", "TEXT[] NOT NULL"),
//!     ];
//! }
//!
//! impl FromRow for Note {
//!     fn from_row(row: &Row) -> boilerplate::Result<Self> {
//!         Ok(Self {
//!             id: row.get("id")?,
//!             body: row.get("body")?,
//!             tags: row.decode("tags")?,
//!         })
//!     }
//! }
//!
//! impl Record for Note {
//!     fn bind(&self) -> Params {
//!         Params::new()
//!             .with("id", self.id)
//!             .with("body", self.body.as_str())
//!             .with("tags", StringList::encode_option(self.tags.as_ref()))
//!     }
//! }
//!
//! let queries = GenerateOptions::for_record::<Note>("notes")
//!     .auto_generated(&["id"])
//!     .primary_keys(&["id"])
//!     .dialect(Dialect::SQLite)
//!     .generate()?;
//!
//! let mut store = boilerplate::open(Dialect::SQLite, ":memory:")?;
//! boilerplate::exec(&mut store, &queries.create_table, &[])?;
//!
//! let mut note = Note {
//!     id: 0,
//!     body: "hello".into(),
//!     tags: Some(StringList::from_iter(["a", "b"])),
//! };
//! boilerplate::named_exec_returning(&mut store, &queries.insert, &mut note)?;
//! assert_eq!(note.id, 1);
//!
//! let sql = format!("{} WHERE id = $1", queries.select);
//! let stored: Note = boilerplate::get(&mut store, &sql, &[note.id.into()])?;
//! assert_eq!(stored.tags, note.tags);
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "sqlite"))]
//! # fn main() {}
//! ```
//!
//! ## Database Support
//!
//! | Database   | Driver   | Feature Flag |
//! |------------|----------|--------------|
//! | SQLite     | rusqlite | `sqlite`     |
//! | PostgreSQL | postgres | `postgres`   |
//!
//! ## Features
//!
//! - `sqlite` (default) - [`SqliteStore`]
//! - `postgres` - [`PostgresStore`]
//! - `tracing` (default) - TRACE events from the execution helpers
//! - `serde` - Serialize/deserialize [`GeneratedQueries`] and [`Column`]

pub mod config;
pub mod error;
mod execute;
mod row;
pub mod store;
mod tracing;

// =============================================================================
// Root-level exports
// =============================================================================

pub use config::{Config, ConfigError, DatabaseConfig};
pub use error::{Result, StoreError};
pub use execute::{exec, get, named_exec, named_exec_returning, select};
pub use row::{FromRow, Params, Record, Row};
pub use store::{Store, open, open_from_config};

#[cfg(feature = "postgres")]
pub use store::PostgresStore;
#[cfg(feature = "sqlite")]
pub use store::SqliteStore;

/// Statement generation
pub use boilerplate_core::{
    Column, ColumnDef, ColumnType, Columns, Dialect, GenerateError, GenerateOptions,
    GeneratedQueries, generate, rewrite_sql_type,
};

/// Column values and composite codecs
pub use boilerplate_core::{
    CompositeValue, DecodeError, FromValue, IntList, JsonObject, StringList, Value, ValueKind,
};

/// Schema vocabulary crate
pub use boilerplate_types as types;

/// Prelude for record definitions and statement execution
pub mod prelude {
    pub use crate::{
        ColumnDef, ColumnType, Columns, CompositeValue, Dialect, FromRow, FromValue,
        GenerateOptions, GeneratedQueries, IntList, JsonObject, Params, Record, Row, Store,
        StringList, Value,
    };
}
