//! Statement generation and composite column codecs
//!
//! - [`generate`] derives the CREATE/DROP/SELECT/INSERT/UPDATE/UPSERT/DELETE
//!   statements for a table from its column list
//! - [`StringList`], [`IntList`] and [`JsonObject`] encode list and mapping
//!   fields into a single column and back
//! - [`Value`] is the owned, driver-neutral column value both sides use
//!
//! Nothing here performs I/O or keeps state between calls.
//!
//! # Features
//!
//! - `serde` - Serialize/deserialize [`GeneratedQueries`]
//! - `rusqlite` - `ToSql`/`FromSql` for [`Value`]
//! - `postgres` - `postgres_types::ToSql`/`FromSql` for [`Value`]

pub mod codec;
pub mod error;
pub mod generate;
pub mod value;

pub use boilerplate_types::{Column, ColumnDef, ColumnType, Dialect, rewrite_sql_type};
pub use codec::{CompositeValue, IntList, JsonObject, StringList};
pub use error::{DecodeError, GenerateError};
pub use generate::{Columns, GenerateOptions, GeneratedQueries, generate};
pub use value::{FromValue, Value, ValueKind};

pub mod prelude {
    pub use crate::{
        ColumnDef, ColumnType, Columns, CompositeValue, Dialect, FromValue, GenerateOptions,
        GeneratedQueries, IntList, JsonObject, StringList, Value,
    };
}
