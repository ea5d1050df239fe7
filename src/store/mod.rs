//! Store handles
//!
//! A [`Store`] runs statement text against a database with either positional
//! arguments (`$1`, `?1`) or named `:name` parameters taken from a record's
//! [`Params`]. Results come back as owned [`Row`]s.
//!
//! | Database   | Driver   | Feature Flag |
//! |------------|----------|--------------|
//! | SQLite     | rusqlite | `sqlite`     |
//! | PostgreSQL | postgres | `postgres`   |

#[cfg(any(feature = "postgres", test))]
mod named;
#[cfg(feature = "postgres")]
mod postgres;
#[cfg(feature = "sqlite")]
mod sqlite;

#[cfg(feature = "postgres")]
pub use postgres::PostgresStore;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStore;

use boilerplate_core::{Dialect, Value};

use crate::{Config, Params, Result, Row, StoreError};

/// An open database handle
pub trait Store {
    fn dialect(&self) -> Dialect;

    /// Run a statement, discarding any rows it returns.
    ///
    /// Returns the number of rows changed.
    fn execute(&mut self, sql: &str, args: &[Value]) -> Result<u64>;

    /// Run a statement and collect every returned row
    fn query(&mut self, sql: &str, args: &[Value]) -> Result<Vec<Row>>;

    /// [`Store::execute`] with `:name` placeholders bound from `params`
    fn execute_named(&mut self, sql: &str, params: &Params) -> Result<u64>;

    /// [`Store::query`] with `:name` placeholders bound from `params`
    fn query_named(&mut self, sql: &str, params: &Params) -> Result<Vec<Row>>;
}

impl<S: Store + ?Sized> Store for Box<S> {
    fn dialect(&self) -> Dialect {
        (**self).dialect()
    }

    fn execute(&mut self, sql: &str, args: &[Value]) -> Result<u64> {
        (**self).execute(sql, args)
    }

    fn query(&mut self, sql: &str, args: &[Value]) -> Result<Vec<Row>> {
        (**self).query(sql, args)
    }

    fn execute_named(&mut self, sql: &str, params: &Params) -> Result<u64> {
        (**self).execute_named(sql, params)
    }

    fn query_named(&mut self, sql: &str, params: &Params) -> Result<Vec<Row>> {
        (**self).query_named(sql, params)
    }
}

/// Open a store for `dialect` using the driver's connection string.
///
/// SQLite takes a file path or `:memory:`; PostgreSQL takes a libpq-style
/// connection string or URL.
pub fn open(dialect: Dialect, url: &str) -> Result<Box<dyn Store + Send>> {
    match dialect {
        #[cfg(feature = "sqlite")]
        Dialect::SQLite => Ok(Box::new(SqliteStore::open(url)?)),
        #[cfg(feature = "postgres")]
        Dialect::PostgreSQL => Ok(Box::new(PostgresStore::connect(url)?)),
        #[allow(unreachable_patterns)]
        other => {
            let _ = url;
            Err(StoreError::UnsupportedDialect(other))
        }
    }
}

/// Open the store described by a [`Config`]
pub fn open_from_config(config: &Config) -> Result<Box<dyn Store + Send>> {
    open(config.dialect, &config.database.url)
}
