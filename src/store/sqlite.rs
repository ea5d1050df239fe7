//! SQLite store using [`rusqlite`].
//!
//! SQLite understands `:name` placeholders natively, so named parameters are
//! bound by looking up each parameter the prepared statement declares.

use boilerplate_core::{Dialect, Value};
use rusqlite::{Connection, Statement};

use super::Store;
use crate::{Params, Result, Row, StoreError};

/// SQLite database handle
#[derive(Debug)]
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub const fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Open a database file, or an in-memory database for `:memory:`
    pub fn open(path: &str) -> Result<Self> {
        let conn = if path == ":memory:" {
            Connection::open_in_memory()?
        } else {
            Connection::open(path)?
        };
        Ok(Self::new(conn))
    }

    pub fn open_in_memory() -> Result<Self> {
        Ok(Self::new(Connection::open_in_memory()?))
    }

    /// Gets a reference to the underlying connection
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    pub fn into_inner(self) -> Connection {
        self.conn
    }

    fn changes_after(&self, mut stmt: Statement<'_>) -> Result<u64> {
        // Drain instead of `raw_execute`, which rejects statements that
        // return rows (`... RETURNING *`).
        let mut rows = stmt.raw_query();
        while rows.next()?.is_some() {}
        Ok(self.conn.changes())
    }
}

fn bind_positional(stmt: &mut Statement<'_>, args: &[Value]) -> Result<()> {
    for (i, arg) in args.iter().enumerate() {
        stmt.raw_bind_parameter(i + 1, arg)?;
    }
    Ok(())
}

fn bind_named(stmt: &mut Statement<'_>, params: &Params) -> Result<()> {
    for index in 1..=stmt.parameter_count() {
        let name = stmt
            .parameter_name(index)
            .map(|n| n.trim_start_matches(|c: char| matches!(c, ':' | '@' | '$')).to_owned())
            .ok_or_else(|| StoreError::Statement(format!("parameter {index} is not named")))?;
        let value = params
            .get(&name)
            .ok_or(StoreError::MissingParameter(name))?;
        stmt.raw_bind_parameter(index, value)?;
    }
    Ok(())
}

fn read_rows(stmt: &mut Statement<'_>) -> Result<Vec<Row>> {
    let columns: Vec<String> = stmt
        .column_names()
        .into_iter()
        .map(str::to_owned)
        .collect();

    let mut rows = stmt.raw_query();
    let mut results = Vec::new();
    while let Some(row) = rows.next()? {
        let values = (0..columns.len())
            .map(|i| row.get_ref(i).map(Value::from))
            .collect::<rusqlite::Result<Vec<_>>>()?;
        results.push(Row::new(columns.clone(), values));
    }
    Ok(results)
}

impl Store for SqliteStore {
    fn dialect(&self) -> Dialect {
        Dialect::SQLite
    }

    fn execute(&mut self, sql: &str, args: &[Value]) -> Result<u64> {
        let mut stmt = self.conn.prepare(sql)?;
        bind_positional(&mut stmt, args)?;
        self.changes_after(stmt)
    }

    fn query(&mut self, sql: &str, args: &[Value]) -> Result<Vec<Row>> {
        let mut stmt = self.conn.prepare(sql)?;
        bind_positional(&mut stmt, args)?;
        read_rows(&mut stmt)
    }

    fn execute_named(&mut self, sql: &str, params: &Params) -> Result<u64> {
        let mut stmt = self.conn.prepare(sql)?;
        bind_named(&mut stmt, params)?;
        self.changes_after(stmt)
    }

    fn query_named(&mut self, sql: &str, params: &Params) -> Result<Vec<Row>> {
        let mut stmt = self.conn.prepare(sql)?;
        bind_named(&mut stmt, params)?;
        read_rows(&mut stmt)
    }
}
