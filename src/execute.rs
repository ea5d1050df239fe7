//! Execution helpers
//!
//! Thin wrappers over a [`Store`] that decode rows into records and emit one
//! TRACE event per statement with the statement text, its arguments and the
//! outcome. Errors are returned as the store produced them.

use boilerplate_core::Value;

use crate::store::Store;
use crate::tracing::trace_statement;
use crate::{FromRow, Record, Result, StoreError};

/// Query a single row.
///
/// Fails with [`StoreError::NotFound`] when the statement matches nothing.
pub fn get<R, S>(store: &mut S, sql: &str, args: &[Value]) -> Result<R>
where
    R: FromRow,
    S: Store + ?Sized,
{
    let rows = store.query(sql, args);
    trace_statement!("GET", sql, args, rows.as_ref().map(Vec::len));
    let row = rows?.into_iter().next().ok_or(StoreError::NotFound)?;
    R::from_row(&row)
}

/// Query every matching row
pub fn select<R, S>(store: &mut S, sql: &str, args: &[Value]) -> Result<Vec<R>>
where
    R: FromRow,
    S: Store + ?Sized,
{
    let rows = store.query(sql, args);
    trace_statement!("SELECT", sql, args, rows.as_ref().map(Vec::len));
    rows?.iter().map(R::from_row).collect()
}

/// Run a statement, returning the number of rows changed
pub fn exec<S>(store: &mut S, sql: &str, args: &[Value]) -> Result<u64>
where
    S: Store + ?Sized,
{
    let result = store.execute(sql, args);
    trace_statement!("EXEC", sql, args, result);
    result
}

/// Run a statement with `:name` placeholders bound from `record`
pub fn named_exec<R, S>(store: &mut S, sql: &str, record: &R) -> Result<()>
where
    R: Record,
    S: Store + ?Sized,
{
    let params = record.bind();
    let result = store.execute_named(sql, &params);
    trace_statement!("NAMED_EXEC", sql, params, result);
    result.map(|_| ())
}

/// Run a `... RETURNING *` statement bound from `record` and replace
/// `record` with the first returned row.
///
/// Picks up database-assigned columns such as serial keys after an insert.
/// Fails with [`StoreError::NotFound`] when nothing is returned, leaving
/// `record` untouched.
pub fn named_exec_returning<R, S>(store: &mut S, sql: &str, record: &mut R) -> Result<()>
where
    R: Record,
    S: Store + ?Sized,
{
    let params = record.bind();
    let rows = store.query_named(sql, &params);
    trace_statement!("NAMED_EXEC_RET", sql, params, rows.as_ref().map(Vec::len));
    let row = rows?.into_iter().next().ok_or(StoreError::NotFound)?;
    *record = R::from_row(&row)?;
    Ok(())
}
