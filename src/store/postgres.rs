//! PostgreSQL store using the synchronous [`postgres`] client.

use boilerplate_core::{Dialect, Value};
use postgres::types::ToSql;
use postgres::{Client, NoTls};

use super::Store;
use super::named::rewrite_named;
use crate::{Params, Result, Row, StoreError};

/// PostgreSQL database handle
pub struct PostgresStore {
    client: Client,
}

impl std::fmt::Debug for PostgresStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostgresStore").finish_non_exhaustive()
    }
}

impl PostgresStore {
    pub const fn new(client: Client) -> Self {
        Self { client }
    }

    /// Connect without TLS
    pub fn connect(url: &str) -> Result<Self> {
        Ok(Self::new(Client::connect(url, NoTls)?))
    }

    /// Gets a mutable reference to the underlying client
    pub fn client(&mut self) -> &mut Client {
        &mut self.client
    }

    pub fn into_inner(self) -> Client {
        self.client
    }
}

fn to_params(args: &[Value]) -> Vec<&(dyn ToSql + Sync)> {
    args.iter().map(|v| v as &(dyn ToSql + Sync)).collect()
}

/// Resolve `:name` placeholders into `$n` text and positional values
fn resolve_named<'p>(sql: &str, params: &'p Params) -> Result<(String, Vec<&'p Value>)> {
    let (sql, names) = rewrite_named(sql);
    let values = names
        .into_iter()
        .map(|name| params.get(&name).ok_or(StoreError::MissingParameter(name)))
        .collect::<Result<Vec<_>>>()?;
    Ok((sql, values))
}

fn read_row(row: &postgres::Row) -> Result<Row> {
    let columns = row.columns().iter().map(|c| c.name().to_owned()).collect();
    let values = (0..row.len())
        .map(|i| row.try_get::<_, Value>(i))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(Row::new(columns, values))
}

impl Store for PostgresStore {
    fn dialect(&self) -> Dialect {
        Dialect::PostgreSQL
    }

    fn execute(&mut self, sql: &str, args: &[Value]) -> Result<u64> {
        Ok(self.client.execute(sql, &to_params(args))?)
    }

    fn query(&mut self, sql: &str, args: &[Value]) -> Result<Vec<Row>> {
        self.client
            .query(sql, &to_params(args))?
            .iter()
            .map(read_row)
            .collect()
    }

    fn execute_named(&mut self, sql: &str, params: &Params) -> Result<u64> {
        let (sql, values) = resolve_named(sql, params)?;
        let args: Vec<&(dyn ToSql + Sync)> =
            values.into_iter().map(|v| v as &(dyn ToSql + Sync)).collect();
        Ok(self.client.execute(sql.as_str(), &args)?)
    }

    fn query_named(&mut self, sql: &str, params: &Params) -> Result<Vec<Row>> {
        let (sql, values) = resolve_named(sql, params)?;
        let args: Vec<&(dyn ToSql + Sync)> =
            values.into_iter().map(|v| v as &(dyn ToSql + Sync)).collect();
        self.client
            .query(sql.as_str(), &args)?
            .iter()
            .map(read_row)
            .collect()
    }
}
