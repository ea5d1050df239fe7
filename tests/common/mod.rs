#![allow(dead_code)]

use boilerplate::prelude::*;
use boilerplate::{GeneratedQueries, Result, Store};

/// Route TRACE events from the execution helpers to the test output
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::TRACE)
        .with_test_writer()
        .try_init();
}

#[cfg(feature = "sqlite")]
pub fn setup_db() -> boilerplate::SqliteStore {
    init_tracing();
    boilerplate::SqliteStore::open_in_memory().expect("open in-memory sqlite")
}

pub fn queries<R: Columns>(table: &str, dialect: Dialect) -> GeneratedQueries {
    GenerateOptions::for_record::<R>(table)
        .auto_generated(&["id"])
        .primary_keys(&["id"])
        .dialect(dialect)
        .generate()
        .expect("primary key is set")
}

/// Create the table, dropping any leftover from an earlier run
pub fn create<S: Store + ?Sized>(store: &mut S, queries: &GeneratedQueries) {
    boilerplate::exec(store, &queries.drop_table, &[]).unwrap();
    boilerplate::exec(store, &queries.create_table, &[]).unwrap();
}

pub fn by_id(queries: &GeneratedQueries) -> String {
    format!("{} WHERE id = $1", queries.select)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StringListTable {
    pub id: i64,
    pub string_list: Option<StringList>,
}

impl Columns for StringListTable {
    const COLUMNS: &'static [ColumnDef] = &[
        ColumnDef::new("id", "BIGSERIAL NOT NULL PRIMARY KEY"),
        ColumnDef::new("string_list", "TEXT[] NOT NULL"),
    ];
}

impl FromRow for StringListTable {
    fn from_row(row: &Row) -> Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            string_list: row.decode("string_list")?,
        })
    }
}

impl Record for StringListTable {
    fn bind(&self) -> Params {
        Params::new()
            .with("id", self.id)
            .with("string_list", StringList::encode_option(self.string_list.as_ref()))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntListTable {
    pub id: i64,
    pub int_list: Option<IntList>,
}

impl Columns for IntListTable {
    const COLUMNS: &'static [ColumnDef] = &[
        ColumnDef::new("id", "BIGSERIAL NOT NULL PRIMARY KEY"),
        ColumnDef::new("int_list", "INT[] NOT NULL"),
    ];
}

impl FromRow for IntListTable {
    fn from_row(row: &Row) -> Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            int_list: row.decode("int_list")?,
        })
    }
}

impl Record for IntListTable {
    fn bind(&self) -> Params {
        Params::new()
            .with("id", self.id)
            .with("int_list", IntList::encode_option(self.int_list.as_ref()))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonObjectTable {
    pub id: i64,
    pub json_object: Option<JsonObject>,
}

impl Columns for JsonObjectTable {
    const COLUMNS: &'static [ColumnDef] = &[
        ColumnDef::new("id", "BIGSERIAL NOT NULL PRIMARY KEY"),
        ColumnDef::new("json_object", "JSONB NOT NULL"),
    ];
}

impl FromRow for JsonObjectTable {
    fn from_row(row: &Row) -> Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            json_object: row.decode("json_object")?,
        })
    }
}

impl Record for JsonObjectTable {
    fn bind(&self) -> Params {
        Params::new()
            .with("id", self.id)
            .with("json_object", JsonObject::encode_option(self.json_object.as_ref()))
    }
}

/// Keyed by a caller-chosen id so upserts can conflict
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Account {
    pub id: i64,
    pub name: String,
    pub active: bool,
}

impl Columns for Account {
    const COLUMNS: &'static [ColumnDef] = &[
        ColumnDef::new("id", "BIGINT NOT NULL PRIMARY KEY"),
        ColumnDef::new("name", "TEXT NOT NULL"),
        ColumnDef::new("active", "BOOLEAN NOT NULL"),
        ColumnDef::skipped("cached_label"),
    ];
}

impl FromRow for Account {
    fn from_row(row: &Row) -> Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            name: row.get("name")?,
            active: row.get("active")?,
        })
    }
}

impl Record for Account {
    fn bind(&self) -> Params {
        Params::new()
            .with("id", self.id)
            .with("name", self.name.as_str())
            .with("active", self.active)
    }
}

pub fn account_queries(dialect: Dialect) -> GeneratedQueries {
    GenerateOptions::for_record::<Account>("accounts")
        .primary_keys(&["id"])
        .dialect(dialect)
        .generate()
        .expect("primary key is set")
}
