//! Canonical CRUD statement generation
//!
//! Given a table's columns and which of them are primary keys or filled in
//! by the store, [`generate`] derives the statements an application needs to
//! persist records of that table. Placeholders are named after the column
//! (`:name`) so a record can be bound directly.

use boilerplate_types::{Column, ColumnDef, Dialect, rewrite_sql_type};

use crate::GenerateError;

/// Static column list of a record type, in field declaration order
pub trait Columns {
    const COLUMNS: &'static [ColumnDef];
}

/// Options for [`generate`]
///
/// # Examples
///
/// ```
/// use boilerplate_core::{ColumnDef, Dialect, GenerateOptions};
///
/// const COLUMNS: &[ColumnDef] = &[
///     ColumnDef::new("id", "BIGSERIAL NOT NULL PRIMARY KEY"),
///     ColumnDef::new("name", "TEXT NOT NULL"),
/// ];
///
/// let queries = GenerateOptions::new("users", COLUMNS)
///     .auto_generated(&["id"])
///     .primary_keys(&["id"])
///     .dialect(Dialect::SQLite)
///     .generate()
///     .unwrap();
///
/// assert_eq!(
///     queries.insert,
///     "INSERT INTO users (name) VALUES (:name) RETURNING *"
/// );
/// ```
#[derive(Clone, Copy, Debug)]
pub struct GenerateOptions<'a> {
    pub table_name: &'a str,
    pub columns: &'a [ColumnDef],
    /// Columns the store fills in on insert (e.g. `BIGSERIAL`), left out of
    /// INSERT and UPSERT value lists and of UPDATE's SET clause
    pub auto_generated: &'a [&'a str],
    /// Columns used in WHERE clauses. The first one is the upsert conflict
    /// target.
    pub primary_keys: &'a [&'a str],
    pub dialect: Dialect,
}

impl<'a> GenerateOptions<'a> {
    #[must_use]
    pub const fn new(table_name: &'a str, columns: &'a [ColumnDef]) -> Self {
        Self {
            table_name,
            columns,
            auto_generated: &[],
            primary_keys: &[],
            dialect: Dialect::SQLite,
        }
    }

    /// Options for a record type's declared columns
    #[must_use]
    pub const fn for_record<R: Columns>(table_name: &'a str) -> Self {
        Self::new(table_name, R::COLUMNS)
    }

    #[must_use]
    pub const fn auto_generated(mut self, columns: &'a [&'a str]) -> Self {
        self.auto_generated = columns;
        self
    }

    #[must_use]
    pub const fn primary_keys(mut self, columns: &'a [&'a str]) -> Self {
        self.primary_keys = columns;
        self
    }

    #[must_use]
    pub const fn dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    pub fn generate(&self) -> Result<GeneratedQueries, GenerateError> {
        generate(self)
    }

    fn is_primary_key(&self, name: &str) -> bool {
        self.primary_keys.contains(&name)
    }

    fn is_auto_generated(&self, name: &str) -> bool {
        self.auto_generated.contains(&name)
    }
}

/// The statements generated for one table
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct GeneratedQueries {
    pub create_table: String,
    pub drop_table: String,
    /// `SELECT *` without a WHERE clause, callers append their own predicates
    pub select: String,
    pub insert: String,
    pub update: String,
    pub upsert: String,
    pub delete: String,
}

/// Generate the statement set for a table.
///
/// Column types are upper-cased and rewritten for the dialect (see
/// [`rewrite_sql_type`]); columns with an empty or `-` name or type are
/// skipped. Every statement lists columns in declaration order.
///
/// Fails with [`GenerateError::MissingPrimaryKey`] when no primary key is
/// given, before any statement is built.
pub fn generate(opts: &GenerateOptions<'_>) -> Result<GeneratedQueries, GenerateError> {
    let Some(conflict_target) = opts.primary_keys.first() else {
        return Err(GenerateError::MissingPrimaryKey {
            table: opts.table_name.to_owned(),
        });
    };
    let table = opts.table_name;

    let columns: Vec<Column> = Column::from_defs(opts.columns)
        .into_iter()
        .map(|mut column| {
            let sql_type = rewrite_sql_type(opts.dialect, &column.sql_type.to_uppercase());
            column.sql_type = sql_type.into();
            column
        })
        .filter(Column::is_persisted)
        .collect();

    // CREATE TABLE
    let definitions: Vec<String> = columns
        .iter()
        .map(|c| format!("{} {}", c.name(), c.sql_type()))
        .collect();
    let create_table = format!(
        "CREATE TABLE IF NOT EXISTS {table} ({})",
        definitions.join(", ")
    );

    // DROP TABLE
    let drop_table = format!("DROP TABLE IF EXISTS {table}");

    // SELECT
    let select = format!("SELECT * FROM {table}");

    // INSERT
    let (inserts, values): (Vec<&str>, Vec<String>) = columns
        .iter()
        .filter(|c| !opts.is_auto_generated(c.name()))
        .map(|c| (c.name(), format!(":{}", c.name())))
        .unzip();
    let inserts = inserts.join(", ");
    let values = values.join(", ");
    let insert = format!("INSERT INTO {table} ({inserts}) VALUES ({values}) RETURNING *");

    // UPDATE
    let mut sets = Vec::new();
    let mut wheres = Vec::new();
    for c in &columns {
        if opts.is_primary_key(c.name()) {
            wheres.push(format!("{0} = :{0}", c.name()));
            continue;
        }
        if opts.is_auto_generated(c.name()) {
            continue;
        }
        sets.push(format!("{0} = :{0}", c.name()));
    }
    let wheres = wheres.join(" AND ");
    let update = format!(
        "UPDATE {table} SET {} WHERE {wheres} RETURNING *",
        sets.join(", ")
    );

    // UPSERT
    let upserts: Vec<String> = columns
        .iter()
        .filter(|c| !opts.is_auto_generated(c.name()) && !opts.is_primary_key(c.name()))
        .map(|c| format!("{0} = EXCLUDED.{0}", c.name()))
        .collect();
    let upsert = format!(
        "INSERT INTO {table} ({inserts}) VALUES ({values}) ON CONFLICT ({conflict_target}) DO UPDATE SET {} RETURNING *",
        upserts.join(", ")
    );

    // DELETE
    let delete = format!("DELETE FROM {table} WHERE {wheres}");

    Ok(GeneratedQueries {
        create_table,
        drop_table,
        select,
        insert,
        update,
        upsert,
        delete,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use boilerplate_types::ColumnType;

    const T1: &[ColumnDef] = &[
        ColumnDef::new("id", "BIGSERIAL NOT NULL PRIMARY KEY"),
        ColumnDef::new("field1", "TEXT NOT NULL"),
        ColumnDef::new("field2", "BIGSERIAL NOT NULL"),
        ColumnDef::new("field3", "BOOLEAN NOT NULL"),
        ColumnDef::new("field4", "UUID"),
    ];

    fn t1(dialect: Dialect) -> GeneratedQueries {
        GenerateOptions::new("t1", T1)
            .auto_generated(&["id", "field2"])
            .primary_keys(&["id"])
            .dialect(dialect)
            .generate()
            .unwrap()
    }

    #[test]
    fn missing_primary_key_is_rejected() {
        let err = GenerateOptions::new("t1", T1)
            .auto_generated(&["id"])
            .generate()
            .unwrap_err();
        assert_eq!(
            err,
            GenerateError::MissingPrimaryKey {
                table: "t1".to_owned()
            }
        );
        assert_eq!(err.to_string(), "No primary key specified for table: t1");
    }

    #[test]
    fn generation_is_deterministic() {
        assert_eq!(t1(Dialect::SQLite), t1(Dialect::SQLite));
        assert_eq!(t1(Dialect::PostgreSQL), t1(Dialect::PostgreSQL));
    }

    #[test]
    fn lowercase_types_are_normalized() {
        const COLUMNS: &[ColumnDef] = &[
            ColumnDef::new("id", "bigserial primary key"),
            ColumnDef::new("token", "uuid"),
        ];
        let queries = GenerateOptions::new("t", COLUMNS)
            .primary_keys(&["id"])
            .generate()
            .unwrap();
        assert_eq!(
            queries.create_table,
            "CREATE TABLE IF NOT EXISTS t (id INTEGER PRIMARY KEY AUTOINCREMENT, token TEXT)"
        );
    }

    #[test]
    fn skipped_columns_are_left_out_everywhere() {
        const COLUMNS: &[ColumnDef] = &[
            ColumnDef::new("id", "BIGSERIAL PRIMARY KEY"),
            ColumnDef::skipped("cache"),
            ColumnDef::new("", "TEXT"),
            ColumnDef::new("note", ""),
            ColumnDef::new("name", "TEXT"),
        ];
        let queries = GenerateOptions::new("t", COLUMNS)
            .auto_generated(&["id"])
            .primary_keys(&["id"])
            .dialect(Dialect::PostgreSQL)
            .generate()
            .unwrap();
        assert_eq!(
            queries.create_table,
            "CREATE TABLE IF NOT EXISTS t (id BIGSERIAL PRIMARY KEY, name TEXT)"
        );
        assert_eq!(
            queries.insert,
            "INSERT INTO t (name) VALUES (:name) RETURNING *"
        );
    }

    #[test]
    fn auto_generated_primary_key_stays_in_where() {
        let queries = t1(Dialect::SQLite);
        assert!(queries.update.ends_with("WHERE id = :id RETURNING *"));
        assert!(!queries.update.contains("SET id"));
    }

    #[test]
    fn composite_keys_join_with_and_and_conflict_on_first() {
        const COLUMNS: &[ColumnDef] = &[
            ColumnDef::typed("tenant", ColumnType::Text),
            ColumnDef::typed("slug", ColumnType::Text),
            ColumnDef::typed("tags", ColumnType::TextArray),
            ColumnDef::typed("scores", ColumnType::IntArray),
            ColumnDef::typed("meta", ColumnType::Json),
        ];
        let queries = GenerateOptions::new("pages", COLUMNS)
            .primary_keys(&["tenant", "slug"])
            .dialect(Dialect::PostgreSQL)
            .generate()
            .unwrap();

        assert_eq!(
            queries.create_table,
            "CREATE TABLE IF NOT EXISTS pages (tenant TEXT, slug TEXT, tags TEXT[], scores INT[], meta JSONB)"
        );
        assert_eq!(
            queries.update,
            "UPDATE pages SET tags = :tags, scores = :scores, meta = :meta WHERE tenant = :tenant AND slug = :slug RETURNING *"
        );
        assert_eq!(
            queries.upsert,
            "INSERT INTO pages (tenant, slug, tags, scores, meta) VALUES (:tenant, :slug, :tags, :scores, :meta) ON CONFLICT (tenant) DO UPDATE SET tags = EXCLUDED.tags, scores = EXCLUDED.scores, meta = EXCLUDED.meta RETURNING *"
        );
        assert_eq!(
            queries.delete,
            "DELETE FROM pages WHERE tenant = :tenant AND slug = :slug"
        );
    }

    struct Account;

    impl Columns for Account {
        const COLUMNS: &'static [ColumnDef] = &[
            ColumnDef::typed("id", ColumnType::Serial),
            ColumnDef::typed("email", ColumnType::Text),
        ];
    }

    #[test]
    fn options_from_record_columns() {
        let queries = GenerateOptions::for_record::<Account>("accounts")
            .auto_generated(&["id"])
            .primary_keys(&["id"])
            .generate()
            .unwrap();
        assert_eq!(
            queries.create_table,
            "CREATE TABLE IF NOT EXISTS accounts (id INTEGER AUTOINCREMENT, email TEXT)"
        );
        assert_eq!(queries.select, "SELECT * FROM accounts");
        assert_eq!(queries.drop_table, "DROP TABLE IF EXISTS accounts");
    }
}
