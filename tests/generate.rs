use boilerplate::prelude::*;
use boilerplate::{GenerateError, generate};

struct T1;

impl Columns for T1 {
    const COLUMNS: &'static [ColumnDef] = &[
        ColumnDef::new("id", "BIGSERIAL NOT NULL PRIMARY KEY"),
        ColumnDef::new("field1", "TEXT NOT NULL"),
        ColumnDef::new("field2", "BIGSERIAL NOT NULL"),
        ColumnDef::new("field3", "BOOLEAN NOT NULL"),
        ColumnDef::new("field4", "UUID"),
    ];
}

fn t1(dialect: Dialect) -> GeneratedQueries {
    GenerateOptions::for_record::<T1>("t1")
        .auto_generated(&["id", "field2"])
        .primary_keys(&["id"])
        .dialect(dialect)
        .generate()
        .unwrap()
}

const INSERT: &str = "INSERT INTO t1 (field1, field3, field4) VALUES (:field1, :field3, :field4) RETURNING *";
const UPDATE: &str =
    "UPDATE t1 SET field1 = :field1, field3 = :field3, field4 = :field4 WHERE id = :id RETURNING *";
const UPSERT: &str = "INSERT INTO t1 (field1, field3, field4) VALUES (:field1, :field3, :field4) ON CONFLICT (id) DO UPDATE SET field1 = EXCLUDED.field1, field3 = EXCLUDED.field3, field4 = EXCLUDED.field4 RETURNING *";
const DELETE: &str = "DELETE FROM t1 WHERE id = :id";

#[test]
fn sqlite_statements() {
    let queries = t1(Dialect::SQLite);
    assert_eq!(
        queries.create_table,
        "CREATE TABLE IF NOT EXISTS t1 (id INTEGER PRIMARY KEY AUTOINCREMENT, field1 TEXT NOT NULL, field2 INTEGER AUTOINCREMENT, field3 BOOLEAN NOT NULL, field4 TEXT)"
    );
    assert_eq!(queries.drop_table, "DROP TABLE IF EXISTS t1");
    assert_eq!(queries.select, "SELECT * FROM t1");
    assert_eq!(queries.insert, INSERT);
    assert_eq!(queries.update, UPDATE);
    assert_eq!(queries.upsert, UPSERT);
    assert_eq!(queries.delete, DELETE);
}

#[test]
fn postgres_statements() {
    let queries = t1(Dialect::PostgreSQL);
    assert_eq!(
        queries.create_table,
        "CREATE TABLE IF NOT EXISTS t1 (id BIGSERIAL NOT NULL PRIMARY KEY, field1 TEXT NOT NULL, field2 BIGSERIAL NOT NULL, field3 BOOLEAN NOT NULL, field4 UUID)"
    );
    assert_eq!(queries.drop_table, "DROP TABLE IF EXISTS t1");
    assert_eq!(queries.select, "SELECT * FROM t1");
    assert_eq!(queries.insert, INSERT);
    assert_eq!(queries.update, UPDATE);
    assert_eq!(queries.upsert, UPSERT);
    assert_eq!(queries.delete, DELETE);
}

#[test]
fn dialects_only_differ_in_create_table() {
    let sqlite = t1(Dialect::SQLite);
    let postgres = t1(Dialect::PostgreSQL);
    assert_ne!(sqlite.create_table, postgres.create_table);
    assert_eq!(
        GeneratedQueries {
            create_table: String::new(),
            ..sqlite
        },
        GeneratedQueries {
            create_table: String::new(),
            ..postgres
        }
    );
}

#[test]
fn generation_is_deterministic() {
    for dialect in [Dialect::SQLite, Dialect::PostgreSQL] {
        assert_eq!(t1(dialect), t1(dialect));
    }
}

#[test]
fn missing_primary_key_is_rejected() {
    let options = GenerateOptions::for_record::<T1>("t1").auto_generated(&["id"]);
    assert_eq!(
        generate(&options),
        Err(GenerateError::MissingPrimaryKey {
            table: "t1".to_owned()
        })
    );
}

#[test]
fn typed_columns_render_like_raw_declarations() {
    const TYPED: &[ColumnDef] = &[
        ColumnDef::typed("id", ColumnType::BigSerial),
        ColumnDef::typed("tags", ColumnType::TextArray),
        ColumnDef::typed("meta", ColumnType::Json),
    ];
    let queries = GenerateOptions::new("typed", TYPED)
        .primary_keys(&["id"])
        .dialect(Dialect::SQLite)
        .generate()
        .unwrap();
    assert_eq!(
        queries.create_table,
        "CREATE TABLE IF NOT EXISTS typed (id INTEGER AUTOINCREMENT, tags TEXT[], meta JSONB)"
    );
}
