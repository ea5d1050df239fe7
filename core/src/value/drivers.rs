//! Database driver implementations for Value
//!
//! Contains implementations for rusqlite and postgres.

#[cfg(any(feature = "rusqlite", feature = "postgres"))]
use super::Value;

//------------------------------------------------------------------------------
// rusqlite implementations
//------------------------------------------------------------------------------

#[cfg(feature = "rusqlite")]
impl rusqlite::ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<rusqlite::types::ToSqlOutput<'_>> {
        use rusqlite::types::{ToSqlOutput, Value as SqliteValue, ValueRef};

        Ok(match self {
            Value::Null => ToSqlOutput::Owned(SqliteValue::Null),
            Value::Integer(i) => ToSqlOutput::Owned(SqliteValue::Integer(*i)),
            Value::Real(f) => ToSqlOutput::Owned(SqliteValue::Real(*f)),
            Value::Boolean(b) => ToSqlOutput::Owned(SqliteValue::Integer(i64::from(*b))),
            Value::Text(s) => ToSqlOutput::Borrowed(ValueRef::Text(s.as_bytes())),
            Value::Blob(b) => ToSqlOutput::Borrowed(ValueRef::Blob(b)),
        })
    }
}

#[cfg(feature = "rusqlite")]
impl rusqlite::types::FromSql for Value {
    fn column_result(
        value: rusqlite::types::ValueRef<'_>,
    ) -> rusqlite::types::FromSqlResult<Self> {
        Ok(Value::from(value))
    }
}

#[cfg(feature = "rusqlite")]
impl From<rusqlite::types::ValueRef<'_>> for Value {
    fn from(value: rusqlite::types::ValueRef<'_>) -> Self {
        use rusqlite::types::ValueRef;

        match value {
            ValueRef::Null => Value::Null,
            ValueRef::Integer(i) => Value::Integer(i),
            ValueRef::Real(r) => Value::Real(r),
            ValueRef::Text(items) => Value::Text(String::from_utf8_lossy(items).into_owned()),
            ValueRef::Blob(items) => Value::Blob(items.to_vec()),
        }
    }
}

//------------------------------------------------------------------------------
// postgres implementations
//------------------------------------------------------------------------------

#[cfg(feature = "postgres")]
mod pg {
    use std::error::Error;
    use std::fmt::Display;

    use bytes::BytesMut;
    use postgres_types::{FromSql, IsNull, ToSql, Type, to_sql_checked};

    use super::Value;

    type BoxError = Box<dyn Error + Sync + Send>;

    // Text payloads are sent in text format and parsed by the server with
    // the parameter's input function, so array literals (`{1,2}`), JSON
    // documents and UUID strings bind to their native column types.
    impl ToSql for Value {
        fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, BoxError> {
            match self {
                Value::Null => Ok(IsNull::Yes),
                Value::Integer(i) => {
                    if *ty == Type::INT2 {
                        i16::try_from(*i)?.to_sql(ty, out)
                    } else if *ty == Type::INT4 {
                        i32::try_from(*i)?.to_sql(ty, out)
                    } else if *ty == Type::FLOAT8 {
                        (*i as f64).to_sql(ty, out)
                    } else if *ty == Type::BOOL {
                        (*i != 0).to_sql(ty, out)
                    } else {
                        i.to_sql(ty, out)
                    }
                }
                Value::Real(f) => {
                    if *ty == Type::FLOAT4 {
                        (*f as f32).to_sql(ty, out)
                    } else {
                        f.to_sql(ty, out)
                    }
                }
                Value::Boolean(b) => b.to_sql(ty, out),
                Value::Text(s) => {
                    out.extend_from_slice(s.as_bytes());
                    Ok(IsNull::No)
                }
                Value::Blob(b) => b.as_slice().to_sql(ty, out),
            }
        }

        fn accepts(_ty: &Type) -> bool {
            true
        }

        fn encode_format(&self, _ty: &Type) -> postgres_types::Format {
            match self {
                Value::Text(_) => postgres_types::Format::Text,
                _ => postgres_types::Format::Binary,
            }
        }

        to_sql_checked!();
    }

    // Arrays are rendered back into the `{a,b,c}` literal form so the list
    // codecs see the same text on both dialects.
    fn array_literal<T: Display>(items: Vec<Option<T>>) -> String {
        let items: Vec<String> = items
            .into_iter()
            .map(|item| item.map_or_else(|| "NULL".to_owned(), |v| v.to_string()))
            .collect();
        format!("{{{}}}", items.join(","))
    }

    impl<'a> FromSql<'a> for Value {
        fn from_sql(ty: &Type, raw: &'a [u8]) -> Result<Self, BoxError> {
            let value = match ty {
                t if *t == Type::BOOL => Value::Boolean(bool::from_sql(ty, raw)?),
                t if *t == Type::INT2 => Value::Integer(i16::from_sql(ty, raw)?.into()),
                t if *t == Type::INT4 => Value::Integer(i32::from_sql(ty, raw)?.into()),
                t if *t == Type::INT8 => Value::Integer(i64::from_sql(ty, raw)?),
                t if *t == Type::FLOAT4 => Value::Real(f32::from_sql(ty, raw)?.into()),
                t if *t == Type::FLOAT8 => Value::Real(f64::from_sql(ty, raw)?),
                t if *t == Type::BYTEA => Value::Blob(raw.to_vec()),
                t if *t == Type::UUID => {
                    Value::Text(uuid::Uuid::from_sql(ty, raw)?.hyphenated().to_string())
                }
                t if *t == Type::JSON || *t == Type::JSONB => {
                    Value::Text(serde_json::Value::from_sql(ty, raw)?.to_string())
                }
                t if *t == Type::INT2_ARRAY => {
                    Value::Text(array_literal(Vec::<Option<i16>>::from_sql(ty, raw)?))
                }
                t if *t == Type::INT4_ARRAY => {
                    Value::Text(array_literal(Vec::<Option<i32>>::from_sql(ty, raw)?))
                }
                t if *t == Type::INT8_ARRAY => {
                    Value::Text(array_literal(Vec::<Option<i64>>::from_sql(ty, raw)?))
                }
                t if *t == Type::TEXT_ARRAY || *t == Type::VARCHAR_ARRAY => {
                    Value::Text(array_literal(Vec::<Option<String>>::from_sql(ty, raw)?))
                }
                t if <&str as FromSql>::accepts(t) => {
                    Value::Text(<&str>::from_sql(ty, raw)?.to_owned())
                }
                other => return Err(format!("unsupported postgres type {other}").into()),
            };
            Ok(value)
        }

        fn from_sql_null(_ty: &Type) -> Result<Self, BoxError> {
            Ok(Value::Null)
        }

        fn accepts(_ty: &Type) -> bool {
            true
        }
    }

}
