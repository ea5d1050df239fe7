//! Records, rows and named parameters
//!
//! A [`Record`] declares its columns once ([`Columns`]), binds its field
//! values by column name ([`Record::bind`]) and rebuilds itself from a result
//! [`Row`] ([`FromRow`]). The generated statements only use `:column`
//! placeholders, so binding a record is enough to run any of them.

use std::borrow::Cow;

use boilerplate_core::{Columns, CompositeValue, FromValue, Value};

use crate::{Result, StoreError};

/// Values for named `:name` placeholders, keyed by column name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params(Vec<(Cow<'static, str>, Value)>);

impl Params {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Add a value, builder style
    #[must_use]
    pub fn with(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<Value>) -> Self {
        self.push(name, value);
        self
    }

    /// Add a value, replacing any earlier value bound to the same name
    pub fn push(&mut self, name: impl Into<Cow<'static, str>>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.0.push((name, value)),
        }
    }

    /// Value bound to `name`, without the leading `:`
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(n, v)| (n.as_ref(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<N: Into<Cow<'static, str>>, V: Into<Value>> FromIterator<(N, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (name, value) in iter {
            params.push(name, value);
        }
        params
    }
}

/// One result row, columns in the order the statement returned them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    columns: Vec<String>,
    values: Vec<Value>,
}

impl Row {
    #[must_use]
    pub fn new(columns: Vec<String>, values: Vec<Value>) -> Self {
        debug_assert_eq!(columns.len(), values.len());
        Self { columns, values }
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Raw value of `column`
    pub fn value(&self, column: &str) -> Result<&Value> {
        self.columns
            .iter()
            .position(|c| c == column)
            .and_then(|i| self.values.get(i))
            .ok_or_else(|| StoreError::MissingColumn(column.to_owned()))
    }

    /// Value of `column` converted to `T`
    pub fn get<T: FromValue>(&self, column: &str) -> Result<T> {
        T::from_value(self.value(column)?).map_err(|source| StoreError::Decode {
            column: column.to_owned(),
            source,
        })
    }

    /// Value of a list or JSON column decoded with its codec.
    ///
    /// `None` when the column holds the absent representation. A NULL
    /// column is treated as absent too.
    pub fn decode<T: CompositeValue>(&self, column: &str) -> Result<Option<T>> {
        let value = self.value(column)?;
        if value.is_null() {
            return Ok(None);
        }
        T::decode(value).map_err(|source| StoreError::Decode {
            column: column.to_owned(),
            source,
        })
    }
}

/// Build a value from a result row
pub trait FromRow: Sized {
    fn from_row(row: &Row) -> Result<Self>;
}

impl FromRow for Row {
    fn from_row(row: &Row) -> Result<Self> {
        Ok(row.clone())
    }
}

/// A type persisted as one row of a table
///
/// ```
/// use boilerplate::{ColumnDef, Columns, FromRow, Params, Record, Result, Row, StringList};
/// use boilerplate::CompositeValue;
///
/// struct Post {
///     id: i64,
///     title: String,
///     tags: Option<StringList>,
/// }
///
/// impl Columns for Post {
///     const COLUMNS: &'static [ColumnDef] = &[
///         ColumnDef::new("id", "BIGSERIAL NOT NULL PRIMARY KEY"),
///         ColumnDef::new("title", "TEXT NOT NULL"),
///         ColumnDef::new("tags", "TEXT[] NOT NULL"),
///     ];
/// }
///
/// impl FromRow for Post {
///     fn from_row(row: &Row) -> Result<Self> {
///         Ok(Self {
///             id: row.get("id")?,
///             title: row.get("title")?,
///             tags: row.decode("tags")?,
///         })
///     }
/// }
///
/// impl Record for Post {
///     fn bind(&self) -> Params {
///         Params::new()
///             .with("id", self.id)
///             .with("title", self.title.as_str())
///             .with("tags", StringList::encode_option(self.tags.as_ref()))
///     }
/// }
/// ```
pub trait Record: Columns + FromRow {
    /// Field values keyed by column name
    fn bind(&self) -> Params;
}
