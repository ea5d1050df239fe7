//! Column descriptors
//!
//! This module provides two complementary types:
//! - [`ColumnDef`] - A const-friendly definition used to declare a record's
//!   columns at compile time
//! - [`Column`] - A runtime descriptor carrying the ordinal position

use std::borrow::Cow;

use crate::ColumnType;

/// Marker used for fields that are not persisted
pub const SKIP: &str = "-";

/// Const-friendly column definition.
///
/// A record type lists its columns once, in declaration order:
///
/// ```
/// use boilerplate_types::{ColumnDef, ColumnType};
///
/// const COLUMNS: &[ColumnDef] = &[
///     ColumnDef::new("id", "BIGSERIAL NOT NULL PRIMARY KEY"),
///     ColumnDef::new("name", "TEXT NOT NULL"),
///     ColumnDef::typed("tags", ColumnType::TextArray),
///     ColumnDef::skipped("cached_total"),
/// ];
///
/// assert_eq!(COLUMNS.iter().filter(|c| c.is_persisted()).count(), 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ColumnDef {
    /// Column name
    pub name: &'static str,
    /// Raw, dialect-neutral storage type (e.g. `"BIGSERIAL NOT NULL PRIMARY KEY"`)
    pub sql_type: &'static str,
}

impl ColumnDef {
    #[must_use]
    pub const fn new(name: &'static str, sql_type: &'static str) -> Self {
        Self { name, sql_type }
    }

    /// Column declared through a type intent
    #[must_use]
    pub const fn typed(name: &'static str, column_type: ColumnType) -> Self {
        Self {
            name,
            sql_type: column_type.as_raw(),
        }
    }

    /// A field that exists on the record but is never persisted
    #[must_use]
    pub const fn skipped(name: &'static str) -> Self {
        Self {
            name,
            sql_type: SKIP,
        }
    }

    /// Fields with an empty or `-` name or type are not persisted
    #[must_use]
    pub fn is_persisted(&self) -> bool {
        is_persisted(self.name, self.sql_type)
    }

    /// Convert to a runtime descriptor at `ordinal`
    #[must_use]
    pub const fn into_column(self, ordinal: usize) -> Column {
        Column {
            name: Cow::Borrowed(self.name),
            sql_type: Cow::Borrowed(self.sql_type),
            ordinal,
        }
    }
}

/// Runtime column descriptor
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Column {
    pub name: Cow<'static, str>,
    pub sql_type: Cow<'static, str>,
    /// Position in the record's declaration order, skipped fields included
    pub ordinal: usize,
}

impl Column {
    /// Build runtime descriptors from definitions, numbering them in order
    #[must_use]
    pub fn from_defs(defs: &[ColumnDef]) -> Vec<Column> {
        defs.iter()
            .enumerate()
            .map(|(ordinal, def)| def.into_column(ordinal))
            .collect()
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn sql_type(&self) -> &str {
        &self.sql_type
    }

    /// See [`ColumnDef::is_persisted`]
    #[must_use]
    pub fn is_persisted(&self) -> bool {
        is_persisted(&self.name, &self.sql_type)
    }
}

fn is_persisted(name: &str, sql_type: &str) -> bool {
    !(name.is_empty() || sql_type.is_empty() || name == SKIP || sql_type == SKIP)
}
