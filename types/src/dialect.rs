//! Target database dialect
//!
//! The dialect drives the per-dialect column type rewriting in
//! [`crate::rewrite_sql_type`] and selects the driver the connection opener
//! uses.

/// SQL dialect of the target store
///
/// # Examples
///
/// ```
/// use boilerplate_types::Dialect;
///
/// assert_eq!(Dialect::parse("pg"), Some(Dialect::PostgreSQL));
/// assert_eq!(Dialect::SQLite.as_str(), "sqlite");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Dialect {
    /// SQLite - no `SERIAL`/`UUID` types, uses `AUTOINCREMENT` and `TEXT`
    #[default]
    SQLite,

    /// PostgreSQL - native `SERIAL`/`BIGSERIAL` and `UUID` types
    #[cfg_attr(
        feature = "serde",
        serde(rename = "postgres", alias = "postgresql", alias = "pg")
    )]
    PostgreSQL,
}

impl Dialect {
    /// Parse a dialect from a string (case-insensitive)
    ///
    /// Supports common aliases:
    /// - SQLite: `"sqlite"`, `"sqlite3"`
    /// - PostgreSQL: `"postgres"`, `"postgresql"`, `"pg"`
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("sqlite") || s.eq_ignore_ascii_case("sqlite3") {
            Some(Dialect::SQLite)
        } else if s.eq_ignore_ascii_case("postgres")
            || s.eq_ignore_ascii_case("postgresql")
            || s.eq_ignore_ascii_case("pg")
        {
            Some(Dialect::PostgreSQL)
        } else {
            None
        }
    }

    /// Driver tag for this dialect
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Dialect::SQLite => "sqlite",
            Dialect::PostgreSQL => "postgres",
        }
    }
}

impl core::fmt::Display for Dialect {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for Dialect {
    type Err = DialectParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dialect::parse(s).ok_or_else(|| DialectParseError(s.to_owned()))
    }
}

/// Error returned when parsing an unknown dialect string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialectParseError(pub String);

impl core::fmt::Display for DialectParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "unknown dialect: {:?}", self.0)
    }
}

impl std::error::Error for DialectParseError {}
