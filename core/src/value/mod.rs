//! Owned column values
//!
//! [`Value`] is the driver-neutral form every parameter and every result
//! column passes through. The composite codecs encode into it and decode from
//! it; the driver glue in [`drivers`] maps it onto the native value types of
//! rusqlite and postgres.

mod drivers;

use uuid::Uuid;

use crate::DecodeError;

/// A single column value as written to or read from a store
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Integer(i64),
    Real(f64),
    Boolean(bool),
    Text(String),
    Blob(Vec<u8>),
}

impl Value {
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Integer(_) => ValueKind::Integer,
            Value::Real(_) => ValueKind::Real,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Text(_) => ValueKind::Text,
            Value::Blob(_) => ValueKind::Blob,
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Borrow the text payload, if any
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Tag of a [`Value`], reported by decode errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Integer,
    Real,
    Boolean,
    Text,
    Blob,
}

impl ValueKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Integer => "integer",
            ValueKind::Real => "real",
            ValueKind::Boolean => "boolean",
            ValueKind::Text => "text",
            ValueKind::Blob => "blob",
        }
    }
}

impl core::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

//------------------------------------------------------------------------------
// Host types into Value
//------------------------------------------------------------------------------

macro_rules! impl_from_for_value {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::$variant(value.into())
                }
            }
        )*
    };
}

impl_from_for_value! {
    i64 => Integer,
    i32 => Integer,
    i16 => Integer,
    u32 => Integer,
    f64 => Real,
    f32 => Real,
    bool => Boolean,
    String => Text,
    &str => Text,
    Vec<u8> => Blob,
    &[u8] => Blob,
}

impl From<Uuid> for Value {
    fn from(value: Uuid) -> Self {
        Value::Text(value.hyphenated().to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

//------------------------------------------------------------------------------
// Value into host types
//------------------------------------------------------------------------------

/// Conversion from a stored [`Value`] into a host type
pub trait FromValue: Sized {
    fn from_value(value: &Value) -> Result<Self, DecodeError>;
}

fn unsupported<T>(target: &'static str, value: &Value) -> Result<T, DecodeError> {
    Err(DecodeError::UnsupportedKind {
        target,
        found: value.kind(),
    })
}

impl FromValue for Value {
    fn from_value(value: &Value) -> Result<Self, DecodeError> {
        Ok(value.clone())
    }
}

impl FromValue for i64 {
    fn from_value(value: &Value) -> Result<Self, DecodeError> {
        match value {
            Value::Integer(i) => Ok(*i),
            Value::Boolean(b) => Ok(i64::from(*b)),
            other => unsupported("i64", other),
        }
    }
}

impl FromValue for i32 {
    fn from_value(value: &Value) -> Result<Self, DecodeError> {
        let wide = i64::from_value(value)?;
        i32::try_from(wide).map_err(|_| DecodeError::OutOfRange {
            target: "i32",
            value: wide,
        })
    }
}

impl FromValue for f64 {
    fn from_value(value: &Value) -> Result<Self, DecodeError> {
        match value {
            Value::Real(f) => Ok(*f),
            Value::Integer(i) => Ok(*i as f64),
            other => unsupported("f64", other),
        }
    }
}

// SQLite has no boolean storage class, booleans come back as 0/1 integers.
impl FromValue for bool {
    fn from_value(value: &Value) -> Result<Self, DecodeError> {
        match value {
            Value::Boolean(b) => Ok(*b),
            Value::Integer(i) => Ok(*i != 0),
            other => unsupported("bool", other),
        }
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Result<Self, DecodeError> {
        match value {
            Value::Text(s) => Ok(s.clone()),
            Value::Blob(b) => Ok(std::str::from_utf8(b)?.to_owned()),
            other => unsupported("String", other),
        }
    }
}

impl FromValue for Vec<u8> {
    fn from_value(value: &Value) -> Result<Self, DecodeError> {
        match value {
            Value::Blob(b) => Ok(b.clone()),
            Value::Text(s) => Ok(s.as_bytes().to_vec()),
            other => unsupported("Vec<u8>", other),
        }
    }
}

impl FromValue for Uuid {
    fn from_value(value: &Value) -> Result<Self, DecodeError> {
        match value {
            Value::Text(s) => Ok(Uuid::parse_str(s)?),
            Value::Blob(b) if b.len() == 16 => Ok(Uuid::from_slice(b)?),
            Value::Blob(b) => Ok(Uuid::try_parse_ascii(b)?),
            other => unsupported("Uuid", other),
        }
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: &Value) -> Result<Self, DecodeError> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_types_convert_into_values() {
        assert_eq!(Value::from(7_i32), Value::Integer(7));
        assert_eq!(Value::from("a"), Value::Text("a".into()));
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some(true)), Value::Boolean(true));
    }

    #[test]
    fn integers_read_back_as_booleans() {
        assert!(bool::from_value(&Value::Integer(1)).unwrap());
        assert!(!bool::from_value(&Value::Integer(0)).unwrap());
    }

    #[test]
    fn mismatched_kind_reports_what_was_found() {
        let err = i64::from_value(&Value::Text("x".into())).unwrap_err();
        assert_eq!(err.to_string(), "unsupported type: text for i64");
    }

    #[test]
    fn narrowing_checks_range() {
        let err = i32::from_value(&Value::Integer(i64::MAX)).unwrap_err();
        assert!(matches!(err, DecodeError::OutOfRange { target: "i32", .. }));
    }

    #[test]
    fn uuid_reads_from_text_and_blob() {
        let id = Uuid::new_v4();
        assert_eq!(Uuid::from_value(&Value::from(id)).unwrap(), id);
        assert_eq!(
            Uuid::from_value(&Value::Blob(id.as_bytes().to_vec())).unwrap(),
            id
        );
    }

    #[test]
    fn null_reads_as_none() {
        assert_eq!(Option::<String>::from_value(&Value::Null).unwrap(), None);
        assert_eq!(
            Option::<String>::from_value(&Value::Text("x".into())).unwrap(),
            Some("x".to_owned())
        );
    }
}
