use std::ops::{Deref, DerefMut};

use super::{CompositeValue, list_body};
use crate::{DecodeError, Value};

/// Ordered list of integers stored as an array literal, e.g. `{1,2,3}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct IntList(pub Vec<i64>);

impl IntList {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<i64> {
        self.0
    }
}

impl CompositeValue for IntList {
    const TARGET: &'static str = "IntList";
    const ABSENT: &'static str = "{}";

    fn encode(&self) -> Value {
        let items: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        Value::Text(format!("{{{}}}", items.join(",")))
    }

    fn decode(src: &Value) -> Result<Option<Self>, DecodeError> {
        let Some(body) = list_body(Self::TARGET, src)? else {
            return Ok(None);
        };
        let items = body
            .split(',')
            .map(|token| {
                token
                    .parse::<i64>()
                    .map_err(|source| DecodeError::InvalidInteger {
                        token: token.to_owned(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Some(Self(items)))
    }
}

impl Deref for IntList {
    type Target = Vec<i64>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for IntList {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Vec<i64>> for IntList {
    fn from(value: Vec<i64>) -> Self {
        Self(value)
    }
}

impl FromIterator<i64> for IntList {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<&IntList> for Value {
    fn from(value: &IntList) -> Self {
        value.encode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_without_quotes() {
        assert_eq!(IntList::from(vec![1, 2, 3]).encode(), Value::Text("{1,2,3}".into()));
        assert_eq!(IntList::from(vec![-7]).encode(), Value::Text("{-7}".into()));
    }

    #[test]
    fn round_trip() {
        let original = IntList::from(vec![1, 2, 3]);
        assert_eq!(IntList::decode(&original.encode()).unwrap(), Some(original));
    }

    #[test]
    fn empty_and_absent_decode_as_absent() {
        assert_eq!(IntList::new().encode(), Value::Text("{}".into()));
        assert_eq!(IntList::decode(&IntList::new().encode()).unwrap(), None);
        assert_eq!(IntList::decode(&IntList::encode_option(None)).unwrap(), None);
    }

    #[test]
    fn non_numeric_token_fails() {
        let err = IntList::decode(&Value::Text("{1,two,3}".into())).unwrap_err();
        match err {
            DecodeError::InvalidInteger { token, .. } => assert_eq!(token, "two"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn null_is_rejected() {
        assert!(matches!(
            IntList::decode(&Value::Null),
            Err(DecodeError::UnsupportedKind { .. })
        ));
    }
}
