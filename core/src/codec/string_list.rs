use std::ops::{Deref, DerefMut};

use super::{CompositeValue, list_body};
use crate::{DecodeError, Value};

/// Ordered list of strings stored as an array literal.
///
/// Every element is quoted on the way out. On the way in, one layer of
/// surrounding quotes is stripped when present, so unquoted array text (as
/// PostgreSQL prints simple elements) reads back the same.
///
/// Elements are not escaped: an element containing `,` or `"` does not
/// survive a round trip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StringList(pub Vec<String>);

impl StringList {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl CompositeValue for StringList {
    const TARGET: &'static str = "StringList";
    const ABSENT: &'static str = "{}";

    fn encode(&self) -> Value {
        if self.0.is_empty() {
            return Value::Text(Self::ABSENT.to_owned());
        }
        Value::Text(format!("{{\"{}\"}}", self.0.join("\",\"")))
    }

    fn decode(src: &Value) -> Result<Option<Self>, DecodeError> {
        let Some(body) = list_body(Self::TARGET, src)? else {
            return Ok(None);
        };
        Ok(Some(Self(
            body.split(',')
                .map(|item| unquote(item).to_owned())
                .collect(),
        )))
    }
}

fn unquote(item: &str) -> &str {
    let item = item.strip_prefix('"').unwrap_or(item);
    item.strip_suffix('"').unwrap_or(item)
}

impl Deref for StringList {
    type Target = Vec<String>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for StringList {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Vec<String>> for StringList {
    fn from(value: Vec<String>) -> Self {
        Self(value)
    }
}

impl<S: Into<String>> FromIterator<S> for StringList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl From<&StringList> for Value {
    fn from(value: &StringList) -> Self {
        value.encode()
    }
}
