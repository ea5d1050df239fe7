//! Composite column codecs
//!
//! Stores don't share a representation for arrays and JSON documents, so
//! list and mapping fields are written as text and parsed back on read:
//!
//! | Type           | Written as              | Absent written as |
//! |----------------|-------------------------|-------------------|
//! | [`StringList`] | `{"a","b"}`             | `{}`              |
//! | [`IntList`]    | `{1,2}`                 | `{}`              |
//! | [`JsonObject`] | JSON object text        | `null`            |
//!
//! An empty list is written exactly like an absent one and reads back as
//! absent. Callers that need to tell "no list" from "empty list" apart must
//! not rely on a round trip through the store.

mod int_list;
mod json_object;
mod string_list;

pub use int_list::IntList;
pub use json_object::JsonObject;
pub use string_list::StringList;

use crate::{DecodeError, Value};

/// A value stored in a single column through a textual encoding
pub trait CompositeValue: Sized {
    /// Name reported in decode errors
    const TARGET: &'static str;

    /// Representation written for an absent value
    const ABSENT: &'static str;

    /// Encode into the representation written to the store. Never fails.
    fn encode(&self) -> Value;

    /// Decode a stored representation. `Ok(None)` is the absent state.
    ///
    /// Only text and blob values are accepted.
    fn decode(src: &Value) -> Result<Option<Self>, DecodeError>;

    /// Encode an optional value, writing [`Self::ABSENT`] for `None`
    fn encode_option(value: Option<&Self>) -> Value {
        value.map_or_else(|| Value::Text(Self::ABSENT.to_owned()), Self::encode)
    }
}

/// Borrow the raw bytes of a text or blob value
pub(crate) fn source_bytes<'v>(
    target: &'static str,
    src: &'v Value,
) -> Result<&'v [u8], DecodeError> {
    match src {
        Value::Text(s) => Ok(s.as_bytes()),
        Value::Blob(b) => Ok(b),
        other => Err(DecodeError::UnsupportedKind {
            target,
            found: other.kind(),
        }),
    }
}

/// Text of a stored list with the surrounding braces removed.
///
/// `None` when nothing is left, i.e. the list is absent.
pub(crate) fn list_body<'v>(
    target: &'static str,
    src: &'v Value,
) -> Result<Option<&'v str>, DecodeError> {
    let text = std::str::from_utf8(source_bytes(target, src)?)?;
    let body = text.trim_matches(|c: char| c == '{' || c == '}');
    Ok((!body.is_empty()).then_some(body))
}
