use std::ops::{Deref, DerefMut};

use serde_json::{Map, Value as JsonValue};

use super::{CompositeValue, source_bytes};
use crate::{DecodeError, Value};

/// Free-form JSON object stored as JSON text.
///
/// Nested values keep their shape: strings, numbers, booleans, null, arrays
/// and objects. An empty object is written as `{}` and stays present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonObject(pub Map<String, JsonValue>);

impl JsonObject {
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    #[must_use]
    pub fn into_inner(self) -> Map<String, JsonValue> {
        self.0
    }
}

impl CompositeValue for JsonObject {
    const TARGET: &'static str = "JsonObject";
    const ABSENT: &'static str = "null";

    fn encode(&self) -> Value {
        // A map with string keys always serializes.
        Value::Text(JsonValue::Object(self.0.clone()).to_string())
    }

    fn decode(src: &Value) -> Result<Option<Self>, DecodeError> {
        let bytes = source_bytes(Self::TARGET, src)?;
        let object: Option<Map<String, JsonValue>> = serde_json::from_slice(bytes)?;
        Ok(object.map(Self))
    }
}

impl Deref for JsonObject {
    type Target = Map<String, JsonValue>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for JsonObject {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Map<String, JsonValue>> for JsonObject {
    fn from(value: Map<String, JsonValue>) -> Self {
        Self(value)
    }
}

impl TryFrom<JsonValue> for JsonObject {
    type Error = JsonValue;

    /// Fails with the original value when it is not an object
    fn try_from(value: JsonValue) -> Result<Self, Self::Error> {
        match value {
            JsonValue::Object(map) => Ok(Self(map)),
            other => Err(other),
        }
    }
}

impl From<&JsonObject> for Value {
    fn from(value: &JsonObject) -> Self {
        value.encode()
    }
}
