//! Raw section values as they arrive from the generator
//!
//! The wire never says whether a string is prose or an encoded structure, so
//! the tag is inferred here, once, by trying to decode it. An encoded string
//! keeps what it decoded to; nothing downstream parses it again.

use crate::extractor::display_string;
use crate::resolver::{decode_structured, Resolved};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// A section value of unknown shape
#[derive(Debug, Clone, PartialEq)]
pub enum RawSectionValue {
    /// Literal text
    Text(String),
    /// Text whose content is itself a JSON object or array
    EncodedText {
        /// The string as received
        text: String,
        /// Its decoded record or list
        decoded: Resolved,
    },
    /// Named fields
    Record(Map<String, Value>),
    /// Ordered elements (strings and/or records)
    List(Vec<Value>),
}

impl RawSectionValue {
    /// Tag a decoded JSON value
    ///
    /// Strings are tried against the same decoder the resolver uses. `null`
    /// becomes empty text; numbers and booleans become their display text.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self::Record(map),
            Value::Array(items) => Self::List(items),
            Value::String(text) => Self::from_text(text),
            scalar => Self::Text(display_string(&scalar)),
        }
    }

    /// Tag a string as literal or encoded text
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        match decode_structured(&text) {
            Ok(decoded) => Self::EncodedText { text, decoded },
            Err(_) => Self::Text(text),
        }
    }

    /// Whether the value is already a record or list
    #[inline]
    #[must_use]
    pub fn is_structured(&self) -> bool {
        matches!(self, Self::Record(_) | Self::List(_))
    }

    /// The value as it appeared on the wire
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Self::Text(text) | Self::EncodedText { text, .. } => Value::String(text.clone()),
            Self::Record(map) => Value::Object(map.clone()),
            Self::List(items) => Value::Array(items.clone()),
        }
    }
}

impl Default for RawSectionValue {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl From<Value> for RawSectionValue {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}

impl From<&str> for RawSectionValue {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

impl<'de> Deserialize<'de> for RawSectionValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from_value)
    }
}

impl Serialize for RawSectionValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(text) | Self::EncodedText { text, .. } => serializer.serialize_str(text),
            Self::Record(map) => map.serialize(serializer),
            Self::List(items) => items.serialize(serializer),
        }
    }
}
