//! Support for the nested JSON localization format.
//!
//! Provides parsing, serialization, and conversion to/from the internal
//! `Document` model. Objects nest arbitrarily deep; every string is a
//! translatable leaf. Key order is preserved end to end.

use std::io::{BufRead, Write};

use serde_json::{Map, Value as JsonValue};

use crate::{
    error::Error,
    traits::Parser,
    types::{Document, Value},
};

/// Represents a JSON resource file as its raw parsed tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Format {
    pub root: JsonValue,
}

impl Parser for Format {
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let root = serde_json::from_reader(reader).map_err(Error::Parse)?;
        Ok(Format { root })
    }

    fn to_writer<W: Write>(&self, writer: W) -> Result<(), Error> {
        serde_json::to_writer_pretty(writer, &self.root).map_err(Error::Parse)
    }
}

impl TryFrom<Format> for Document {
    type Error = Error;

    /// Fails with [`Error::DataMismatch`] if the root is not an object
    /// or if any leaf is not a string. Numbers, booleans, null, and
    /// arrays carry no translatable text and are rejected.
    fn try_from(format: Format) -> Result<Self, Self::Error> {
        match format.root {
            JsonValue::Object(map) => document_from_map(map),
            other => Err(Error::DataMismatch(format!(
                "top-level JSON value must be an object, found {}",
                json_type_name(&other)
            ))),
        }
    }
}

impl From<Document> for Format {
    fn from(document: Document) -> Self {
        Format {
            root: JsonValue::Object(map_from_document(document)),
        }
    }
}

fn document_from_map(map: Map<String, JsonValue>) -> Result<Document, Error> {
    let mut document = Document::new();
    for (key, value) in map {
        let value = match value {
            JsonValue::String(text) => Value::Text(text),
            JsonValue::Object(nested) => Value::Nested(document_from_map(nested)?),
            other => {
                return Err(Error::DataMismatch(format!(
                    "value for key `{}` must be a string or object, found {}",
                    key,
                    json_type_name(&other)
                )));
            }
        };
        document.insert(key, value);
    }
    Ok(document)
}

fn map_from_document(document: Document) -> Map<String, JsonValue> {
    let mut map = Map::new();
    for entry in document.entries {
        let value = match entry.value {
            Value::Text(text) => JsonValue::String(text),
            Value::Nested(nested) => JsonValue::Object(map_from_document(nested)),
        };
        map.insert(entry.key, value);
    }
    map
}

fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
