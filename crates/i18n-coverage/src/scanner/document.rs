//! Parsing a single translation document.

use std::fmt;
use std::path::Path;

use serde_json::Value;

use crate::scanner::ScanError;

/// The top-level JSON type of a document that is not an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonKind {
    Array,
    String,
    Number,
    Bool,
    Null,
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JsonKind::Array => "array",
            JsonKind::String => "string",
            JsonKind::Number => "number",
            JsonKind::Bool => "boolean",
            JsonKind::Null => "null",
        };
        f.write_str(name)
    }
}

/// A parsed translation document, reduced to what coverage needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Document {
    /// Top-level key names of an object document, in file order.
    Object(Vec<String>),
    /// Any other top-level value.
    Other(JsonKind),
}

/// Parse `content` as JSON and keep only the top-level key names.
///
/// Values are never inspected: `{"a": 1, "b": {"nested": true}}` yields the
/// keys `a` and `b`. `path` is only used for error reporting.
pub fn parse_document(path: &Path, content: &str) -> Result<Document, ScanError> {
    let value: Value = serde_json::from_str(content).map_err(|e| ScanError::Parse {
        path: path.to_path_buf(),
        line: e.line(),
        column: e.column(),
        message: e.to_string(),
        content: content.to_string(),
    })?;

    Ok(match value {
        Value::Object(map) => Document::Object(map.into_iter().map(|(key, _)| key).collect()),
        Value::Array(_) => Document::Other(JsonKind::Array),
        Value::String(_) => Document::Other(JsonKind::String),
        Value::Number(_) => Document::Other(JsonKind::Number),
        Value::Bool(_) => Document::Other(JsonKind::Bool),
        Value::Null => Document::Other(JsonKind::Null),
    })
}
