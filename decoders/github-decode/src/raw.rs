//! Untyped JSON tree access
//!
//! The front-end always parses a response into a generic tree first. This
//! module names the tree types and classifies nodes by structural kind,
//! which is the only thing the polymorphic resolvers look at.

use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

/// A node of the parsed response tree
pub type RawValue = Value;

/// A JSON mapping with unique string keys
pub type RawObject = Map<String, Value>;

/// A JSON sequence
pub type RawArray = Vec<Value>;

/// Longest element rendering kept in diagnostics
const PREVIEW_LIMIT: usize = 120;

/// Structural kind of a JSON value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StructuralKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl StructuralKind {
    /// Classify a value
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => StructuralKind::Null,
            Value::Bool(_) => StructuralKind::Bool,
            Value::Number(_) => StructuralKind::Number,
            Value::String(_) => StructuralKind::String,
            Value::Array(_) => StructuralKind::Array,
            Value::Object(_) => StructuralKind::Object,
        }
    }

    /// Whether this kind is a JSON primitive
    ///
    /// `null` is deliberately excluded: it never names an identifier.
    pub fn is_primitive(self) -> bool {
        matches!(
            self,
            StructuralKind::Bool | StructuralKind::Number | StructuralKind::String
        )
    }
}

impl fmt::Display for StructuralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StructuralKind::Null => "null",
            StructuralKind::Bool => "boolean",
            StructuralKind::Number => "number",
            StructuralKind::String => "string",
            StructuralKind::Array => "array",
            StructuralKind::Object => "object",
        };
        f.write_str(name)
    }
}

/// Compact rendering of a value for error messages, truncated on a char boundary
pub fn preview(value: &Value) -> String {
    let rendered = value.to_string();
    if rendered.len() <= PREVIEW_LIMIT {
        return rendered;
    }

    let mut end = PREVIEW_LIMIT;
    while !rendered.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &rendered[..end])
}
