//! Top-level key/type checks for untrusted JSON objects
//!
//! A schema lists required keys with the exact JSON type each value must
//! have. Keys not named by the schema are ignored, and `null` never
//! satisfies a type.

use serde_json::{Map, Value};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonType {
    String,
    /// A number written with a fraction or exponent (`0.5`, `1e3`)
    Float,
    /// A number without a fraction (`5`, `-2`)
    Integer,
    Bool,
    Array,
    Object,
}

impl JsonType {
    pub fn matches(self, value: &Value) -> bool {
        match (self, value) {
            (JsonType::String, Value::String(_)) => true,
            (JsonType::Float, Value::Number(n)) => n.is_f64(),
            (JsonType::Integer, Value::Number(n)) => n.is_i64() || n.is_u64(),
            (JsonType::Bool, Value::Bool(_)) => true,
            (JsonType::Array, Value::Array(_)) => true,
            (JsonType::Object, Value::Object(_)) => true,
            _ => false,
        }
    }

    pub fn of(value: &Value) -> &'static str {
        match value {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(n) if n.is_f64() => "float",
            Value::Number(_) => "integer",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

impl fmt::Display for JsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JsonType::String => "string",
            JsonType::Float => "float",
            JsonType::Integer => "integer",
            JsonType::Bool => "bool",
            JsonType::Array => "array",
            JsonType::Object => "object",
        };
        f.write_str(name)
    }
}

pub type Schema = [(&'static str, JsonType)];

/// Required shape of a trading decision response.
pub const DECISION_SCHEMA: &Schema = &[
    ("as_of", JsonType::String),
    ("market_view", JsonType::String),
    ("actions", JsonType::Array),
    ("watchlist", JsonType::Array),
    ("constraints_check", JsonType::Object),
    ("data_sources", JsonType::Array),
];

pub fn decision_schema() -> &'static Schema {
    DECISION_SCHEMA
}

/// First reason a value failed a schema check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    NotAnObject { found: &'static str },
    MissingKey(String),
    WrongType {
        key: String,
        expected: JsonType,
        found: &'static str,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::NotAnObject { found } => write!(f, "expected a JSON object, got {}", found),
            Violation::MissingKey(key) => write!(f, "missing key '{}'", key),
            Violation::WrongType {
                key,
                expected,
                found,
            } => write!(f, "key '{}' should be {}, got {}", key, expected, found),
        }
    }
}

/// `true` iff every schema key is present with exactly the expected type.
pub fn validate(data: &Map<String, Value>, schema: &Schema) -> bool {
    check(data, schema).is_ok()
}

/// Like [`validate`], but reports the first offending key.
pub fn check(data: &Map<String, Value>, schema: &Schema) -> Result<(), Violation> {
    for (key, expected) in schema {
        let value = data
            .get(*key)
            .ok_or_else(|| Violation::MissingKey(key.to_string()))?;
        if !expected.matches(value) {
            return Err(Violation::WrongType {
                key: key.to_string(),
                expected: *expected,
                found: JsonType::of(value),
            });
        }
    }
    Ok(())
}

/// Schema check for a value that may not be an object at all.
pub fn check_value(data: &Value, schema: &Schema) -> Result<(), Violation> {
    match data {
        Value::Object(map) => check(map, schema),
        other => Err(Violation::NotAnObject {
            found: JsonType::of(other),
        }),
    }
}
