//! Response assertion helpers
//!
//! Centralizes the checks tests repeat: status codes, latency, headers, and
//! body shape. Each helper panics with a message naming expected and actual
//! values, so a failing test reads like the failing request.

use serde_json::Value;
use std::fmt;

use crate::http::ApiResponse;

/// JSON value types used by field assertions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JsonType {
    Null,
    Bool,
    Integer,
    Number,
    String,
    Array,
    Object,
}

impl JsonType {
    /// Classify a JSON value
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(n) if n.is_i64() || n.is_u64() => Self::Integer,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    /// Type name used in assertion messages
    pub fn name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for JsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Assert the exact HTTP status code
pub fn assert_status(response: &ApiResponse, expected: u16) {
    assert!(
        response.status == expected,
        "Expected status {}, got {}. Response: {}",
        expected,
        response.status,
        response.body
    );
}

/// Assert the call completed under a latency ceiling
///
/// The limit is exclusive: an elapsed time equal to `max_ms` fails.
pub fn assert_response_time(response: &ApiResponse, max_ms: u64) {
    assert!(
        response.elapsed_ms < max_ms,
        "Response time {}ms exceeds limit of {}ms",
        response.elapsed_ms,
        max_ms
    );
}

/// Assert the Content-Type header contains the expected media type
pub fn assert_content_type(response: &ApiResponse, expected: &str) {
    let content_type = response
        .header("content-type")
        .cloned()
        .unwrap_or_default();
    assert!(
        content_type.contains(expected),
        "Expected Content-Type '{}', got '{}'",
        expected,
        content_type
    );
}

/// Assert a field is present on a JSON object
pub fn assert_field_exists(body: &Value, field: &str) {
    let keys: Vec<&String> = body
        .as_object()
        .map(|o| o.keys().collect())
        .unwrap_or_default();
    assert!(
        body.get(field).is_some(),
        "Field '{}' not found in response. Available fields: {:?}",
        field,
        keys
    );
}

/// Assert a field is present and has the expected JSON type
pub fn assert_field_type(body: &Value, field: &str, expected: JsonType) {
    assert_field_exists(body, field);
    let actual = JsonType::of(&body[field]);
    assert!(
        actual == expected,
        "Field '{}' expected type {}, got {}",
        field,
        expected,
        actual
    );
}

/// Assert a field is present and non-empty
///
/// Empty means JSON null, an empty string, an empty array, or an empty
/// object. Numbers and booleans are never empty.
pub fn assert_not_empty(body: &Value, field: &str) {
    assert_field_exists(body, field);
    let value = &body[field];
    let empty = match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
        _ => false,
    };
    assert!(!empty, "Field '{}' is empty: {}", field, value);
}
