//! JSON Schema validation
//!
//! Structural checks for response bodies. Unlike the assertion helpers in
//! [`super::response`], a schema mismatch does not panic: the verdict comes
//! back as a boolean and the first failure is logged, so tests decide how to
//! react. A malformed schema document is a bug in the suite itself and does
//! panic.

use jsonschema::JSONSchema;
use serde_json::Value;
use tracing::warn;

/// Check a JSON value against a schema
///
/// Returns `true` when the instance conforms. On mismatch the first failing
/// path and message are logged and the result is `false`.
pub fn matches_schema(instance: &Value, schema: &Value) -> bool {
    let compiled = match JSONSchema::compile(schema) {
        Ok(c) => c,
        Err(e) => panic!("Invalid schema document: {e}"),
    };

    if let Err(mut errors) = compiled.validate(instance) {
        if let Some(error) = errors.next() {
            warn!("Schema validation failed: {}", error);
            warn!("Failed at path: {}", error.instance_path);
        }
        return false;
    }

    true
}
