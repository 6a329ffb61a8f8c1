//! Response validation
//!
//! Assertion helpers for status, latency, headers, and fields, plus JSON
//! Schema checks for body structure.

mod response;
mod schema;

pub use response::{
    assert_content_type, assert_field_exists, assert_field_type, assert_not_empty,
    assert_response_time, assert_status, JsonType,
};
pub use schema::matches_schema;
