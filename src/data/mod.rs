//! Test fixtures
//!
//! Centralized payloads, schemas, ids, and latency thresholds shared by the
//! suite. Payloads and schemas are built fresh on each call so tests can
//! mutate their copies freely.

use serde_json::{json, Value};

/// Known-good user id in the fixed dataset
pub const VALID_USER_ID: u32 = 1;
/// Known-good post id
pub const VALID_POST_ID: u32 = 1;
/// Known-good comment id
pub const VALID_COMMENT_ID: u32 = 1;
/// Known-good album id
pub const VALID_ALBUM_ID: u32 = 1;
/// Known-good photo id
pub const VALID_PHOTO_ID: u32 = 1;

/// Id guaranteed absent from the dataset
pub const INVALID_USER_ID: u32 = 99999;
/// Id guaranteed absent from the dataset
pub const INVALID_POST_ID: u32 = 99999;

/// Latency ceiling for reads, in milliseconds
pub const MAX_RESPONSE_TIME_GET_MS: u64 = 3000;
/// Latency ceiling for writes, in milliseconds
pub const MAX_RESPONSE_TIME_POST_MS: u64 = 3000;

/// Complete user payload for creation tests
pub fn valid_user_create() -> Value {
    json!({
        "name": "John Doe",
        "username": "johndoe",
        "email": "john.doe@example.com",
        "phone": "1-234-567-8901",
        "website": "johndoe.com"
    })
}

/// User payload for full-update tests
pub fn valid_user_update() -> Value {
    json!({
        "name": "Jane Smith",
        "username": "janesmith",
        "email": "jane.smith@example.com"
    })
}

/// Post payload for creation tests
pub fn valid_post_create() -> Value {
    json!({
        "title": "Test Post Title",
        "body": "This is a test post body with some content.",
        "userId": 1
    })
}

/// Comment payload for creation tests
pub fn valid_comment_create() -> Value {
    json!({
        "name": "Test Comment",
        "email": "commenter@example.com",
        "body": "This is a test comment."
    })
}

/// User payload with the name field missing, for negative tests
pub fn invalid_user_missing_name() -> Value {
    json!({
        "username": "testuser",
        "email": "test@example.com"
    })
}

/// User payload with an empty email, for negative tests
pub fn invalid_user_empty_email() -> Value {
    json!({
        "name": "Test User",
        "username": "testuser",
        "email": ""
    })
}

/// User whose name carries accents and an apostrophe
pub fn user_with_special_chars() -> Value {
    json!({
        "name": "José María O'Brien",
        "username": "jose_maria",
        "email": "jose.maria@example.com"
    })
}

/// User whose name sits at the 100 character boundary
pub fn user_with_long_name() -> Value {
    json!({
        "name": "A".repeat(100),
        "username": "longname",
        "email": "long@example.com"
    })
}

/// Schema for a single user resource
pub fn user_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "id": {"type": "integer"},
            "name": {"type": "string"},
            "username": {"type": "string"},
            "email": {"type": "string", "format": "email"},
            "phone": {"type": "string"},
            "website": {"type": "string"}
        },
        "required": ["id", "name", "username", "email"]
    })
}

/// Schema for a single post resource
pub fn post_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "id": {"type": "integer"},
            "userId": {"type": "integer"},
            "title": {"type": "string"},
            "body": {"type": "string"}
        },
        "required": ["id", "userId", "title", "body"]
    })
}

/// Schema for a single comment resource
pub fn comment_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "id": {"type": "integer"},
            "postId": {"type": "integer"},
            "name": {"type": "string"},
            "email": {"type": "string"},
            "body": {"type": "string"}
        },
        "required": ["id", "postId", "name", "email", "body"]
    })
}

/// Schema for a single album resource
pub fn album_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "id": {"type": "integer"},
            "userId": {"type": "integer"},
            "title": {"type": "string"}
        },
        "required": ["id", "userId", "title"]
    })
}

/// Schema for a single photo resource
pub fn photo_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "id": {"type": "integer"},
            "albumId": {"type": "integer"},
            "title": {"type": "string"},
            "url": {"type": "string"},
            "thumbnailUrl": {"type": "string"}
        },
        "required": ["id", "albumId", "title", "url", "thumbnailUrl"]
    })
}

/// Schema for the users collection
pub fn user_list_schema() -> Value {
    json!({
        "type": "array",
        "items": user_schema(),
        "minItems": 1
    })
}
