//! Endpoint registry for the JSONPlaceholder API
//!
//! Path templates for every resource the suite exercises. Templates carry an
//! `{id}` placeholder that [`with_id`] substitutes; joining a path onto the
//! base URL is handled by [`full_url`] (or by the client itself).

/// Users collection
pub const USERS: &str = "/users";
/// Single user by id
pub const USER_BY_ID: &str = "/users/{id}";

/// Posts collection
pub const POSTS: &str = "/posts";
/// Single post by id
pub const POST_BY_ID: &str = "/posts/{id}";
/// Comments nested under a post
pub const POST_COMMENTS: &str = "/posts/{id}/comments";

/// Comments collection
pub const COMMENTS: &str = "/comments";
/// Single comment by id
pub const COMMENT_BY_ID: &str = "/comments/{id}";

/// Albums collection
pub const ALBUMS: &str = "/albums";
/// Single album by id
pub const ALBUM_BY_ID: &str = "/albums/{id}";

/// Photos collection
pub const PHOTOS: &str = "/photos";
/// Single photo by id
pub const PHOTO_BY_ID: &str = "/photos/{id}";

/// Posts filtered to one author
pub const USER_POSTS: &str = "/posts?userId={id}";
/// Albums filtered to one owner
pub const USER_ALBUMS: &str = "/albums?userId={id}";

/// Substitute the `{id}` placeholder in a template
///
/// Templates without a placeholder pass through unchanged.
pub fn with_id(template: &str, id: impl ToString) -> String {
    template.replace("{id}", &id.to_string())
}

/// Join a path onto a base URL
pub fn full_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}
