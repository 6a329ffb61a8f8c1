//! Mock JSONPlaceholder instance
//!
//! Serves a small slice of the real dataset so the suite runs hermetically.
//! Write endpoints behave like the fake API: nothing persists, create and
//! update calls echo the submitted body back with an id.

use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

/// Id assigned to a created user
pub const CREATED_USER_ID: u64 = 11;
/// Id assigned to a created post
pub const CREATED_POST_ID: u64 = 101;
/// Id assigned to a created comment
pub const CREATED_COMMENT_ID: u64 = 501;

/// Echo the request body back with an id, the way the fake API answers
/// create and full-update calls.
struct EchoWithId {
    status: u16,
    id: u64,
}

impl Respond for EchoWithId {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let mut body: Value =
            serde_json::from_slice(&request.body).unwrap_or_else(|_| json!({}));
        body["id"] = json!(self.id);
        ResponseTemplate::new(self.status).set_body_json(body)
    }
}

/// Overlay the request body onto an existing resource, the way the fake API
/// answers partial updates.
struct MergePatched {
    base: Value,
}

impl Respond for MergePatched {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let mut merged = self.base.clone();
        if let Ok(Value::Object(fields)) = serde_json::from_slice::<Value>(&request.body) {
            for (key, value) in fields {
                merged[key.as_str()] = value;
            }
        }
        ResponseTemplate::new(200).set_body_json(merged)
    }
}

/// Mock API with the full route table mounted
pub struct MockApi {
    server: MockServer,
}

impl MockApi {
    /// Stand up a fresh instance on a random local port
    pub async fn start() -> Self {
        let server = MockServer::start().await;

        // Users
        mount_get(&server, "/users", sample_users()).await;
        mount_get(&server, "/users/1", sample_user()).await;
        mount_404(&server, "/users/99999").await;
        Mock::given(method("POST"))
            .and(path("/users"))
            .respond_with(EchoWithId {
                status: 201,
                id: CREATED_USER_ID,
            })
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/users/1"))
            .respond_with(EchoWithId { status: 200, id: 1 })
            .mount(&server)
            .await;
        Mock::given(method("PATCH"))
            .and(path("/users/1"))
            .respond_with(MergePatched {
                base: sample_user(),
            })
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/users/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        // Posts, with and without the author filter
        Mock::given(method("GET"))
            .and(path("/posts"))
            .and(query_param_is_missing("userId"))
            .respond_with(ResponseTemplate::new(200).set_body_json(sample_posts()))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/posts"))
            .and(query_param("userId", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(posts_by_user(1)))
            .mount(&server)
            .await;
        mount_get(&server, "/posts/1", sample_post()).await;
        mount_404(&server, "/posts/99999").await;
        mount_get(&server, "/posts/1/comments", sample_comments()).await;
        Mock::given(method("POST"))
            .and(path("/posts"))
            .respond_with(EchoWithId {
                status: 201,
                id: CREATED_POST_ID,
            })
            .mount(&server)
            .await;

        // Comments
        mount_get(&server, "/comments", sample_comments()).await;
        mount_get(&server, "/comments/1", sample_comment()).await;
        Mock::given(method("POST"))
            .and(path("/comments"))
            .respond_with(EchoWithId {
                status: 201,
                id: CREATED_COMMENT_ID,
            })
            .mount(&server)
            .await;

        // Albums, with and without the owner filter
        Mock::given(method("GET"))
            .and(path("/albums"))
            .and(query_param_is_missing("userId"))
            .respond_with(ResponseTemplate::new(200).set_body_json(sample_albums()))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/albums"))
            .and(query_param("userId", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(albums_by_user(1)))
            .mount(&server)
            .await;
        mount_get(&server, "/albums/1", sample_album()).await;

        // Photos
        mount_get(&server, "/photos", sample_photos()).await;
        mount_get(&server, "/photos/1", sample_photo()).await;

        Self { server }
    }

    /// Base URL of the mock instance
    pub fn uri(&self) -> String {
        self.server.uri()
    }
}

async fn mount_get(server: &MockServer, route: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn mount_404(server: &MockServer, route: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({})))
        .mount(server)
        .await;
}

pub fn sample_user() -> Value {
    json!({
        "id": 1,
        "name": "Leanne Graham",
        "username": "Bret",
        "email": "Sincere@april.biz",
        "phone": "1-770-736-8031 x56442",
        "website": "hildegard.org"
    })
}

pub fn sample_users() -> Value {
    json!([
        sample_user(),
        {
            "id": 2,
            "name": "Ervin Howell",
            "username": "Antonette",
            "email": "Shanna@melissa.tv",
            "phone": "010-692-6593 x09125",
            "website": "anastasia.net"
        },
        {
            "id": 3,
            "name": "Clementine Bauch",
            "username": "Samantha",
            "email": "Nathan@yesenia.net",
            "phone": "1-463-123-4447",
            "website": "ramiro.info"
        }
    ])
}

pub fn sample_post() -> Value {
    json!({
        "userId": 1,
        "id": 1,
        "title": "sunt aut facere repellat provident occaecati excepturi optio reprehenderit",
        "body": "quia et suscipit\nsuscipit recusandae consequuntur expedita et cum\nreprehenderit molestiae ut ut quas totam\nnostrum rerum est autem sunt rem eveniet architecto"
    })
}

pub fn sample_posts() -> Value {
    json!([
        sample_post(),
        {
            "userId": 1,
            "id": 2,
            "title": "qui est esse",
            "body": "est rerum tempore vitae\nsequi sint nihil reprehenderit dolor beatae ea dolores neque"
        },
        {
            "userId": 1,
            "id": 3,
            "title": "ea molestias quasi exercitationem repellat qui ipsa sit aut",
            "body": "et iusto sed quo iure\nvoluptatem occaecati omnis eligendi aut ad"
        },
        {
            "userId": 2,
            "id": 11,
            "title": "et ea vero quia laudantium autem",
            "body": "delectus reiciendis molestiae occaecati non minima eveniet qui voluptatibus"
        }
    ])
}

pub fn sample_comment() -> Value {
    json!({
        "postId": 1,
        "id": 1,
        "name": "id labore ex et quam laborum",
        "email": "Eliseo@gardner.biz",
        "body": "laudantium enim quasi est quidem magnam voluptate ipsam eos\ntempora quo necessitatibus\ndolor quam autem quasi\nreiciendis et nam sapiente accusantium"
    })
}

pub fn sample_comments() -> Value {
    json!([
        sample_comment(),
        {
            "postId": 1,
            "id": 2,
            "name": "quo vero reiciendis velit similique earum",
            "email": "Jayne_Kuhic@sydney.com",
            "body": "est natus enim nihil est dolore omnis voluptatem numquam\net omnis occaecati quod ullam at"
        },
        {
            "postId": 1,
            "id": 3,
            "name": "odio adipisci rerum aut animi",
            "email": "Nikita@garfield.biz",
            "body": "quia molestiae reprehenderit quasi aspernatur\naut expedita occaecati aliquam eveniet laudantium"
        }
    ])
}

pub fn sample_album() -> Value {
    json!({
        "userId": 1,
        "id": 1,
        "title": "quidem molestiae enim"
    })
}

pub fn sample_albums() -> Value {
    json!([
        sample_album(),
        {
            "userId": 1,
            "id": 2,
            "title": "sunt qui excepturi placeat culpa"
        },
        {
            "userId": 2,
            "id": 11,
            "title": "quam nostrum impedit mollitia quod et dolor"
        }
    ])
}

pub fn sample_photo() -> Value {
    json!({
        "albumId": 1,
        "id": 1,
        "title": "accusamus beatae ad facilis cum similique qui sunt",
        "url": "https://via.placeholder.com/600/92c952",
        "thumbnailUrl": "https://via.placeholder.com/150/92c952"
    })
}

pub fn sample_photos() -> Value {
    json!([
        sample_photo(),
        {
            "albumId": 1,
            "id": 2,
            "title": "reprehenderit est deserunt velit ipsam",
            "url": "https://via.placeholder.com/600/771796",
            "thumbnailUrl": "https://via.placeholder.com/150/771796"
        }
    ])
}

fn posts_by_user(user_id: u64) -> Value {
    filter_by(sample_posts(), "userId", user_id)
}

fn albums_by_user(user_id: u64) -> Value {
    filter_by(sample_albums(), "userId", user_id)
}

fn filter_by(collection: Value, field: &str, value: u64) -> Value {
    let filtered: Vec<Value> = collection
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter(|item| item[field] == value)
                .cloned()
                .collect()
        })
        .unwrap_or_default();
    Value::Array(filtered)
}
