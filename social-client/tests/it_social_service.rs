//! Integration tests driving callers through the `SocialService` trait object

mod common;

use std::sync::Mutex;

use async_trait::async_trait;
use common::Fixture;
use mockito::Server;
use serde_json::{json, Value};
use shared::{Comment, Post, User};
use social_client::core::SocialService;
use social_client::services::api::NewPost;
use social_client::Result;

/// Like or unlike depending on the current like state, the way a feed view does.
async fn toggle_like(service: &dyn SocialService, post: &Post, me: i64) -> Result<Value> {
    if post.is_liked_by(me) {
        service.unlike_post(post.id).await
    } else {
        service.like_post(post.id).await
    }
}

/// Records calls instead of talking to a backend
#[derive(Default)]
struct RecordingService {
    calls: Mutex<Vec<String>>,
}

impl RecordingService {
    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SocialService for RecordingService {
    async fn list_posts(&self) -> Result<Vec<Post>> {
        self.record("list_posts".to_string());
        Ok(Vec::new())
    }

    async fn create_post(&self, post: NewPost) -> Result<Post> {
        self.record(format!("create_post {}", post.content));
        Ok(serde_json::from_value(json!({"id": 1, "content": post.content}))?)
    }

    async fn like_post(&self, post_id: i64) -> Result<Value> {
        self.record(format!("like {}", post_id));
        Ok(Value::Null)
    }

    async fn unlike_post(&self, post_id: i64) -> Result<Value> {
        self.record(format!("unlike {}", post_id));
        Ok(Value::Null)
    }

    async fn comment_post(&self, post_id: i64, text: &str) -> Result<Comment> {
        self.record(format!("comment {} {}", post_id, text));
        Ok(serde_json::from_value(json!({"id": 1, "content": text}))?)
    }

    async fn follow(&self, user_id: i64) -> Result<Value> {
        self.record(format!("follow {}", user_id));
        Ok(Value::Null)
    }

    async fn unfollow(&self, user_id: i64) -> Result<Value> {
        self.record(format!("unfollow {}", user_id));
        Ok(Value::Null)
    }

    async fn list_following(&self) -> Result<Vec<User>> {
        self.record("list_following".to_string());
        Ok(Vec::new())
    }

    async fn list_followers(&self) -> Result<Vec<User>> {
        self.record("list_followers".to_string());
        Ok(Vec::new())
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        self.record("list_users".to_string());
        Ok(Vec::new())
    }
}

fn post_liked_by(ids: &[i64]) -> Post {
    let likes: Vec<Value> = ids
        .iter()
        .map(|id| json!({"id": id, "user": {"id": id, "username": format!("user{}", id)}}))
        .collect();

    serde_json::from_value(json!({
        "id": 42,
        "user": {"id": 8, "username": "bo"},
        "content": "hello",
        "likes": likes
    }))
    .expect("post fixture should decode")
}

#[tokio::test]
async fn toggle_like_against_a_test_double() {
    //* Given
    let service = RecordingService::default();
    let liked = post_liked_by(&[7, 9]);
    let not_liked = post_liked_by(&[9]);

    //* When
    toggle_like(&service, &liked, 7).await.expect("unlike should succeed");
    toggle_like(&service, &not_liked, 7).await.expect("like should succeed");

    //* Then
    assert_eq!(service.calls(), ["unlike 42", "like 42"]);
}

#[tokio::test]
async fn api_client_serves_the_trait_object() {
    //* Given
    let mut server = Server::new_async().await;
    let fixture = Fixture::logged_in(&server.url(), "A1", Some("R1"));

    let feed_mock = server
        .mock("GET", "/api/posts/")
        .match_header("authorization", "Bearer A1")
        .with_status(200)
        .with_body(
            r#"[{"id": 42, "user": {"id": 8, "username": "bo"}, "content": "hello",
                 "likes": [{"id": 3, "user": {"id": 7, "username": "ana"}}]}]"#,
        )
        .expect(1)
        .create_async()
        .await;

    let unlike_mock = server
        .mock("DELETE", "/api/posts/42/unlike/")
        .match_header("authorization", "Bearer A1")
        .with_status(204)
        .expect(1)
        .create_async()
        .await;

    let service: &dyn SocialService = &*fixture.client;

    //* When
    let feed = service.list_posts().await.expect("feed should load");
    let result = toggle_like(service, &feed[0], 7).await;

    //* Then
    feed_mock.assert_async().await;
    unlike_mock.assert_async().await;
    assert_eq!(feed[0].like_count(), 1);
    assert!(result.expect("unlike should succeed").is_null());
}
