//! # Post Data Transfer Objects
//!
//! Feed posts, comments, and the bodies used to create or edit them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::users::User;

/// A post in the feed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Post {
    pub id: i64,
    #[serde(default, alias = "user")]
    pub author: Option<User>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// One entry per like; the backend reports like state through this list
    #[serde(default)]
    pub likes: Vec<Like>,
    /// Count reported by backends that aggregate likes server-side
    #[serde(default)]
    pub likes_count: u64,
    #[serde(default)]
    pub comments_count: u64,
    #[serde(default)]
    pub is_liked: bool,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Post {
    /// Number of likes, from the like list when present.
    pub fn like_count(&self) -> u64 {
        if self.likes.is_empty() {
            self.likes_count
        } else {
            self.likes.len() as u64
        }
    }

    /// Whether `user_id` has liked this post.
    pub fn is_liked_by(&self, user_id: i64) -> bool {
        self.likes.iter().any(|like| like.user.id == user_id)
    }
}

/// A like on a post
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Like {
    #[serde(default)]
    pub id: Option<i64>,
    pub user: User,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A comment on a post
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Comment {
    pub id: i64,
    #[serde(default, alias = "user")]
    pub author: Option<User>,
    pub content: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Body of `POST /api/posts/`.
///
/// `image` is a hosted image URL. It is always serialized, as `null` when
/// absent, which is what the backend expects.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatePostRequest {
    pub content: String,
    pub image: Option<String>,
}

/// Body of `PUT /api/posts/{id}/`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdatePostRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Body of `POST /api/posts/{id}/comment/`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommentRequest {
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_post_serializes_null_image() {
        let request = CreatePostRequest {
            content: "hello".to_string(),
            image: None,
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"content": "hello", "image": null})
        );
    }

    #[test]
    fn test_post_decodes_with_user_alias_and_defaults() {
        let post: Post = serde_json::from_value(json!({
            "id": 42,
            "user": {"id": 7, "username": "ana"},
            "content": "hi",
            "created_at": "2024-05-01T12:00:00Z"
        }))
        .unwrap();

        assert_eq!(post.author.map(|u| u.username), Some("ana".to_string()));
        assert_eq!(post.likes_count, 0);
        assert!(!post.is_liked);
        assert!(post.created_at.is_some());
    }

    #[test]
    fn test_like_state_from_like_list() {
        let post: Post = serde_json::from_value(json!({
            "id": 1,
            "user": {"id": 7, "username": "ana"},
            "content": "x",
            "likes": [
                {"id": 1, "user": {"id": 7, "username": "ana"}},
                {"id": 2, "user": {"id": 8, "username": "bo"}}
            ]
        }))
        .unwrap();

        assert_eq!(post.like_count(), 2);
        assert!(post.is_liked_by(7));
        assert!(post.is_liked_by(8));
        assert!(!post.is_liked_by(9));
    }

    #[test]
    fn test_like_count_falls_back_to_reported_count() {
        let post: Post = serde_json::from_value(json!({
            "id": 2,
            "content": "y",
            "likes_count": 5
        }))
        .unwrap();

        assert_eq!(post.like_count(), 5);
        assert!(!post.is_liked_by(7));
    }
}
