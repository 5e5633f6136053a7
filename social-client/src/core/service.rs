//! # Service Traits
//!
//! Seams for dependency injection: where the session lives, what happens when
//! it ends, and a mockable facade over the endpoint groups.

use async_trait::async_trait;
use serde_json::Value;
use shared::{Comment, Post, User};

use super::error::Result;
use crate::services::api::posts::NewPost;

/// Keys persisted by a [`SessionStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionKey {
    AccessToken,
    RefreshToken,
    /// Serialized JSON of the logged-in user's record
    User,
}

impl SessionKey {
    pub const ALL: [SessionKey; 3] = [
        SessionKey::AccessToken,
        SessionKey::RefreshToken,
        SessionKey::User,
    ];

    /// Storage key name
    pub fn as_str(self) -> &'static str {
        match self {
            SessionKey::AccessToken => "access_token",
            SessionKey::RefreshToken => "refresh_token",
            SessionKey::User => "user",
        }
    }
}

/// Client-side key/value storage holding the session.
///
/// Implementations must not hold locks across calls; the API client reads and
/// writes through this trait from concurrently running requests.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: SessionKey) -> Result<Option<String>>;

    fn set(&self, key: SessionKey, value: &str) -> Result<()>;

    fn remove(&self, key: SessionKey) -> Result<()>;

    /// Remove every session key.
    fn clear(&self) -> Result<()> {
        for key in SessionKey::ALL {
            self.remove(key)?;
        }
        Ok(())
    }
}

/// Invoked when the session is terminated and the user must log in again.
pub trait LoginRedirect: Send + Sync {
    fn redirect_to_login(&self);
}

/// Redirect that only records the event. Useful for headless callers.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogRedirect;

impl LoginRedirect for LogRedirect {
    fn redirect_to_login(&self) {
        tracing::warn!("Session terminated, login required");
    }
}

/// Trait for social API operations
///
/// This trait allows UI collaborators to be tested against a mock instead of
/// a live backend.
#[async_trait]
pub trait SocialService: Send + Sync {
    /// List the feed
    async fn list_posts(&self) -> Result<Vec<Post>>;

    /// Publish a post
    async fn create_post(&self, post: NewPost) -> Result<Post>;

    /// Like a post
    async fn like_post(&self, post_id: i64) -> Result<Value>;

    /// Remove a like
    async fn unlike_post(&self, post_id: i64) -> Result<Value>;

    /// Comment on a post
    async fn comment_post(&self, post_id: i64, text: &str) -> Result<Comment>;

    /// Follow a user
    async fn follow(&self, user_id: i64) -> Result<Value>;

    /// Stop following a user
    async fn unfollow(&self, user_id: i64) -> Result<Value>;

    /// Users the current user follows
    async fn list_following(&self) -> Result<Vec<User>>;

    /// Users following the current user
    async fn list_followers(&self) -> Result<Vec<User>>;

    /// Every user known to the backend
    async fn list_users(&self) -> Result<Vec<User>>;
}
