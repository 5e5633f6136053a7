//! # Follow Endpoints
//!
//! Follow relationships between users.

use serde_json::Value;
use shared::User;

use super::client::ApiClient;
use super::request::{Listing, RequestDescriptor};
use super::routes;
use crate::core::error::Result;

/// Follow endpoint group
pub struct FollowsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> FollowsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Follow another user
    pub async fn follow(&self, user_id: i64) -> Result<Value> {
        tracing::info!(user_id, "Following user");
        self.client.execute(RequestDescriptor::post(routes::follow(user_id))).await
    }

    /// Stop following a user
    pub async fn unfollow(&self, user_id: i64) -> Result<Value> {
        tracing::info!(user_id, "Unfollowing user");
        self.client.execute(RequestDescriptor::delete(routes::unfollow(user_id))).await
    }

    /// Users the current user follows
    pub async fn list_following(&self) -> Result<Vec<User>> {
        let listing: Listing<User> = self.client.execute(RequestDescriptor::get(routes::FOLLOWING)).await?;
        Ok(listing.into_vec())
    }

    /// Users following the current user
    pub async fn list_followers(&self) -> Result<Vec<User>> {
        let listing: Listing<User> = self.client.execute(RequestDescriptor::get(routes::FOLLOWERS)).await?;
        Ok(listing.into_vec())
    }
}
