//! # User Directory Endpoint

use shared::User;

use super::client::ApiClient;
use super::request::{Listing, RequestDescriptor};
use super::routes;
use crate::core::error::Result;

/// User endpoint group
pub struct UsersApi<'a> {
    client: &'a ApiClient,
}

impl<'a> UsersApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Every user known to the backend
    pub async fn list_all(&self) -> Result<Vec<User>> {
        let listing: Listing<User> = self.client.execute(RequestDescriptor::get(routes::USERS)).await?;
        Ok(listing.into_vec())
    }
}
