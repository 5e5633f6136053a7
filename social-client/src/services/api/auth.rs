//! # Authentication Endpoints
//!
//! Registration, login, and profile updates.
//!
//! These calls only talk to the backend. Persisting the tokens a login
//! returns is the session manager's job (see [`crate::services::session`]).

use serde_json::Value;
use shared::{LoginRequest, LoginResponse, ProfileUpdateRequest, RegisterRequest};

use super::client::ApiClient;
use super::request::{multipart_fields, ImageFile, RequestDescriptor};
use super::routes;
use crate::core::error::Result;

/// Registration form: text fields plus an optional avatar file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registration {
    pub fields: RegisterRequest,
    pub avatar: Option<ImageFile>,
}

/// Profile edit: text fields (and/or a hosted picture URL) plus an optional
/// picture file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub fields: ProfileUpdateRequest,
    pub profile_picture: Option<ImageFile>,
}

/// Authentication endpoint group
pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Register a new user. Multipart when an avatar file is attached.
    #[tracing::instrument(skip(self, registration), fields(username = %registration.fields.username))]
    pub async fn register(&self, registration: Registration) -> Result<Value> {
        tracing::info!("Registering user");

        let request = match &registration.avatar {
            Some(avatar) => RequestDescriptor::post(routes::REGISTER)
                .multipart(multipart_fields(&registration.fields, "avatar", avatar)?),
            None => RequestDescriptor::post(routes::REGISTER).json(&registration.fields)?,
        };

        self.client.execute(request).await
    }

    /// Login with username and password.
    #[tracing::instrument(skip(self, credentials), fields(username = %credentials.username))]
    pub async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse> {
        tracing::info!("Attempting login");

        let request = RequestDescriptor::post(routes::LOGIN).json(credentials)?;
        let body: Value = self.client.execute(request).await?;

        Ok(LoginResponse::from_body(body))
    }

    /// Update the current user's profile. Multipart when a picture file is
    /// attached.
    pub async fn update_profile(&self, update: ProfileUpdate) -> Result<Value> {
        tracing::info!(with_picture = update.profile_picture.is_some(), "Updating profile");

        let request = match &update.profile_picture {
            Some(picture) => RequestDescriptor::put(routes::PROFILE)
                .multipart(multipart_fields(&update.fields, "profile_picture", picture)?),
            None => RequestDescriptor::put(routes::PROFILE).json(&update.fields)?,
        };

        self.client.execute(request).await
    }
}
