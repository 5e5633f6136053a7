//! # Session Manager
//!
//! Login, registration, logout and the cached user record.
//!
//! The API client only *reads* the access token (and replaces it on refresh).
//! Creating and destroying a session happens here:
//!
//! ```text
//! login ──► POST /auth/login/ ──► access_token, refresh_token, user ──► store
//! logout ─────────────────────────────────────────────────────────────► clear
//! ```

use std::sync::Arc;

use serde_json::Value;
use shared::{LoginRequest, User};

use super::api::{ApiClient, ProfileUpdate, Registration};
use crate::core::error::{ApiError, Result};
use crate::core::service::{SessionKey, SessionStore};
use crate::utils::validation::{validate_login, validate_registration};

/// Owns the session lifecycle on top of an [`ApiClient`].
#[derive(Clone)]
pub struct SessionManager {
    client: Arc<ApiClient>,
}

impl SessionManager {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    fn store(&self) -> &dyn SessionStore {
        self.client.store().as_ref()
    }

    /// Log in and persist the session.
    ///
    /// Returns the user record when the backend sent one in a recognizable
    /// shape.
    pub async fn login(&self, username: &str, password: &str) -> Result<Option<User>> {
        if let Some(error) = validate_login(username, password).error {
            return Err(ApiError::InvalidInput(error));
        }

        let credentials = LoginRequest {
            username: username.trim().to_string(),
            password: password.to_string(),
        };
        let response = self.client.auth().login(&credentials).await?;

        let Some(access) = response.access else {
            tracing::error!("Login response carried no access token");
            return Err(ApiError::Decode(
                "login response carried no access token".to_string(),
            ));
        };

        let store = self.store();
        store.set(SessionKey::AccessToken, &access)?;
        match &response.refresh {
            Some(refresh) => store.set(SessionKey::RefreshToken, refresh)?,
            // A refresh token from an earlier session does not belong to this one
            None => store.remove(SessionKey::RefreshToken)?,
        }

        let user = match &response.user {
            Some(raw) => self.cache_user(raw)?,
            None => {
                store.remove(SessionKey::User)?;
                None
            }
        };

        tracing::info!(username = %credentials.username, "Login successful");
        Ok(user)
    }

    /// Register a new account. Validated locally before anything is sent.
    ///
    /// Does not log in; call [`SessionManager::login`] afterwards.
    pub async fn register(&self, registration: Registration) -> Result<Value> {
        if let Some(error) = validate_registration(&registration.fields).error {
            return Err(ApiError::InvalidInput(error));
        }

        self.client.auth().register(registration).await
    }

    /// Forget the session.
    pub fn logout(&self) -> Result<()> {
        self.store().clear()?;
        tracing::info!("Logged out");
        Ok(())
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.store().get(SessionKey::AccessToken), Ok(Some(_)))
    }

    /// The cached user record; `None` when absent or unreadable.
    pub fn current_user(&self) -> Option<User> {
        let raw = self.store().get(SessionKey::User).ok()??;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring unreadable cached user");
                None
            }
        }
    }

    /// Replace the cached user record.
    pub fn update_user(&self, user: &User) -> Result<()> {
        let raw = serde_json::to_string(user)?;
        self.store().set(SessionKey::User, &raw)
    }

    /// Update the profile and refresh the cached user record from the reply.
    pub async fn update_profile(&self, update: ProfileUpdate) -> Result<Option<User>> {
        let body = self.client.auth().update_profile(update).await?;
        let raw = match body.get("user") {
            Some(user) if !user.is_null() => user.clone(),
            _ => body,
        };

        if raw.is_null() {
            return Ok(self.current_user());
        }
        self.cache_user(&raw)
    }

    fn cache_user(&self, raw: &Value) -> Result<Option<User>> {
        self.store().set(SessionKey::User, &serde_json::to_string(raw)?)?;
        Ok(serde_json::from_value(raw.clone()).ok())
    }
}
