//! # API Client
//!
//! Main HTTP client for backend API communication.
//!
//! ## Request Lifecycle
//!
//! ```text
//! execute(request)
//!   │
//!   ├── attach stored access token as `Authorization: Bearer ...`
//!   ├── send ──► 2xx ─────────────────────────────► decode body
//!   │     └────► 401, not yet retried
//!   │              ├── no refresh token ──► clear session, redirect, AuthFailed
//!   │              ├── POST /token/refresh/ fails ──► clear session, redirect, AuthFailed
//!   │              └── new access token stored ──► replay once ──► decode / error
//!   └────────► any other failure ─────────────────► ApiError
//! ```
//!
//! Refreshes are single-flight: concurrent requests that hit a 401 together
//! queue on one async mutex, and whoever comes second picks up the token the
//! first one stored instead of calling the refresh endpoint again.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::{Comment, Post, TokenRefreshRequest, TokenRefreshResponse, User};
use tokio::sync::Mutex;

use super::auth::AuthApi;
use super::follows::FollowsApi;
use super::posts::{NewPost, PostsApi};
use super::request::{decode, RequestDescriptor};
use super::routes;
use super::users::UsersApi;
use crate::config::ClientConfig;
use crate::core::error::{ApiError, AuthFailure, Result};
use crate::core::service::{LoginRedirect, SessionKey, SessionStore, SocialService};

/// HTTP client for the social backend.
///
/// Cheap to share: wrap it in an `Arc` or hand out the borrowed endpoint
/// groups ([`ApiClient::auth`], [`ApiClient::posts`], ...).
pub struct ApiClient {
    pub(crate) http: Client,
    config: ClientConfig,
    api_root: String,
    store: Arc<dyn SessionStore>,
    redirect: Arc<dyn LoginRedirect>,
    refresh_lock: Mutex<()>,
}

impl ApiClient {
    /// Create a new API client.
    ///
    /// Every request carries `Content-Type: application/json` unless it has a
    /// multipart body, which sets its own boundary content type.
    pub fn new(
        config: ClientConfig,
        store: Arc<dyn SessionStore>,
        redirect: Arc<dyn LoginRedirect>,
    ) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ApiError::Config(e.to_string()))?;

        let api_root = config.api_root();
        tracing::info!(
            api_root = %api_root,
            contract_revision = routes::CONTRACT_REVISION,
            "API client configured"
        );

        Ok(Self {
            http,
            config,
            api_root,
            store,
            redirect,
            refresh_lock: Mutex::new(()),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The session store this client reads tokens from.
    pub fn store(&self) -> &Arc<dyn SessionStore> {
        &self.store
    }

    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    pub fn posts(&self) -> PostsApi<'_> {
        PostsApi::new(self)
    }

    pub fn follows(&self) -> FollowsApi<'_> {
        FollowsApi::new(self)
    }

    pub fn users(&self) -> UsersApi<'_> {
        UsersApi::new(self)
    }

    /// Send a request, refreshing the access token and replaying once on a
    /// first 401.
    #[tracing::instrument(
        skip(self, request),
        fields(method = %request.method(), path = %request.path())
    )]
    pub async fn execute<T: DeserializeOwned>(&self, mut request: RequestDescriptor) -> Result<T> {
        let start = Instant::now();
        let token = self.store.get(SessionKey::AccessToken)?;

        let (status, body) = self.dispatch(&request, token.as_deref()).await?;
        if status.is_success() {
            tracing::debug!(status = status.as_u16(), duration_ms = start.elapsed().as_millis(), "Request completed");
            return decode(&body);
        }

        if status != StatusCode::UNAUTHORIZED || request.is_retried() {
            return Err(self.reject(status, &body, start));
        }

        request.mark_retried();
        tracing::info!("Access token rejected, refreshing");
        let fresh = self.renew_access_token(token.as_deref()).await?;

        let (status, body) = self.dispatch(&request, Some(&fresh)).await?;
        if status.is_success() {
            tracing::debug!(
                status = status.as_u16(),
                retried = true,
                duration_ms = start.elapsed().as_millis(),
                "Request completed after refresh"
            );
            return decode(&body);
        }

        Err(self.reject(status, &body, start))
    }

    /// Send one attempt and read the whole body.
    async fn dispatch(&self, request: &RequestDescriptor, token: Option<&str>) -> Result<(StatusCode, Vec<u8>)> {
        let response = request
            .build(&self.http, &self.api_root, token)?
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Network error");
                ApiError::Network(e.to_string())
            })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to read response body");
            ApiError::Network(e.to_string())
        })?;

        Ok((status, body.to_vec()))
    }

    fn reject(&self, status: StatusCode, body: &[u8], start: Instant) -> ApiError {
        let error = ApiError::from_response(status, body);
        tracing::warn!(
            status = status.as_u16(),
            error = %error,
            duration_ms = start.elapsed().as_millis(),
            "Request failed"
        );
        error
    }

    /// Produce an access token newer than `stale`.
    ///
    /// Terminates the session when no refresh token is stored or the refresh
    /// call fails.
    async fn renew_access_token(&self, stale: Option<&str>) -> Result<String> {
        let _guard = self.refresh_lock.lock().await;

        // Another request may have refreshed while this one waited
        if let Some(current) = self.store.get(SessionKey::AccessToken)? {
            if Some(current.as_str()) != stale {
                tracing::debug!("Reusing access token refreshed by a concurrent request");
                return Ok(current);
            }
        }

        let Some(refresh) = self.store.get(SessionKey::RefreshToken)? else {
            tracing::warn!("No refresh token available");
            self.end_session();
            return Err(ApiError::AuthFailed(AuthFailure::MissingRefreshToken));
        };

        match self.request_refresh(&refresh).await {
            Ok(access) => {
                self.store.set(SessionKey::AccessToken, &access)?;
                tracing::info!("Access token refreshed");
                Ok(access)
            }
            Err(e) => {
                tracing::error!(error = %e, "Token refresh failed");
                self.end_session();
                Err(ApiError::AuthFailed(AuthFailure::Refresh(Box::new(e))))
            }
        }
    }

    /// Call the refresh endpoint directly, bypassing the interceptors.
    async fn request_refresh(&self, refresh: &str) -> Result<String> {
        let url = format!("{}{}", self.api_root, routes::TOKEN_REFRESH);
        let request = TokenRefreshRequest {
            refresh: refresh.to_string(),
        };

        let response = self
            .http
            .post(url)
            .json(&request)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(ApiError::from_response(status, &body));
        }

        let TokenRefreshResponse { access } = serde_json::from_slice(&body)?;
        Ok(access)
    }

    /// Clear every session key and send the user to login.
    fn end_session(&self) {
        if let Err(e) = self.store.clear() {
            tracing::error!(error = %e, "Failed to clear session");
        }
        self.redirect.redirect_to_login();
    }
}

// Implement SocialService trait for ApiClient
#[async_trait]
impl SocialService for ApiClient {
    async fn list_posts(&self) -> Result<Vec<Post>> {
        self.posts().list().await
    }

    async fn create_post(&self, post: NewPost) -> Result<Post> {
        self.posts().create(post).await
    }

    async fn like_post(&self, post_id: i64) -> Result<Value> {
        self.posts().like(post_id).await
    }

    async fn unlike_post(&self, post_id: i64) -> Result<Value> {
        self.posts().unlike(post_id).await
    }

    async fn comment_post(&self, post_id: i64, text: &str) -> Result<Comment> {
        self.posts().comment(post_id, text).await
    }

    async fn follow(&self, user_id: i64) -> Result<Value> {
        self.follows().follow(user_id).await
    }

    async fn unfollow(&self, user_id: i64) -> Result<Value> {
        self.follows().unfollow(user_id).await
    }

    async fn list_following(&self) -> Result<Vec<User>> {
        self.follows().list_following().await
    }

    async fn list_followers(&self) -> Result<Vec<User>> {
        self.follows().list_followers().await
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        self.users().list_all().await
    }
}
