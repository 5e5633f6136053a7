//! # Social Client - Library Root
//!
//! Client library for a social-networking REST backend: authentication,
//! the post feed, profile editing, follow relationships, and image upload
//! glue to a third-party media host.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              social-client (this crate)                │
//! ├────────────────────────────────────────────────────────┤
//! │  Tokio         - Async runtime                         │
//! │  Reqwest       - HTTP client (JSON + multipart)        │
//! │  Serde         - Wire DTOs (via `shared`)              │
//! │  Tracing       - Structured logging                    │
//! └────────────────────────────────────────────────────────┘
//!          │                              │
//!          │ HTTP                         │ HTTP (multipart)
//!          ▼                              ▼
//! ┌─────────────────┐          ┌─────────────────────────┐
//! │  Social backend │          │   Media host            │
//! │  (REST, /api)   │          │   (image storage)       │
//! └─────────────────┘          └─────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **config**: Backend, media host, and logging configuration from the environment
//! - **core**: Error taxonomy and injection seams (`SessionStore`, `LoginRedirect`)
//! - **logging**: Tracing subscriber setup
//! - **services**: API client, session manager, stores, media uploader
//! - **utils**: Client-side form validation
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use social_client::config::ClientConfig;
//! use social_client::core::LogRedirect;
//! use social_client::services::api::ApiClient;
//! use social_client::services::session::SessionManager;
//! use social_client::services::store::FileSessionStore;
//!
//! # async fn run() -> social_client::Result<()> {
//! let client = Arc::new(ApiClient::new(
//!     ClientConfig::from_env(),
//!     Arc::new(FileSessionStore::new("session.json")),
//!     Arc::new(LogRedirect),
//! )?);
//!
//! let session = SessionManager::new(client.clone());
//! session.login("ana", "secret12").await?;
//!
//! for post in client.posts().list().await? {
//!     println!("{}: {}", post.id, post.content);
//! }
//! client.posts().like(42).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Testing
//!
//! ```bash
//! cargo test -p social-client
//! ```
//!
//! HTTP behavior is tested against local `mockito` servers in `tests/`.

pub mod config;
pub mod core;
pub mod logging;
pub mod services;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::{ApiError, Result};
pub use services::api::ApiClient;
pub use services::session::SessionManager;
