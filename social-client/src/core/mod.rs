//! # Core Abstractions
//!
//! Error types and injection seams shared by every service in the crate.
//!
//! ## Modules
//!
//! - **[`error`]**: Normalized error taxonomy (`ApiError`, `Result<T>`)
//! - **[`service`]**: Traits for injected collaborators (`SessionStore`,
//!   `LoginRedirect`) and the mockable `SocialService` facade
//!
//! ## Dependency Injection
//!
//! The API client never touches ambient global state. Storage and the
//! "go to login" action are passed in at construction:
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use social_client::config::ClientConfig;
//! use social_client::core::service::LogRedirect;
//! use social_client::services::api::ApiClient;
//! use social_client::services::store::MemorySessionStore;
//!
//! let client = ApiClient::new(
//!     ClientConfig::from_env(),
//!     Arc::new(MemorySessionStore::new()),
//!     Arc::new(LogRedirect),
//! )?;
//! # Ok::<(), social_client::ApiError>(())
//! ```

pub mod error;
pub mod service;

pub use error::{ApiError, AuthFailure, FieldErrors, Result};
pub use service::{LogRedirect, LoginRedirect, SessionKey, SessionStore, SocialService};
