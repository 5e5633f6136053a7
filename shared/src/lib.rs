//! # Shared Data Transfer Objects Library
//!
//! This library defines the wire contract between the social client and the
//! REST backend. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Login, registration, token refresh, profile updates
//!   - **[`dto::posts`]**: Feed posts and comments
//!   - **[`dto::users`]**: User records (profiles, followers, following)
//!
//! ## Wire Format
//!
//! - Field names are **snake_case** in both Rust and JSON
//! - Optional request fields are omitted when `None`, except where the backend
//!   expects an explicit `null` (post image)
//! - Response types are lenient: missing optional fields default instead of
//!   failing the whole decode
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::auth::LoginRequest;
//!
//! let request = LoginRequest {
//!     username: "ana".to_string(),
//!     password: "secret12".to_string(),
//! };
//!
//! let body = serde_json::to_value(&request).unwrap();
//! assert_eq!(body["username"], "ana");
//! ```

pub mod dto;

// Wildcard re-exports: shared is a DTO library where every type is public API
pub use dto::*;
