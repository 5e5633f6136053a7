//! # Data Transfer Objects (DTOs)
//!
//! Data structures exchanged with the social backend under `/api`.
//!
//! ## Module Organization
//!
//! - [`auth`] - Login, registration, token refresh, profile update
//! - [`posts`] - Posts, comments and their request bodies
//! - [`users`] - User records returned by auth, follows and user listing
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/auth/login/
//! Content-Type: application/json
//!
//! { "username": "ana", "password": "secret12" }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "access": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
//!   "refresh": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
//!   "user": { "id": 7, "username": "ana" }
//! }
//! ```

pub mod auth;
pub mod posts;
pub mod users;

pub use auth::*;
pub use posts::*;
pub use users::*;
