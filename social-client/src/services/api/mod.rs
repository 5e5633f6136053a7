//! # Backend API Client Module
//!
//! HTTP client for the social backend: bearer token attachment, one-shot
//! token refresh on 401, and typed endpoint groups.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs      - Module exports and documentation
//! ├── client.rs   - ApiClient: interceptors, refresh-and-replay
//! ├── request.rs  - Replayable request descriptors, image attachments
//! ├── routes.rs   - Canonical endpoint contract
//! ├── auth.rs     - Register, login, profile update
//! ├── posts.rs    - Feed, post CRUD, likes, comments
//! ├── follows.rs  - Follow / unfollow, follower lists
//! └── users.rs    - User directory
//! ```

pub mod auth;
pub mod client;
pub mod follows;
pub mod posts;
pub mod request;
pub mod routes;
pub mod users;

pub use auth::{AuthApi, ProfileUpdate, Registration};
pub use client::ApiClient;
pub use follows::FollowsApi;
pub use posts::{NewPost, PostsApi};
pub use request::{FormField, Image, ImageFile, RequestBody, RequestDescriptor};
pub use users::UsersApi;
