//! # Endpoint Routes
//!
//! The canonical endpoint contract, relative to `<base_url>/api`.
//!
//! Earlier backend revisions disagreed on a few routes (`unlike` as POST,
//! profile under `/auth/profile/`, follow paths without `/users/`). This
//! client speaks revision [`CONTRACT_REVISION`] only:
//!
//! ```text
//! POST   /token/refresh/                 { refresh } -> { access }
//! POST   /auth/register/                 JSON or multipart (avatar)
//! POST   /auth/login/                    { username, password }
//! PUT    /auth/me/                       JSON or multipart (profile_picture)
//! GET    /posts/                         feed
//! POST   /posts/                         JSON or multipart (image)
//! GET    /posts/{id}/
//! PUT    /posts/{id}/
//! DELETE /posts/{id}/
//! POST   /posts/{id}/like/
//! DELETE /posts/{id}/unlike/
//! POST   /posts/{id}/comment/            { content }
//! GET    /posts/{id}/comments/
//! POST   /follows/users/{id}/follow/
//! DELETE /follows/users/{id}/unfollow/
//! GET    /follows/following/
//! GET    /follows/followers/
//! GET    /users/
//! ```

/// Revision of the endpoint contract above
pub const CONTRACT_REVISION: u32 = 2;

pub const TOKEN_REFRESH: &str = "/token/refresh/";

pub const REGISTER: &str = "/auth/register/";
pub const LOGIN: &str = "/auth/login/";
pub const PROFILE: &str = "/auth/me/";

pub const POSTS: &str = "/posts/";

pub const FOLLOWING: &str = "/follows/following/";
pub const FOLLOWERS: &str = "/follows/followers/";

pub const USERS: &str = "/users/";

pub fn post(id: i64) -> String {
    format!("/posts/{}/", id)
}

pub fn post_like(id: i64) -> String {
    format!("/posts/{}/like/", id)
}

pub fn post_unlike(id: i64) -> String {
    format!("/posts/{}/unlike/", id)
}

pub fn post_comment(id: i64) -> String {
    format!("/posts/{}/comment/", id)
}

pub fn post_comments(id: i64) -> String {
    format!("/posts/{}/comments/", id)
}

pub fn follow(user_id: i64) -> String {
    format!("/follows/users/{}/follow/", user_id)
}

pub fn unfollow(user_id: i64) -> String {
    format!("/follows/users/{}/unfollow/", user_id)
}
