use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Registration request (JSON form, without an avatar file)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    /// Password confirmation, checked by the backend as well
    pub password2: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// Profile update request. Unset fields are left untouched by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileUpdateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Hosted image URL (see the media uploader)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
}

/// Body of `POST /api/token/refresh/`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenRefreshRequest {
    pub refresh: String,
}

/// Response of `POST /api/token/refresh/`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenRefreshResponse {
    pub access: String,
}

/// Login response.
///
/// Backends in the wild disagree on naming, so this is built from the raw body
/// with [`LoginResponse::from_body`] rather than derived:
///
/// - tokens under `access`/`refresh` or `access_token`/`refresh_token`
/// - the user record under `user`, `userData`, or the body itself
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginResponse {
    pub access: Option<String>,
    pub refresh: Option<String>,
    /// Raw user record as sent by the server
    pub user: Option<Value>,
}

impl LoginResponse {
    pub fn from_body(body: Value) -> Self {
        let token = |primary: &str, fallback: &str| {
            body.get(primary)
                .or_else(|| body.get(fallback))
                .and_then(Value::as_str)
                .map(str::to_owned)
        };

        let access = token("access", "access_token");
        let refresh = token("refresh", "refresh_token");

        let user = match body.get("user").or_else(|| body.get("userData")) {
            Some(Value::Null) | None => match &body {
                Value::Object(map) if !map.is_empty() => Some(body.clone()),
                _ => None,
            },
            Some(user) => Some(user.clone()),
        };

        Self {
            access,
            refresh,
            user,
        }
    }
}
