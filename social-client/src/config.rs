//! Client configuration from environment variables

use std::path::PathBuf;
use std::time::Duration;

/// Backend used when `SOCIAL_API_URL` is not set
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Path prefix every backend route lives under
pub const API_PREFIX: &str = "/api";

/// API client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend origin, without the `/api` prefix (e.g. "https://social.example.com")
    pub base_url: String,
    /// Whole-request timeout. `None` leaves it to the transport defaults.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let base_url = std::env::var("SOCIAL_API_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Self {
            base_url: normalize_base_url(&base_url),
            timeout: std::env::var("SOCIAL_API_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs),
        }
    }

    /// Configuration pointing at an explicit backend origin
    pub fn with_base_url(base_url: impl AsRef<str>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.as_ref()),
            ..Self::default()
        }
    }

    /// Root of all API routes, e.g. "http://127.0.0.1:8000/api"
    pub fn api_root(&self) -> String {
        format!("{}{}", self.base_url, API_PREFIX)
    }
}

/// Media host (image upload) configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaConfig {
    pub cloud_name: String,
    /// Unsigned upload preset configured on the media host
    pub upload_preset: String,
    /// Folder uploads are filed under
    pub folder: String,
}

impl MediaConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` when the cloud name or upload preset is missing.
    pub fn from_env() -> Option<Self> {
        let cloud_name = std::env::var("SOCIAL_MEDIA_CLOUD_NAME").ok()?;
        let upload_preset = std::env::var("SOCIAL_MEDIA_UPLOAD_PRESET").ok()?;

        Some(Self {
            cloud_name,
            upload_preset,
            folder: std::env::var("SOCIAL_MEDIA_FOLDER")
                .unwrap_or_else(|_| "social_api".to_string()),
        })
    }

    /// Image upload endpoint for this cloud
    pub fn upload_url(&self) -> String {
        format!(
            "https://api.cloudinary.com/v1_1/{}/image/upload",
            self.cloud_name
        )
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Log directory (for rotation)
    pub log_dir: PathBuf,
    /// Log level filter (e.g., "social_client=debug,info")
    pub log_level: String,
    /// Also write human-readable logs to stdout
    pub stdout: bool,
    /// Write the log file as JSON lines instead of plain text
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            log_level: "social_client=info,warn".to_string(),
            stdout: false,
            json: false,
        }
    }
}

impl LogConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            log_dir: std::env::var("SOCIAL_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("logs")),
            log_level: std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "social_client=info,warn".to_string()),
            stdout: std::env::var("SOCIAL_LOG_STDOUT")
                .map(|v| v == "1")
                .unwrap_or(false),
            json: std::env::var("SOCIAL_LOG_FORMAT")
                .map(|v| v.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
        }
    }
}

fn normalize_base_url(url: &str) -> String {
    let trimmed = url.trim().trim_end_matches('/');
    trimmed
        .strip_suffix(API_PREFIX)
        .unwrap_or(trimmed)
        .to_string()
}
