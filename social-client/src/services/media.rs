//! # Media Host Uploader
//!
//! Uploads images to the third-party media host and returns the hosted URL,
//! which is then sent to the backend as a plain string (post `image`, profile
//! `profile_picture`).
//!
//! The media host is an opaque collaborator: no bearer token, no refresh, no
//! retries.

use reqwest::{Client, StatusCode};
use serde::Deserialize;

use super::api::request::{build_form, FormField, ImageFile};
use crate::config::MediaConfig;
use crate::core::error::{ApiError, Result};
use crate::utils::validation::validate_image;

/// What the media host reports for a stored image
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct UploadedImage {
    pub secure_url: String,
    #[serde(default)]
    pub public_id: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub bytes: Option<u64>,
}

pub struct MediaUploader {
    http: Client,
    endpoint: String,
    config: MediaConfig,
}

impl MediaUploader {
    pub fn new(config: MediaConfig) -> Result<Self> {
        let http = Client::builder()
            .build()
            .map_err(|e| ApiError::Config(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: config.upload_url(),
            config,
        })
    }

    /// Point the uploader at a different endpoint (tests, proxies).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Validate and upload one image.
    #[tracing::instrument(skip(self, image), fields(file_name = %image.file_name, size = image.size()))]
    pub async fn upload(&self, image: &ImageFile) -> Result<UploadedImage> {
        if let Some(error) = validate_image(&image.mime_type, image.size()).error {
            return Err(ApiError::InvalidInput(error));
        }

        let form = build_form(&[
            FormField::File {
                name: "file".to_string(),
                file: image.clone(),
            },
            FormField::Text {
                name: "upload_preset".to_string(),
                value: self.config.upload_preset.clone(),
            },
            FormField::Text {
                name: "folder".to_string(),
                value: self.config.folder.clone(),
            },
        ])?;

        let response = self
            .http
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Media upload network error");
                ApiError::Network(e.to_string())
            })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !status.is_success() {
            let error = match ApiError::from_response(status, &body) {
                // Not our session: the media host rejected the preset
                ApiError::AuthExpired => ApiError::Validation {
                    status: StatusCode::UNAUTHORIZED,
                    detail: Some("media host rejected the upload".to_string()),
                    fields: Default::default(),
                },
                other => other,
            };
            tracing::warn!(status = status.as_u16(), error = %error, "Media upload failed");
            return Err(error);
        }

        let uploaded: UploadedImage = serde_json::from_slice(&body)?;
        tracing::info!(url = %uploaded.secure_url, "Image uploaded");
        Ok(uploaded)
    }
}
