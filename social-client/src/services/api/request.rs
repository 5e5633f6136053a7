//! # Request Descriptors
//!
//! A [`RequestDescriptor`] is everything needed to (re)build one backend
//! call: method, path under `/api`, body, and whether it already went through
//! a token refresh. Multipart bodies are kept as plain fields rather than a
//! `reqwest::multipart::Form`, which is single-use, so the request can be
//! replayed after a refresh.

use std::fmt;
use std::path::Path;

use reqwest::header::AUTHORIZATION;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::error::{ApiError, Result};

/// An image attached to a call that accepts one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Image {
    /// Already hosted; sent as a plain URL in a JSON body
    Url(String),
    /// Raw file; forces a multipart body
    File(ImageFile),
}

/// Image file contents plus the metadata a multipart part needs.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Read an image from disk, guessing the MIME type from the extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .map_err(|e| ApiError::InvalidInput(format!("{}: {}", path.display(), e)))?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        let mime_type = mime_from_extension(path).to_string();

        Ok(Self::new(file_name, mime_type, bytes))
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    pub(crate) fn to_part(&self) -> Result<Part> {
        Part::bytes(self.bytes.clone())
            .file_name(self.file_name.clone())
            .mime_str(&self.mime_type)
            .map_err(|e| ApiError::InvalidInput(format!("invalid MIME type: {}", e)))
    }
}

// Image bytes are noise in logs
impl fmt::Debug for ImageFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageFile")
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("size", &self.bytes.len())
            .finish()
    }
}

fn mime_from_extension(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        _ => "application/octet-stream",
    }
}

/// One multipart form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormField {
    Text { name: String, value: String },
    File { name: String, file: ImageFile },
}

/// Request body.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(Value),
    Multipart(Vec<FormField>),
}

/// A replayable backend call.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    method: Method,
    path: String,
    body: RequestBody,
    retried: bool,
}

impl RequestDescriptor {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: RequestBody::Empty,
            retried: false,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Attach a JSON body.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self> {
        self.body = RequestBody::Json(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Attach a multipart body.
    pub fn multipart(mut self, fields: Vec<FormField>) -> Self {
        self.body = RequestBody::Multipart(fields);
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn body(&self) -> &RequestBody {
        &self.body
    }

    /// Whether this request was already replayed after a token refresh.
    pub fn is_retried(&self) -> bool {
        self.retried
    }

    pub(crate) fn mark_retried(&mut self) {
        self.retried = true;
    }

    /// Build the transport request. `token` becomes the bearer authorization.
    pub(crate) fn build(&self, http: &Client, api_root: &str, token: Option<&str>) -> Result<RequestBuilder> {
        let url = format!("{}{}", api_root, self.path);
        let mut builder = http.request(self.method.clone(), url);

        if let Some(token) = token {
            builder = builder.header(AUTHORIZATION, format!("Bearer {}", token));
        }

        builder = match &self.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(value),
            RequestBody::Multipart(fields) => builder.multipart(build_form(fields)?),
        };

        Ok(builder)
    }
}

pub(crate) fn build_form(fields: &[FormField]) -> Result<Form> {
    fields.iter().try_fold(Form::new(), |form, field| {
        Ok(match field {
            FormField::Text { name, value } => form.text(name.clone(), value.clone()),
            FormField::File { name, file } => form.part(name.clone(), file.to_part()?),
        })
    })
}

/// Flatten a serializable struct into multipart text fields plus one file.
///
/// Null fields are dropped; a text field with the same name as the file is
/// replaced by the file.
pub(crate) fn multipart_fields<T: Serialize>(fields: &T, file_field: &str, file: &ImageFile) -> Result<Vec<FormField>> {
    let Value::Object(map) = serde_json::to_value(fields)? else {
        return Err(ApiError::InvalidInput(
            "multipart fields must serialize to an object".to_string(),
        ));
    };

    let mut form: Vec<FormField> = map
        .into_iter()
        .filter(|(name, _)| name != file_field)
        .filter_map(|(name, value)| {
            let value = match value {
                Value::Null => return None,
                Value::String(text) => text,
                other => other.to_string(),
            };
            Some(FormField::Text { name, value })
        })
        .collect();

    form.push(FormField::File {
        name: file_field.to_string(),
        file: file.clone(),
    });

    Ok(form)
}

/// Decode a success body. An empty body decodes as JSON `null`, so `()`,
/// `Option<T>` and `Value` all accept 204 responses.
pub(crate) fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(serde_json::from_value(Value::Null)?);
    }
    Ok(serde_json::from_slice(body)?)
}

/// List endpoints answer with either a bare array or a paginated envelope.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum Listing<T> {
    Plain(Vec<T>),
    Paged { results: Vec<T> },
}

impl<T> Listing<T> {
    pub(crate) fn into_vec(self) -> Vec<T> {
        match self {
            Listing::Plain(items) | Listing::Paged { results: items } => items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Fields {
        username: String,
        bio: Option<String>,
        age: u32,
        profile_picture: Option<String>,
    }

    #[test]
    fn test_multipart_fields_skip_nulls_and_replace_file_field() {
        let file = ImageFile::new("me.png", "image/png", vec![1, 2, 3]);
        let fields = Fields {
            username: "ana".to_string(),
            bio: None,
            age: 30,
            profile_picture: Some("https://old.example/pic.png".to_string()),
        };

        let form = multipart_fields(&fields, "profile_picture", &file).unwrap();

        assert_eq!(
            form,
            vec![
                FormField::Text { name: "age".to_string(), value: "30".to_string() },
                FormField::Text { name: "username".to_string(), value: "ana".to_string() },
                FormField::File { name: "profile_picture".to_string(), file },
            ]
        );
    }

    #[test]
    fn test_decode_empty_body() {
        decode::<()>(b"").unwrap();
        let value: Value = decode(b"  ").unwrap();
        assert_eq!(value, Value::Null);
        assert!(decode::<Vec<u32>>(b"").is_err());
    }

    #[test]
    fn test_listing_accepts_both_shapes() {
        let plain: Listing<u32> = serde_json::from_value(json!([1, 2])).unwrap();
        let paged: Listing<u32> =
            serde_json::from_value(json!({"count": 2, "next": null, "results": [1, 2]})).unwrap();

        assert_eq!(plain.into_vec(), vec![1, 2]);
        assert_eq!(paged.into_vec(), vec![1, 2]);
    }

    #[test]
    fn test_descriptor_retry_flag() {
        let mut request = RequestDescriptor::get("/posts/");
        assert!(!request.is_retried());
        request.mark_retried();
        assert!(request.is_retried());
        assert_eq!(*request.method(), Method::GET);
    }

    #[test]
    fn test_mime_guess() {
        assert_eq!(mime_from_extension(Path::new("a/b.JPG")), "image/jpeg");
        assert_eq!(mime_from_extension(Path::new("a/b")), "application/octet-stream");
    }
}
