//! # Post Endpoints
//!
//! Feed listing, post CRUD, likes and comments.

use serde_json::Value;
use shared::{Comment, CommentRequest, CreatePostRequest, Post, UpdatePostRequest};

use super::client::ApiClient;
use super::request::{FormField, Image, Listing, RequestDescriptor};
use super::routes;
use crate::core::error::{ApiError, Result};
use crate::utils::validation::{validate_comment, validate_post};

/// A post about to be published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub content: String,
    pub image: Option<Image>,
}

impl NewPost {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            image: None,
        }
    }

    pub fn with_image(mut self, image: Image) -> Self {
        self.image = Some(image);
        self
    }

    fn into_request(self) -> Result<RequestDescriptor> {
        let content = self.content.trim().to_string();

        match self.image {
            Some(Image::File(file)) => Ok(RequestDescriptor::post(routes::POSTS).multipart(vec![
                FormField::Text {
                    name: "content".to_string(),
                    value: content,
                },
                FormField::File {
                    name: "image".to_string(),
                    file,
                },
            ])),
            image => {
                let body = CreatePostRequest {
                    content,
                    image: match image {
                        Some(Image::Url(url)) => Some(url),
                        _ => None,
                    },
                };
                RequestDescriptor::post(routes::POSTS).json(&body)
            }
        }
    }
}

/// Post endpoint group
pub struct PostsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> PostsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// The feed
    pub async fn list(&self) -> Result<Vec<Post>> {
        let listing: Listing<Post> = self.client.execute(RequestDescriptor::get(routes::POSTS)).await?;
        Ok(listing.into_vec())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Post> {
        self.client.execute(RequestDescriptor::get(routes::post(id))).await
    }

    /// Publish a post. Rejected locally when it has neither text nor image.
    pub async fn create(&self, post: NewPost) -> Result<Post> {
        let has_image = post.image.is_some();
        if let Some(error) = validate_post(&post.content, has_image).error {
            return Err(ApiError::InvalidInput(error));
        }

        tracing::info!(has_image, "Creating post");
        self.client.execute(post.into_request()?).await
    }

    pub async fn update(&self, id: i64, fields: &UpdatePostRequest) -> Result<Post> {
        let request = RequestDescriptor::put(routes::post(id)).json(fields)?;
        self.client.execute(request).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        tracing::info!(post_id = id, "Deleting post");
        // Body, if any, is irrelevant
        let _: Value = self.client.execute(RequestDescriptor::delete(routes::post(id))).await?;
        Ok(())
    }

    pub async fn like(&self, id: i64) -> Result<Value> {
        self.client.execute(RequestDescriptor::post(routes::post_like(id))).await
    }

    pub async fn unlike(&self, id: i64) -> Result<Value> {
        self.client.execute(RequestDescriptor::delete(routes::post_unlike(id))).await
    }

    pub async fn comment(&self, id: i64, text: &str) -> Result<Comment> {
        if let Some(error) = validate_comment(text).error {
            return Err(ApiError::InvalidInput(error));
        }

        let body = CommentRequest {
            content: text.to_string(),
        };
        let request = RequestDescriptor::post(routes::post_comment(id)).json(&body)?;
        self.client.execute(request).await
    }

    pub async fn get_comments(&self, id: i64) -> Result<Vec<Comment>> {
        let listing: Listing<Comment> = self
            .client
            .execute(RequestDescriptor::get(routes::post_comments(id)))
            .await?;
        Ok(listing.into_vec())
    }
}
