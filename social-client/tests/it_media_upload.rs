//! Integration tests for the media host uploader

use mockito::{Matcher, Server};
use social_client::config::MediaConfig;
use social_client::services::api::ImageFile;
use social_client::services::media::MediaUploader;
use social_client::utils::validation::MAX_IMAGE_BYTES;
use social_client::ApiError;

fn uploader(server_url: &str) -> MediaUploader {
    let config = MediaConfig {
        cloud_name: "demo".to_string(),
        upload_preset: "unsigned_posts".to_string(),
        folder: "social_api".to_string(),
    };

    MediaUploader::new(config)
        .expect("uploader should build")
        .with_endpoint(format!("{}/v1_1/demo/image/upload", server_url))
}

#[tokio::test]
async fn upload_returns_secure_url() {
    //* Given
    let mut server = Server::new_async().await;

    let upload_mock = server
        .mock("POST", "/v1_1/demo/image/upload")
        .match_header("authorization", Matcher::Missing)
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="file"; filename="cat.png""#.to_string()),
            Matcher::Regex(r#"name="upload_preset""#.to_string()),
            Matcher::Regex("unsigned_posts".to_string()),
            Matcher::Regex(r#"name="folder""#.to_string()),
        ]))
        .with_status(200)
        .with_body(
            r#"{
                "public_id": "social_api/cat",
                "secure_url": "https://res.cloudinary.com/demo/image/upload/social_api/cat.png",
                "format": "png",
                "width": 64,
                "height": 64,
                "bytes": 7
            }"#,
        )
        .expect(1)
        .create_async()
        .await;

    let image = ImageFile::new("cat.png", "image/png", b"PNGDATA".to_vec());

    //* When
    let uploaded = uploader(&server.url())
        .upload(&image)
        .await
        .expect("upload should succeed");

    //* Then
    upload_mock.assert_async().await;
    assert_eq!(
        uploaded.secure_url,
        "https://res.cloudinary.com/demo/image/upload/social_api/cat.png"
    );
    assert_eq!(uploaded.width, Some(64));
}

#[tokio::test]
async fn non_image_is_rejected_before_upload() {
    //* Given
    let mut server = Server::new_async().await;

    let upload_mock = server
        .mock("POST", "/v1_1/demo/image/upload")
        .expect(0)
        .create_async()
        .await;

    let pdf = ImageFile::new("doc.pdf", "application/pdf", b"%PDF".to_vec());
    let huge = ImageFile::new("big.png", "image/png", vec![0; MAX_IMAGE_BYTES + 1]);

    //* When
    let uploader = uploader(&server.url());
    let pdf_result = uploader.upload(&pdf).await;
    let huge_result = uploader.upload(&huge).await;

    //* Then
    upload_mock.assert_async().await;
    assert!(matches!(pdf_result, Err(ApiError::InvalidInput(_))));
    assert!(matches!(huge_result, Err(ApiError::InvalidInput(_))));
}

#[tokio::test]
async fn host_rejection_is_classified() {
    //* Given
    let mut server = Server::new_async().await;

    let upload_mock = server
        .mock("POST", "/v1_1/demo/image/upload")
        .with_status(400)
        .with_body(r#"{"error": {"message": "Upload preset not found"}}"#)
        .expect(1)
        .create_async()
        .await;

    let image = ImageFile::new("cat.png", "image/png", b"PNGDATA".to_vec());

    //* When
    let result = uploader(&server.url()).upload(&image).await;

    //* Then
    upload_mock.assert_async().await;
    match result {
        Err(ApiError::Validation { detail, .. }) => {
            assert!(detail.unwrap_or_default().contains("Upload preset not found"));
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}
