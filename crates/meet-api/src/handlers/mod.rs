//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod admin;
pub mod auth;
pub mod content;
pub mod events;
pub mod health;
pub mod profile;
pub mod users;

use axum::extract::Multipart;

use crate::response::ApiError;

/// An uploaded file pulled out of a multipart body
#[derive(Debug)]
pub struct FileUpload {
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Read the expected file field from a multipart body
///
/// Prefers the field with the given name; falls back to the first field
/// carrying a filename.
pub async fn read_image_field(
    mut multipart: Multipart,
    field_name: &str,
) -> Result<FileUpload, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::invalid_multipart(e.to_string()))?
    {
        let is_match = field.name() == Some(field_name) || field.file_name().is_some();
        if !is_match {
            continue;
        }

        let filename = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::invalid_multipart(e.to_string()))?
            .to_vec();

        return Ok(FileUpload {
            filename,
            content_type,
            bytes,
        });
    }

    Err(ApiError::invalid_multipart(format!(
        "Missing file field '{field_name}'"
    )))
}
