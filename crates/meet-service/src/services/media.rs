//! Media service
//!
//! Validates uploaded images, derives deterministic object names, writes
//! them to the media store, and persists the resulting URL.

use chrono::Utc;
use meet_core::{DomainError, Snowflake};
use tracing::{info, instrument, warn};

use crate::dto::{ImageUploadResponse, PhotoUploadResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Media service
pub struct MediaService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MediaService<'a> {
    /// Create a new MediaService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Upload the current user's profile photo
    ///
    /// The object name is fixed per user, so a new upload replaces the
    /// previous photo.
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    pub async fn upload_profile_photo(
        &self,
        user_id: Snowflake,
        filename: Option<&str>,
        content_type: Option<&str>,
        bytes: &[u8],
    ) -> ServiceResult<PhotoUploadResponse> {
        require_image(content_type)?;

        let mut user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        let ext = file_extension(filename);
        let name = format!("user_{user_id}_profile.{ext}");
        let previous = user.profile_photo.clone();
        let photo_url = self
            .ctx
            .media_store()
            .store(&name, bytes)
            .await
            .map_err(DomainError::from)?;

        user.set_profile_photo(Some(photo_url.clone()));
        self.ctx.user_repo().update(&user).await?;

        // A new extension means a new object name; drop the stale one
        if let Some(old_name) = previous.as_deref().and_then(stored_name) {
            if old_name != name {
                if let Err(e) = self.ctx.media_store().remove(old_name).await {
                    warn!(name = %old_name, error = %e, "Failed to remove stale profile photo");
                }
            }
        }

        info!(user_id = %user_id, url = %photo_url, "Profile photo uploaded");

        Ok(PhotoUploadResponse {
            success: true,
            photo_url,
        })
    }

    /// Upload an image for an event; creator or admin only
    ///
    /// Names carry a timestamp, so each upload is a new object.
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    pub async fn upload_event_image(
        &self,
        user_id: Snowflake,
        is_admin: bool,
        event_id: Snowflake,
        filename: Option<&str>,
        content_type: Option<&str>,
        bytes: &[u8],
    ) -> ServiceResult<ImageUploadResponse> {
        let event = self
            .ctx
            .event_repo()
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Event", event_id.to_string()))?;

        if !event.can_modify(user_id, is_admin) {
            return Err(ServiceError::permission_denied("edit this event"));
        }

        require_image(content_type)?;

        let ext = file_extension(filename);
        let name = format!("event_{event_id}_{}.{ext}", Utc::now().timestamp());
        let image_url = self
            .ctx
            .media_store()
            .store(&name, bytes)
            .await
            .map_err(DomainError::from)?;

        self.ctx
            .event_repo()
            .set_image_url(event_id, &image_url)
            .await?;

        info!(event_id = %event_id, url = %image_url, "Event image uploaded");

        Ok(ImageUploadResponse {
            success: true,
            image_url,
        })
    }
}

/// Reject uploads whose declared content type is not an image
fn require_image(content_type: Option<&str>) -> ServiceResult<()> {
    match content_type {
        Some(ct) if ct.starts_with("image/") => Ok(()),
        Some(ct) => Err(ServiceError::from(DomainError::UnsupportedMediaType(
            ct.to_string(),
        ))),
        None => Err(ServiceError::from(DomainError::UnsupportedMediaType(
            "unknown".to_string(),
        ))),
    }
}

/// Object name from a stored public URL (its last path segment)
fn stored_name(url: &str) -> Option<&str> {
    url.rsplit('/').next().filter(|n| !n.is_empty())
}

/// Extension from the uploaded filename, defaulting to `jpg`
fn file_extension(filename: Option<&str>) -> String {
    filename
        .and_then(|f| f.rsplit_once('.').map(|(_, ext)| ext))
        .filter(|ext| !ext.is_empty() && ext.chars().all(char::is_alphanumeric))
        .map_or_else(|| "jpg".to_string(), str::to_lowercase)
}
