//! Site content service
//!
//! Admin-managed key-value pairs for site text, with a public read path.

use meet_core::entities::SiteContent;
use tracing::{info, instrument};

use crate::dto::{ContentResponse, CreateContentRequest, UpdateContentRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Site content service
pub struct ContentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ContentService<'a> {
    /// Create a new ContentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get a content entry by key (public)
    #[instrument(skip(self))]
    pub async fn get_content(&self, key: &str) -> ServiceResult<ContentResponse> {
        let content = self
            .ctx
            .content_repo()
            .find_by_key(key)
            .await?
            .ok_or_else(|| ServiceError::not_found("Content", key))?;

        Ok(ContentResponse::from(&content))
    }

    /// List all content entries
    #[instrument(skip(self))]
    pub async fn list_content(&self) -> ServiceResult<Vec<ContentResponse>> {
        let entries = self.ctx.content_repo().list().await?;
        Ok(entries.iter().map(ContentResponse::from).collect())
    }

    /// Create a content entry; duplicate keys conflict
    #[instrument(skip(self, request), fields(key = %request.key))]
    pub async fn create_content(
        &self,
        request: CreateContentRequest,
    ) -> ServiceResult<ContentResponse> {
        let content = SiteContent::new(self.ctx.generate_id(), request.key, request.value);
        self.ctx.content_repo().create(&content).await?;

        info!(key = %content.key, "Site content created");

        Ok(ContentResponse::from(&content))
    }

    /// Update a content entry's value by key
    #[instrument(skip(self, request))]
    pub async fn update_content(
        &self,
        key: &str,
        request: UpdateContentRequest,
    ) -> ServiceResult<ContentResponse> {
        self.ctx
            .content_repo()
            .update_value(key, &request.value)
            .await?;

        info!(key = %key, "Site content updated");

        self.get_content(key).await
    }

    /// Delete a content entry by key
    #[instrument(skip(self))]
    pub async fn delete_content(&self, key: &str) -> ServiceResult<()> {
        self.ctx.content_repo().delete(key).await?;
        info!(key = %key, "Site content deleted");
        Ok(())
    }
}

