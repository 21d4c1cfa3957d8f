//! PostgreSQL implementation of SiteContentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use meet_core::entities::SiteContent;
use meet_core::error::DomainError;
use meet_core::traits::{RepoResult, SiteContentRepository};

use crate::models::SiteContentModel;

use super::error::{content_not_found, map_db_error, map_unique_violation};

/// PostgreSQL implementation of SiteContentRepository
#[derive(Clone)]
pub struct PgSiteContentRepository {
    pool: PgPool,
}

impl PgSiteContentRepository {
    /// Create a new PgSiteContentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SiteContentRepository for PgSiteContentRepository {
    #[instrument(skip(self))]
    async fn find_by_key(&self, key: &str) -> RepoResult<Option<SiteContent>> {
        let result = sqlx::query_as::<_, SiteContentModel>(
            r"
            SELECT id, key, value, updated_at
            FROM site_content
            WHERE key = $1
            ",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(SiteContent::from))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<SiteContent>> {
        let result = sqlx::query_as::<_, SiteContentModel>(
            r"
            SELECT id, key, value, updated_at
            FROM site_content
            ORDER BY key
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into_iter().map(SiteContent::from).collect())
    }

    #[instrument(skip(self, content))]
    async fn create(&self, content: &SiteContent) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO site_content (id, key, value, updated_at)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(content.id.into_inner())
        .bind(&content.key)
        .bind(&content.value)
        .bind(content.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let key = content.key.clone();
            map_unique_violation(e, |_| DomainError::ContentKeyExists(key))
        })?;

        Ok(())
    }

    #[instrument(skip(self, value))]
    async fn update_value(&self, key: &str, value: &str) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE site_content
            SET value = $2, updated_at = NOW()
            WHERE key = $1
            ",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(content_not_found(key));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, key: &str) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM site_content WHERE key = $1
            ",
        )
        .bind(key)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(content_not_found(key));
        }

        Ok(())
    }
}
