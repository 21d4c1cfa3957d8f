//! Site content database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for site_content table
#[derive(Debug, Clone, FromRow)]
pub struct SiteContentModel {
    pub id: i64,
    pub key: String,
    pub value: String,
    pub updated_at: DateTime<Utc>,
}
