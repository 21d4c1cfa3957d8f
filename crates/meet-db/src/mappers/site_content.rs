//! Site content entity <-> model mapper

use meet_core::entities::SiteContent;
use meet_core::value_objects::Snowflake;

use crate::models::SiteContentModel;

/// Convert SiteContentModel to SiteContent entity
impl From<SiteContentModel> for SiteContent {
    fn from(model: SiteContentModel) -> Self {
        SiteContent {
            id: Snowflake::new(model.id),
            key: model.key,
            value: model.value,
            updated_at: model.updated_at,
        }
    }
}
