//! Site content entity - admin-managed key/value text

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// A single editable piece of site text, addressed by a unique key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteContent {
    pub id: Snowflake,
    pub key: String,
    pub value: String,
    pub updated_at: DateTime<Utc>,
}

impl SiteContent {
    pub fn new(id: Snowflake, key: String, value: String) -> Self {
        Self {
            id,
            key,
            value,
            updated_at: Utc::now(),
        }
    }

    /// Replace the stored value
    pub fn set_value(&mut self, value: String) {
        self.value = value;
        self.updated_at = Utc::now();
    }
}
