//! Path parameter extractors
//!
//! Type-safe extraction of Snowflake IDs from path parameters.

use meet_core::Snowflake;

use crate::response::ApiError;

/// Path parameters with user_id
#[derive(Debug, serde::Deserialize)]
pub struct UserIdPath {
    pub user_id: String,
}

impl UserIdPath {
    /// Parse user_id as Snowflake
    pub fn user_id(&self) -> Result<Snowflake, ApiError> {
        self.user_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid user_id format"))
    }
}

/// Path parameters with event_id
#[derive(Debug, serde::Deserialize)]
pub struct EventIdPath {
    pub event_id: String,
}

impl EventIdPath {
    /// Parse event_id as Snowflake
    pub fn event_id(&self) -> Result<Snowflake, ApiError> {
        self.event_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid event_id format"))
    }
}

/// Path parameters with a content key
#[derive(Debug, serde::Deserialize)]
pub struct ContentKeyPath {
    pub key: String,
}
