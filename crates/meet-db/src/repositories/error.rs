//! Error handling utilities for repositories

use meet_core::error::DomainError;
use meet_core::value_objects::Snowflake;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and resolve it via the constraint name,
/// falling back to a generic database error otherwise
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce(Option<&str>) -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique(db_err.constraint());
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "user not found" error
pub fn user_not_found(id: Snowflake) -> DomainError {
    DomainError::UserNotFound(id)
}

/// Create an "event not found" error
pub fn event_not_found(id: Snowflake) -> DomainError {
    DomainError::EventNotFound(id)
}

/// Create a "content not found" error
pub fn content_not_found(key: &str) -> DomainError {
    DomainError::ContentNotFound(key.to_string())
}
