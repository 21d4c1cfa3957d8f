//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Snowflake),

    #[error("User not found: {0}")]
    UserNotFoundByName(String),

    #[error("Event not found: {0}")]
    EventNotFound(Snowflake),

    #[error("Content not found: {0}")]
    ContentNotFound(String),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("File must be an image, got: {0}")]
    UnsupportedMediaType(String),

    // =========================================================================
    // Authentication / Authorization Errors
    // =========================================================================
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Not authenticated")]
    Unauthenticated,

    #[error("Not authorized to modify this event")]
    NotEventCreator,

    #[error("Admin privileges required")]
    AdminRequired,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Username already taken")]
    UsernameAlreadyExists,

    #[error("Email already registered")]
    EmailAlreadyExists,

    #[error("Content key already exists: {0}")]
    ContentKeyExists(String),

    #[error("Event is full")]
    EventFull,

    #[error("Event creator cannot leave their own event")]
    CreatorCannotLeave,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) | Self::UserNotFoundByName(_) => "UNKNOWN_USER",
            Self::EventNotFound(_) => "UNKNOWN_EVENT",
            Self::ContentNotFound(_) => "UNKNOWN_CONTENT",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::UnsupportedMediaType(_) => "UNSUPPORTED_MEDIA_TYPE",

            // Auth
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::NotEventCreator => "NOT_EVENT_CREATOR",
            Self::AdminRequired => "ADMIN_REQUIRED",

            // Conflict
            Self::UsernameAlreadyExists => "USERNAME_ALREADY_EXISTS",
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::ContentKeyExists(_) => "CONTENT_KEY_EXISTS",
            Self::EventFull => "EVENT_FULL",
            Self::CreatorCannotLeave => "CREATOR_CANNOT_LEAVE",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::StorageError(_) => "STORAGE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::UserNotFoundByName(_)
                | Self::EventNotFound(_)
                | Self::ContentNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::InvalidEmail | Self::UnsupportedMediaType(_)
        )
    }

    /// Check if this is an authentication error
    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, Self::InvalidCredentials | Self::Unauthenticated)
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotEventCreator | Self::AdminRequired)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::UsernameAlreadyExists
                | Self::EmailAlreadyExists
                | Self::ContentKeyExists(_)
                | Self::EventFull
                | Self::CreatorCannotLeave
        )
    }
}
