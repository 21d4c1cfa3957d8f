//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 32, message = "Username must be 3-32 characters"))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,
}

/// JSON login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    pub password: String,
}

/// Form-encoded login request (OAuth2 password flow shape)
#[derive(Debug, Clone, Deserialize)]
pub struct TokenForm {
    pub username: String,
    pub password: String,
}

// ============================================================================
// User Requests
// ============================================================================

/// Update current user request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateMeRequest {
    #[validate(length(min = 3, max = 32, message = "Username must be 3-32 characters"))]
    pub username: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
}

/// Partial profile update request
///
/// Omitted fields keep their prior values.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    pub birth_date: Option<NaiveDate>,

    #[validate(length(max = 32, message = "Gender must be at most 32 characters"))]
    pub gender: Option<String>,

    pub interests: Option<Vec<String>>,

    /// Group IDs as strings (Snowflakes)
    pub joined_groups: Option<Vec<String>>,

    pub onboarding_completed: Option<bool>,

    #[validate(length(max = 500, message = "Photo URL must be at most 500 characters"))]
    pub profile_photo: Option<String>,
}

// ============================================================================
// Event Requests
// ============================================================================

/// Create event request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEventRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: String,

    #[validate(length(min = 1, max = 300, message = "Location must be 1-300 characters"))]
    pub location: String,

    pub event_date: DateTime<Utc>,

    #[validate(range(min = 1, message = "max_participants must be at least 1"))]
    pub max_participants: Option<i32>,
}

/// Partial event update request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateEventRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,

    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: Option<String>,

    #[validate(length(min = 1, max = 300, message = "Location must be 1-300 characters"))]
    pub location: Option<String>,

    pub event_date: Option<DateTime<Utc>>,

    #[validate(range(min = 1, message = "max_participants must be at least 1"))]
    pub max_participants: Option<i32>,
}

// ============================================================================
// Site Content Requests
// ============================================================================

/// Create site content request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateContentRequest {
    #[validate(length(min = 1, max = 100, message = "Key must be 1-100 characters"))]
    pub key: String,

    pub value: String,
}

/// Update site content value request
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateContentRequest {
    pub value: String,
}

// ============================================================================
// Admin Requests
// ============================================================================

/// Admin partial user update request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct AdminUpdateUserRequest {
    #[validate(length(min = 3, max = 32, message = "Username must be 3-32 characters"))]
    pub username: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: Option<String>,

    pub is_admin: Option<bool>,

    pub is_active: Option<bool>,
}
