//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

// ============================================================================
// Auth Responses
// ============================================================================

/// Access token response
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

impl TokenResponse {
    pub fn new(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}

// ============================================================================
// User Responses
// ============================================================================

/// User account response
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub is_admin: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Profile sub-fields of the current user
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    pub interests: Vec<String>,
    pub joined_groups: Vec<String>,
    pub onboarding_completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_photo: Option<String>,
}

/// Onboarding completion flag
#[derive(Debug, Serialize)]
pub struct OnboardingStatusResponse {
    #[serde(rename = "completed")]
    pub onboarding_completed: bool,
}

// ============================================================================
// Event Responses
// ============================================================================

/// Event response
#[derive(Debug, Clone, Serialize)]
pub struct EventResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub event_date: DateTime<Utc>,
    pub created_by: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_participants: Option<i32>,
    pub participants: Vec<String>,
    pub participant_count: i32,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Media Responses
// ============================================================================

/// Profile photo upload result
#[derive(Debug, Serialize)]
pub struct PhotoUploadResponse {
    pub success: bool,
    pub photo_url: String,
}

/// Event image upload result
#[derive(Debug, Serialize)]
pub struct ImageUploadResponse {
    pub success: bool,
    pub image_url: String,
}

// ============================================================================
// Site Content Responses
// ============================================================================

/// Site content entry
#[derive(Debug, Clone, Serialize)]
pub struct ContentResponse {
    pub key: String,
    pub value: String,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Common Responses
// ============================================================================

/// Liveness probe response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Readiness probe response with dependency checks
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub checks: HealthChecks,
}

/// Dependency health flags
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: bool,
}

impl ReadinessResponse {
    pub fn ready(database: bool) -> Self {
        Self {
            status: if database { "ready" } else { "not_ready" }.to_string(),
            checks: HealthChecks { database },
        }
    }
}

/// Plain message response for join/leave/delete outcomes
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
