//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Registration request
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();
        Self {
            username: format!("testuser{nanos}{suffix}"),
            email: format!("test{nanos}{suffix}@example.com"),
            password: "TestPass123!".to_string(),
        }
    }
}

/// Login request (JSON body)
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            username: reg.username.clone(),
            password: reg.password.clone(),
        }
    }
}

/// OAuth2-style token form body
#[derive(Debug, Serialize)]
pub struct TokenForm {
    pub username: String,
    pub password: String,
}

impl TokenForm {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            username: reg.username.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Token response
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

/// User response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub is_admin: bool,
    pub is_active: bool,
    pub created_at: String,
}

/// Profile response
#[derive(Debug, Deserialize)]
pub struct ProfileResponse {
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    pub interests: Vec<String>,
    pub joined_groups: Vec<String>,
    pub onboarding_completed: bool,
    #[serde(default)]
    pub profile_photo: Option<String>,
}

/// Onboarding status response
#[derive(Debug, Deserialize)]
pub struct OnboardingStatusResponse {
    pub completed: bool,
}

/// Create event request
#[derive(Debug, Serialize)]
pub struct CreateEventRequest {
    pub title: String,
    pub description: String,
    pub location: String,
    pub event_date: String,
    pub max_participants: Option<i32>,
}

impl CreateEventRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Test Event {suffix}"),
            description: "An event for testing".to_string(),
            location: "Community Hall".to_string(),
            event_date: (Utc::now() + Duration::days(7)).to_rfc3339(),
            max_participants: None,
        }
    }

    pub fn with_capacity(max_participants: i32) -> Self {
        Self {
            max_participants: Some(max_participants),
            ..Self::unique()
        }
    }
}

/// Event response
#[derive(Debug, Deserialize)]
pub struct EventResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub event_date: String,
    pub created_by: String,
    #[serde(default)]
    pub max_participants: Option<i32>,
    pub participants: Vec<String>,
    pub participant_count: i32,
    pub is_active: bool,
    #[serde(default)]
    pub image_url: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Create content request
#[derive(Debug, Serialize)]
pub struct CreateContentRequest {
    pub key: String,
    pub value: String,
}

impl CreateContentRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            key: format!("test_content_{suffix}"),
            value: format!("Welcome to the site, revision {suffix}"),
        }
    }
}

/// Content response
#[derive(Debug, Deserialize)]
pub struct ContentResponse {
    pub key: String,
    pub value: String,
    pub updated_at: String,
}

/// Message response body
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Photo upload response
#[derive(Debug, Deserialize)]
pub struct PhotoUploadResponse {
    pub success: bool,
    pub photo_url: String,
}

/// Event image upload response
#[derive(Debug, Deserialize)]
pub struct ImageUploadResponse {
    pub success: bool,
    pub image_url: String,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

/// Minimal valid PNG bytes for upload tests
pub fn tiny_png() -> Vec<u8> {
    vec![
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48,
        0x44, 0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00,
        0x00, 0x1F, 0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0A, 0x49, 0x44, 0x41, 0x54, 0x78,
        0x9C, 0x63, 0x00, 0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00,
        0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
    ]
}
