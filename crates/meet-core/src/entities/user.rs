//! User entity - represents a platform account with its profile fields

use chrono::{DateTime, NaiveDate, Utc};

use crate::value_objects::Snowflake;

/// User account with embedded profile fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub username: String,
    pub email: String,
    pub is_admin: bool,
    pub is_active: bool,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<String>,
    pub interests: Vec<String>,
    pub joined_groups: Vec<Snowflake>,
    pub onboarding_completed: bool,
    pub profile_photo: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new active, non-admin user with an empty profile
    pub fn new(id: Snowflake, username: String, email: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            username,
            email,
            is_admin: false,
            is_active: true,
            birth_date: None,
            gender: None,
            interests: Vec::new(),
            joined_groups: Vec::new(),
            onboarding_completed: false,
            profile_photo: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Update the username
    pub fn set_username(&mut self, username: String) {
        self.username = username;
        self.updated_at = Utc::now();
    }

    /// Update the email address
    pub fn set_email(&mut self, email: String) {
        self.email = email;
        self.updated_at = Utc::now();
    }

    /// Update the profile photo URL
    pub fn set_profile_photo(&mut self, url: Option<String>) {
        self.profile_photo = url;
        self.updated_at = Utc::now();
    }

    /// Mark onboarding as completed
    pub fn complete_onboarding(&mut self) {
        self.onboarding_completed = true;
        self.updated_at = Utc::now();
    }

    /// Deactivate the account
    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.updated_at = Utc::now();
    }
}
