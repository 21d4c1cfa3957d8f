//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use meet_core::entities::{Event, SiteContent, User};

use super::responses::{ContentResponse, EventResponse, ProfileResponse, UserResponse};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            email: user.email.clone(),
            is_admin: user.is_admin,
            is_active: user.is_active,
            created_at: user.created_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl From<&User> for ProfileResponse {
    fn from(user: &User) -> Self {
        Self {
            birth_date: user.birth_date,
            gender: user.gender.clone(),
            interests: user.interests.clone(),
            joined_groups: user
                .joined_groups
                .iter()
                .map(std::string::ToString::to_string)
                .collect(),
            onboarding_completed: user.onboarding_completed,
            profile_photo: user.profile_photo.clone(),
        }
    }
}

// ============================================================================
// Event Mappers
// ============================================================================

impl From<&Event> for EventResponse {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id.to_string(),
            title: event.title.clone(),
            description: event.description.clone(),
            location: event.location.clone(),
            event_date: event.event_date,
            created_by: event.created_by.to_string(),
            max_participants: event.max_participants,
            participants: event
                .participants
                .iter()
                .map(std::string::ToString::to_string)
                .collect(),
            participant_count: event.participant_count() as i32,
            is_active: event.is_active,
            image_url: event.image_url.clone(),
            created_at: event.created_at,
            updated_at: event.updated_at,
        }
    }
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self::from(&event)
    }
}

// ============================================================================
// Site Content Mappers
// ============================================================================

impl From<&SiteContent> for ContentResponse {
    fn from(content: &SiteContent) -> Self {
        Self {
            key: content.key.clone(),
            value: content.value.clone(),
            updated_at: content.updated_at,
        }
    }
}

impl From<SiteContent> for ContentResponse {
    fn from(content: SiteContent) -> Self {
        Self::from(&content)
    }
}
