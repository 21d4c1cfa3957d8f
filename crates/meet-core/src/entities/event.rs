//! Event entity - a meetup with an embedded participant list

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Event with its ordered participant set
///
/// Invariants:
/// - the creator is always in `participants` and can never be removed
/// - `participants.len()` never exceeds `max_participants` when set
/// - deletion is soft: `is_active` flips to false, the row stays
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: Snowflake,
    pub title: String,
    pub description: String,
    pub location: String,
    pub event_date: DateTime<Utc>,
    pub created_by: Snowflake,
    pub max_participants: Option<i32>,
    pub participants: Vec<Snowflake>,
    pub is_active: bool,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// Create a new event; the creator joins automatically
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: Snowflake,
        title: String,
        description: String,
        location: String,
        event_date: DateTime<Utc>,
        created_by: Snowflake,
        max_participants: Option<i32>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            title,
            description,
            location,
            event_date,
            created_by,
            max_participants,
            participants: vec![created_by],
            is_active: true,
            image_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if the user created this event
    #[inline]
    pub fn is_creator(&self, user_id: Snowflake) -> bool {
        self.created_by == user_id
    }

    /// Check if the user is in the participant set
    pub fn is_participant(&self, user_id: Snowflake) -> bool {
        self.participants.contains(&user_id)
    }

    /// Check whether the capacity limit has been reached
    pub fn is_full(&self) -> bool {
        match self.max_participants {
            Some(max) => self.participants.len() as i32 >= max,
            None => false,
        }
    }

    /// Current participant count
    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    /// Check if the user may edit or delete this event
    pub fn can_modify(&self, user_id: Snowflake, is_admin: bool) -> bool {
        is_admin || self.is_creator(user_id)
    }

    /// Soft delete: keep the record, hide it from default listings
    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.updated_at = Utc::now();
    }

    /// Update the event image URL
    pub fn set_image_url(&mut self, url: String) {
        self.image_url = Some(url);
        self.updated_at = Utc::now();
    }
}
