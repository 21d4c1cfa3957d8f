//! Event entity <-> model mapper

use meet_core::entities::Event;
use meet_core::value_objects::Snowflake;

use crate::models::EventModel;

/// Convert EventModel to Event entity
impl From<EventModel> for Event {
    fn from(model: EventModel) -> Self {
        Event {
            id: Snowflake::new(model.id),
            title: model.title,
            description: model.description,
            location: model.location,
            event_date: model.event_date,
            created_by: Snowflake::new(model.created_by),
            max_participants: model.max_participants,
            participants: model.participants.into_iter().map(Snowflake::new).collect(),
            is_active: model.is_active,
            image_url: model.image_url,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
