//! Event service
//!
//! Handles the event lifecycle: creation, listing, partial updates,
//! soft deletion, and the join/leave state machine.

use meet_core::entities::Event;
use meet_core::traits::{EventFilter, EventQuery, JoinOutcome, LeaveOutcome};
use meet_core::{DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::{CreateEventRequest, EventResponse, MessageResponse, UpdateEventRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Event service
pub struct EventService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EventService<'a> {
    /// Create a new EventService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new event; the creator joins automatically
    #[instrument(skip(self, request), fields(title = %request.title))]
    pub async fn create_event(
        &self,
        user_id: Snowflake,
        request: CreateEventRequest,
    ) -> ServiceResult<EventResponse> {
        let event = Event::new(
            self.ctx.generate_id(),
            request.title,
            request.description,
            request.location,
            request.event_date,
            user_id,
            request.max_participants,
        );

        self.ctx.event_repo().create(&event).await?;

        info!(event_id = %event.id, creator = %user_id, "Event created");

        Ok(EventResponse::from(&event))
    }

    /// Get an event by ID, active or not
    #[instrument(skip(self))]
    pub async fn get_event(&self, event_id: Snowflake) -> ServiceResult<EventResponse> {
        let event = self.get_event_entity(event_id).await?;
        Ok(EventResponse::from(&event))
    }

    /// List active events with an optional filter
    ///
    /// Accepted `filter_type` values: `my`, `joined`, `upcoming`, `past`.
    /// Anything else lists all active events.
    #[instrument(skip(self))]
    pub async fn list_events(
        &self,
        user_id: Snowflake,
        filter_type: Option<&str>,
        skip: i64,
        limit: i64,
    ) -> ServiceResult<Vec<EventResponse>> {
        let filter = match filter_type {
            Some("my") => EventFilter::Mine,
            Some("joined") => EventFilter::Joined,
            Some("upcoming") => EventFilter::Upcoming,
            Some("past") => EventFilter::Past,
            _ => EventFilter::All,
        };

        let query = EventQuery {
            filter,
            offset: skip,
            limit,
        };

        let events = self.ctx.event_repo().list(query, user_id).await?;

        Ok(events.iter().map(EventResponse::from).collect())
    }

    /// Partially update an event; creator or admin only
    #[instrument(skip(self, request))]
    pub async fn update_event(
        &self,
        user_id: Snowflake,
        is_admin: bool,
        event_id: Snowflake,
        request: UpdateEventRequest,
    ) -> ServiceResult<EventResponse> {
        let mut event = self.get_event_entity(event_id).await?;

        if !event.can_modify(user_id, is_admin) {
            return Err(ServiceError::permission_denied("edit this event"));
        }

        let mut changed = false;

        if let Some(title) = request.title {
            event.title = title;
            changed = true;
        }

        if let Some(description) = request.description {
            event.description = description;
            changed = true;
        }

        if let Some(location) = request.location {
            event.location = location;
            changed = true;
        }

        if let Some(event_date) = request.event_date {
            event.event_date = event_date;
            changed = true;
        }

        if let Some(max_participants) = request.max_participants {
            event.max_participants = Some(max_participants);
            changed = true;
        }

        if changed {
            self.ctx.event_repo().update(&event).await?;
            info!(event_id = %event_id, "Event updated");
        }

        Ok(EventResponse::from(&event))
    }

    /// Soft-delete an event; creator or admin only
    #[instrument(skip(self))]
    pub async fn delete_event(
        &self,
        user_id: Snowflake,
        is_admin: bool,
        event_id: Snowflake,
    ) -> ServiceResult<MessageResponse> {
        let event = self.get_event_entity(event_id).await?;

        if !event.can_modify(user_id, is_admin) {
            return Err(ServiceError::permission_denied("delete this event"));
        }

        self.ctx.event_repo().soft_delete(event_id).await?;
        info!(event_id = %event_id, "Event soft-deleted");

        Ok(MessageResponse::new("Event successfully deleted"))
    }

    /// Join an event
    ///
    /// Joining twice is a no-op, not an error. A full event fails with
    /// `EventFull`.
    #[instrument(skip(self))]
    pub async fn join_event(
        &self,
        user_id: Snowflake,
        event_id: Snowflake,
    ) -> ServiceResult<MessageResponse> {
        match self
            .ctx
            .event_repo()
            .add_participant(event_id, user_id)
            .await?
        {
            JoinOutcome::Joined => {
                info!(event_id = %event_id, user_id = %user_id, "User joined event");
                Ok(MessageResponse::new("Successfully joined the event"))
            }
            JoinOutcome::AlreadyJoined => {
                Ok(MessageResponse::new("Already joined this event"))
            }
            JoinOutcome::Full => Err(ServiceError::from(DomainError::EventFull)),
        }
    }

    /// Leave an event
    ///
    /// Leaving without being joined is a no-op. The creator cannot leave.
    #[instrument(skip(self))]
    pub async fn leave_event(
        &self,
        user_id: Snowflake,
        event_id: Snowflake,
    ) -> ServiceResult<MessageResponse> {
        let event = self.get_event_entity(event_id).await?;

        if event.is_creator(user_id) {
            return Err(ServiceError::from(DomainError::CreatorCannotLeave));
        }

        match self
            .ctx
            .event_repo()
            .remove_participant(event_id, user_id)
            .await?
        {
            LeaveOutcome::Left => {
                info!(event_id = %event_id, user_id = %user_id, "User left event");
                Ok(MessageResponse::new("Successfully left the event"))
            }
            LeaveOutcome::NotJoined => Ok(MessageResponse::new("Not joined this event")),
        }
    }

    /// Get event entity by ID
    #[instrument(skip(self))]
    pub async fn get_event_entity(&self, event_id: Snowflake) -> ServiceResult<Event> {
        self.ctx
            .event_repo()
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Event", event_id.to_string()))
    }
}

