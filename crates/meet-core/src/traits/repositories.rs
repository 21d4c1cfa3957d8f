//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Event, SiteContent, User};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Find user by username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if username is already taken
    async fn username_exists(&self, username: &str) -> RepoResult<bool>;

    /// Check if email is already registered
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// List users ordered by id (admin view)
    async fn list(&self, offset: i64, limit: i64) -> RepoResult<Vec<User>>;

    /// Create a new user
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Update an existing user
    async fn update(&self, user: &User) -> RepoResult<()>;

    /// Hard delete a user (admin action)
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>>;

    /// Update password hash
    async fn update_password(&self, id: Snowflake, password_hash: &str) -> RepoResult<()>;
}

// ============================================================================
// Event Repository
// ============================================================================

/// Listing filter for events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventFilter {
    /// All active events
    #[default]
    All,
    /// Events created by the requesting user
    Mine,
    /// Events the requesting user participates in
    Joined,
    /// Active events dated now or later
    Upcoming,
    /// Active events dated before now
    Past,
}

/// Pagination and filtering options for event listings
#[derive(Debug, Clone, Copy)]
pub struct EventQuery {
    pub filter: EventFilter,
    pub offset: i64,
    pub limit: i64,
}

impl Default for EventQuery {
    fn default() -> Self {
        Self {
            filter: EventFilter::All,
            offset: 0,
            limit: 100,
        }
    }
}

/// Result of an atomic join attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinOutcome {
    /// User was appended to the participant set
    Joined,
    /// User was already a participant; no-op
    AlreadyJoined,
    /// Capacity limit reached
    Full,
}

/// Result of an atomic leave attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveOutcome {
    /// User was removed from the participant set
    Left,
    /// User was not a participant; no-op
    NotJoined,
}

#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Find event by ID, active or not
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Event>>;

    /// List active events matching the query, sorted ascending by date
    async fn list(&self, query: EventQuery, user_id: Snowflake) -> RepoResult<Vec<Event>>;

    /// Create a new event
    async fn create(&self, event: &Event) -> RepoResult<()>;

    /// Update descriptive fields of an event
    async fn update(&self, event: &Event) -> RepoResult<()>;

    /// Soft delete: flip the active flag, keep the row
    async fn soft_delete(&self, id: Snowflake) -> RepoResult<()>;

    /// Atomically append a participant, enforcing the capacity limit.
    ///
    /// Must guarantee that concurrent joins never push the participant
    /// count past `max_participants`.
    async fn add_participant(
        &self,
        event_id: Snowflake,
        user_id: Snowflake,
    ) -> RepoResult<JoinOutcome>;

    /// Atomically remove a participant. Creator checks happen upstream.
    async fn remove_participant(
        &self,
        event_id: Snowflake,
        user_id: Snowflake,
    ) -> RepoResult<LeaveOutcome>;

    /// Persist an uploaded image URL on the event
    async fn set_image_url(&self, event_id: Snowflake, url: &str) -> RepoResult<()>;
}

// ============================================================================
// Site Content Repository
// ============================================================================

#[async_trait]
pub trait SiteContentRepository: Send + Sync {
    /// Find content by its unique key
    async fn find_by_key(&self, key: &str) -> RepoResult<Option<SiteContent>>;

    /// List all content entries ordered by key
    async fn list(&self) -> RepoResult<Vec<SiteContent>>;

    /// Create a new content entry
    async fn create(&self, content: &SiteContent) -> RepoResult<()>;

    /// Update the value for an existing key
    async fn update_value(&self, key: &str, value: &str) -> RepoResult<()>;

    /// Delete a content entry by key
    async fn delete(&self, key: &str) -> RepoResult<()>;
}
