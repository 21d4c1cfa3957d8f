//! PostgreSQL implementation of EventRepository
//!
//! Join and leave are single conditional UPDATE statements so that
//! concurrent requests can never push the participant set past the
//! capacity limit.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use meet_core::entities::Event;
use meet_core::error::DomainError;
use meet_core::traits::{
    EventFilter, EventQuery, EventRepository, JoinOutcome, LeaveOutcome, RepoResult,
};
use meet_core::value_objects::Snowflake;

use crate::models::EventModel;

use super::error::{event_not_found, map_db_error};

const EVENT_COLUMNS: &str = "id, title, description, location, event_date, created_by, \
     max_participants, participants, is_active, image_url, created_at, updated_at";

/// PostgreSQL implementation of EventRepository
#[derive(Clone)]
pub struct PgEventRepository {
    pool: PgPool,
}

impl PgEventRepository {
    /// Create a new PgEventRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Re-read join preconditions after a zero-row conditional update
    /// to report which one failed
    async fn diagnose_join_failure(
        &self,
        event_id: Snowflake,
        user_id: Snowflake,
    ) -> RepoResult<JoinOutcome> {
        let row = sqlx::query_as::<_, (bool, bool)>(
            r"
            SELECT participants @> ARRAY[$2]::BIGINT[],
                   max_participants IS NOT NULL
                       AND cardinality(participants) >= max_participants
            FROM events
            WHERE id = $1 AND is_active = TRUE
            ",
        )
        .bind(event_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        match row {
            Some((true, _)) => Ok(JoinOutcome::AlreadyJoined),
            Some((_, true)) => Ok(JoinOutcome::Full),
            Some((false, false)) => Err(DomainError::DatabaseError(
                "join conditions changed concurrently".to_string(),
            )),
            None => Err(event_not_found(event_id)),
        }
    }
}

#[async_trait]
impl EventRepository for PgEventRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Event>> {
        let result = sqlx::query_as::<_, EventModel>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Event::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, query: EventQuery, user_id: Snowflake) -> RepoResult<Vec<Event>> {
        let models = match query.filter {
            EventFilter::All | EventFilter::Upcoming | EventFilter::Past => {
                let clause = match query.filter {
                    EventFilter::Upcoming => "AND event_date >= NOW()",
                    EventFilter::Past => "AND event_date < NOW()",
                    _ => "",
                };
                sqlx::query_as::<_, EventModel>(&format!(
                    "SELECT {EVENT_COLUMNS} FROM events \
                     WHERE is_active = TRUE {clause} \
                     ORDER BY event_date ASC OFFSET $1 LIMIT $2"
                ))
                .bind(query.offset)
                .bind(query.limit)
                .fetch_all(&self.pool)
                .await
            }
            EventFilter::Mine | EventFilter::Joined => {
                let clause = if query.filter == EventFilter::Mine {
                    "AND created_by = $3"
                } else {
                    "AND participants @> ARRAY[$3]::BIGINT[]"
                };
                sqlx::query_as::<_, EventModel>(&format!(
                    "SELECT {EVENT_COLUMNS} FROM events \
                     WHERE is_active = TRUE {clause} \
                     ORDER BY event_date ASC OFFSET $1 LIMIT $2"
                ))
                .bind(query.offset)
                .bind(query.limit)
                .bind(user_id.into_inner())
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(map_db_error)?;

        Ok(models.into_iter().map(Event::from).collect())
    }

    #[instrument(skip(self, event))]
    async fn create(&self, event: &Event) -> RepoResult<()> {
        let participants: Vec<i64> =
            event.participants.iter().map(|p| p.into_inner()).collect();

        sqlx::query(
            r"
            INSERT INTO events (id, title, description, location, event_date, created_by,
                                max_participants, participants, is_active, image_url,
                                created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            ",
        )
        .bind(event.id.into_inner())
        .bind(&event.title)
        .bind(&event.description)
        .bind(&event.location)
        .bind(event.event_date)
        .bind(event.created_by.into_inner())
        .bind(event.max_participants)
        .bind(&participants)
        .bind(event.is_active)
        .bind(&event.image_url)
        .bind(event.created_at)
        .bind(event.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, event))]
    async fn update(&self, event: &Event) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE events
            SET title = $2, description = $3, location = $4, event_date = $5,
                max_participants = $6, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(event.id.into_inner())
        .bind(&event.title)
        .bind(&event.description)
        .bind(&event.location)
        .bind(event.event_date)
        .bind(event.max_participants)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(event_not_found(event.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn soft_delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE events
            SET is_active = FALSE, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(event_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn add_participant(
        &self,
        event_id: Snowflake,
        user_id: Snowflake,
    ) -> RepoResult<JoinOutcome> {
        // Capacity check and append in one statement; the row lock during
        // the UPDATE is the serialization point for concurrent joins.
        let result = sqlx::query(
            r"
            UPDATE events
            SET participants = array_append(participants, $2), updated_at = NOW()
            WHERE id = $1
              AND is_active = TRUE
              AND NOT (participants @> ARRAY[$2]::BIGINT[])
              AND (max_participants IS NULL
                   OR cardinality(participants) < max_participants)
            ",
        )
        .bind(event_id.into_inner())
        .bind(user_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 1 {
            return Ok(JoinOutcome::Joined);
        }

        self.diagnose_join_failure(event_id, user_id).await
    }

    #[instrument(skip(self))]
    async fn remove_participant(
        &self,
        event_id: Snowflake,
        user_id: Snowflake,
    ) -> RepoResult<LeaveOutcome> {
        let result = sqlx::query(
            r"
            UPDATE events
            SET participants = array_remove(participants, $2), updated_at = NOW()
            WHERE id = $1
              AND is_active = TRUE
              AND participants @> ARRAY[$2]::BIGINT[]
            ",
        )
        .bind(event_id.into_inner())
        .bind(user_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 1 {
            return Ok(LeaveOutcome::Left);
        }

        // Zero rows: either the event is gone or the user was not joined
        let exists = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM events WHERE id = $1 AND is_active = TRUE)
            ",
        )
        .bind(event_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        if exists {
            Ok(LeaveOutcome::NotJoined)
        } else {
            Err(event_not_found(event_id))
        }
    }

    #[instrument(skip(self))]
    async fn set_image_url(&self, event_id: Snowflake, url: &str) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE events
            SET image_url = $2, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(event_id.into_inner())
        .bind(url)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(event_not_found(event_id));
        }

        Ok(())
    }
}
