//! Event handlers
//!
//! Event CRUD, the join/leave state machine, listing with filters, and
//! event image upload.

use axum::{
    extract::{Multipart, Path, Query, State},
    Json,
};
use meet_service::{
    CreateEventRequest, EventResponse, EventService, ImageUploadResponse, MediaService,
    MessageResponse, UpdateEventRequest,
};
use serde::Deserialize;

use crate::extractors::{AuthUser, EventIdPath, ValidatedJson};
use crate::handlers::read_image_field;
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Query parameters for event listing
#[derive(Debug, Deserialize)]
pub struct ListEventsParams {
    #[serde(default)]
    pub filter_type: Option<String>,
    #[serde(default)]
    pub skip: Option<i64>,
    #[serde(default)]
    pub limit: Option<i64>,
}

/// Create an event
///
/// POST /api/events/
pub async fn create_event(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateEventRequest>,
) -> ApiResult<Created<Json<EventResponse>>> {
    let service = EventService::new(state.service_context());
    let response = service.create_event(auth.user_id(), request).await?;
    Ok(Created(Json(response)))
}

/// List active events with an optional filter
///
/// GET /api/events/?filter_type=&skip=&limit=
pub async fn list_events(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<ListEventsParams>,
) -> ApiResult<Json<Vec<EventResponse>>> {
    let skip = params.skip.unwrap_or(0).max(0);
    let limit = params.limit.unwrap_or(100).clamp(1, 100);

    let service = EventService::new(state.service_context());
    let response = service
        .list_events(auth.user_id(), params.filter_type.as_deref(), skip, limit)
        .await?;
    Ok(Json(response))
}

/// Get an event by ID, active or not
///
/// GET /api/events/:event_id
pub async fn get_event(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(path): Path<EventIdPath>,
) -> ApiResult<Json<EventResponse>> {
    let service = EventService::new(state.service_context());
    let response = service.get_event(path.event_id()?).await?;
    Ok(Json(response))
}

/// Partially update an event; creator or admin only
///
/// PATCH /api/events/:event_id
pub async fn update_event(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<EventIdPath>,
    ValidatedJson(request): ValidatedJson<UpdateEventRequest>,
) -> ApiResult<Json<EventResponse>> {
    let service = EventService::new(state.service_context());
    let response = service
        .update_event(auth.user_id(), auth.is_admin(), path.event_id()?, request)
        .await?;
    Ok(Json(response))
}

/// Soft-delete an event; creator or admin only
///
/// DELETE /api/events/:event_id
pub async fn delete_event(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<EventIdPath>,
) -> ApiResult<Json<MessageResponse>> {
    let service = EventService::new(state.service_context());
    let response = service
        .delete_event(auth.user_id(), auth.is_admin(), path.event_id()?)
        .await?;
    Ok(Json(response))
}

/// Join an event
///
/// POST /api/events/:event_id/join
pub async fn join_event(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<EventIdPath>,
) -> ApiResult<Json<MessageResponse>> {
    let service = EventService::new(state.service_context());
    let response = service.join_event(auth.user_id(), path.event_id()?).await?;
    Ok(Json(response))
}

/// Leave an event
///
/// POST /api/events/:event_id/leave
pub async fn leave_event(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<EventIdPath>,
) -> ApiResult<Json<MessageResponse>> {
    let service = EventService::new(state.service_context());
    let response = service
        .leave_event(auth.user_id(), path.event_id()?)
        .await?;
    Ok(Json(response))
}

/// Upload an event image; creator or admin only
///
/// POST /api/events/:event_id/image
pub async fn upload_image(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<EventIdPath>,
    multipart: Multipart,
) -> ApiResult<Json<ImageUploadResponse>> {
    let event_id = path.event_id()?;
    let upload = read_image_field(multipart, "file").await?;

    let service = MediaService::new(state.service_context());
    let response = service
        .upload_event_image(
            auth.user_id(),
            auth.is_admin(),
            event_id,
            upload.filename.as_deref(),
            upload.content_type.as_deref(),
            &upload.bytes,
        )
        .await?;

    Ok(Json(response))
}
