//! Admin handlers
//!
//! Admin-only site content CRUD and user directory management.

use axum::{
    extract::{Path, State},
    Json,
};
use meet_service::{
    AdminService, AdminUpdateUserRequest, ContentResponse, ContentService, CreateContentRequest,
    UpdateContentRequest, UserResponse,
};

use crate::extractors::{AdminUser, ContentKeyPath, Pagination, UserIdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

// ============================================================================
// Site Content
// ============================================================================

/// List all content entries
///
/// GET /admin/content/
pub async fn list_content(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> ApiResult<Json<Vec<ContentResponse>>> {
    let service = ContentService::new(state.service_context());
    let response = service.list_content().await?;
    Ok(Json(response))
}

/// Create a content entry
///
/// POST /admin/content/
pub async fn create_content(
    State(state): State<AppState>,
    _admin: AdminUser,
    ValidatedJson(request): ValidatedJson<CreateContentRequest>,
) -> ApiResult<Created<Json<ContentResponse>>> {
    let service = ContentService::new(state.service_context());
    let response = service.create_content(request).await?;
    Ok(Created(Json(response)))
}

/// Update a content entry's value
///
/// PATCH /admin/content/:key
pub async fn update_content(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(path): Path<ContentKeyPath>,
    Json(request): Json<UpdateContentRequest>,
) -> ApiResult<Json<ContentResponse>> {
    let service = ContentService::new(state.service_context());
    let response = service.update_content(&path.key, request).await?;
    Ok(Json(response))
}

/// Delete a content entry
///
/// DELETE /admin/content/:key
pub async fn delete_content(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(path): Path<ContentKeyPath>,
) -> ApiResult<NoContent> {
    let service = ContentService::new(state.service_context());
    service.delete_content(&path.key).await?;
    Ok(NoContent)
}

// ============================================================================
// User Directory
// ============================================================================

/// List users, paginated
///
/// GET /admin/users/
pub async fn list_users(
    State(state): State<AppState>,
    _admin: AdminUser,
    pagination: Pagination,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let service = AdminService::new(state.service_context());
    let response = service.list_users(pagination.skip, pagination.limit).await?;
    Ok(Json(response))
}

/// Get a user by ID
///
/// GET /admin/users/:user_id
pub async fn get_user(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(path): Path<UserIdPath>,
) -> ApiResult<Json<UserResponse>> {
    let service = AdminService::new(state.service_context());
    let response = service.get_user(path.user_id()?).await?;
    Ok(Json(response))
}

/// Partially update a user
///
/// PATCH /admin/users/:user_id
pub async fn update_user(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(path): Path<UserIdPath>,
    ValidatedJson(request): ValidatedJson<AdminUpdateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let service = AdminService::new(state.service_context());
    let response = service.update_user(path.user_id()?, request).await?;
    Ok(Json(response))
}

/// Hard-delete a user
///
/// DELETE /admin/users/:user_id
pub async fn delete_user(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(path): Path<UserIdPath>,
) -> ApiResult<NoContent> {
    let service = AdminService::new(state.service_context());
    service.delete_user(path.user_id()?).await?;
    Ok(NoContent)
}
