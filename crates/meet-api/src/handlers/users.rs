//! User account handlers
//!
//! Registration, current-user reads and updates, and user lookup.

use axum::{
    extract::{Path, State},
    Json,
};
use meet_service::{AuthService, RegisterRequest, UpdateMeRequest, UserResponse, UserService};

use crate::extractors::{AuthUser, UserIdPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Register a new user
///
/// POST /users/
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<Created<Json<UserResponse>>> {
    let service = AuthService::new(state.service_context());
    let response = service.register(request).await?;
    Ok(Created(Json(response)))
}

/// Get the current user
///
/// GET /users/me
pub async fn get_current_user(auth: AuthUser) -> Json<UserResponse> {
    Json(UserResponse::from(&auth.user))
}

/// Partially update the current user
///
/// PATCH /users/me
pub async fn update_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateMeRequest>,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.update_me(auth.user_id(), request).await?;
    Ok(Json(response))
}

/// Get a user by ID
///
/// GET /users/:user_id
pub async fn get_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(path): Path<UserIdPath>,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.get_user(path.user_id()?).await?;
    Ok(Json(response))
}
