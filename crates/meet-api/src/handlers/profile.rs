//! Profile handlers
//!
//! Profile sub-field reads and updates, onboarding status, and the
//! profile photo upload.

use axum::{
    extract::{Multipart, State},
    Json,
};
use meet_service::{
    MediaService, OnboardingStatusResponse, PhotoUploadResponse, ProfileResponse, ProfileService,
    UpdateProfileRequest,
};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::handlers::read_image_field;
use crate::response::ApiResult;
use crate::state::AppState;

/// Get the current user's profile
///
/// GET /api/profile/
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ProfileResponse>> {
    let service = ProfileService::new(state.service_context());
    let response = service.get_profile(auth.user_id()).await?;
    Ok(Json(response))
}

/// Partially update the current user's profile
///
/// PATCH /api/profile/
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateProfileRequest>,
) -> ApiResult<Json<ProfileResponse>> {
    let service = ProfileService::new(state.service_context());
    let response = service.update_profile(auth.user_id(), request).await?;
    Ok(Json(response))
}

/// Get the current user's onboarding status
///
/// GET /api/onboarding-status/
pub async fn onboarding_status(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<OnboardingStatusResponse>> {
    let service = ProfileService::new(state.service_context());
    let response = service.onboarding_status(auth.user_id()).await?;
    Ok(Json(response))
}

/// Upload the current user's profile photo
///
/// POST /api/profile/photo
pub async fn upload_photo(
    State(state): State<AppState>,
    auth: AuthUser,
    multipart: Multipart,
) -> ApiResult<Json<PhotoUploadResponse>> {
    let upload = read_image_field(multipart, "photo").await?;

    let service = MediaService::new(state.service_context());
    let response = service
        .upload_profile_photo(
            auth.user_id(),
            upload.filename.as_deref(),
            upload.content_type.as_deref(),
            &upload.bytes,
        )
        .await?;

    Ok(Json(response))
}
