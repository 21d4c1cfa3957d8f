//! Site content handlers (public read path)

use axum::{
    extract::{Path, State},
    Json,
};
use meet_service::{ContentResponse, ContentService};

use crate::extractors::ContentKeyPath;
use crate::response::ApiResult;
use crate::state::AppState;

/// Get a content entry by key
///
/// GET /api/content/:key
pub async fn get_content(
    State(state): State<AppState>,
    Path(path): Path<ContentKeyPath>,
) -> ApiResult<Json<ContentResponse>> {
    let service = ContentService::new(state.service_context());
    let response = service.get_content(&path.key).await?;
    Ok(Json(response))
}
