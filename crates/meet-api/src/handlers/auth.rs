//! Authentication handlers
//!
//! Two credential-issuance paths with identical semantics: a form-encoded
//! token endpoint and a JSON login endpoint.

use axum::{extract::State, Form, Json};
use meet_service::{AuthService, LoginRequest, TokenForm, TokenResponse};

use crate::extractors::ValidatedJson;
use crate::response::ApiResult;
use crate::state::AppState;

/// Issue an access token from form-encoded credentials
///
/// POST /api/token
pub async fn token(
    State(state): State<AppState>,
    Form(form): Form<TokenForm>,
) -> ApiResult<Json<TokenResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.login_form(form).await?;
    Ok(Json(response))
}

/// Login with JSON credentials
///
/// POST /api/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.login(request).await?;
    Ok(Json(response))
}
