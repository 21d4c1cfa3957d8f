//! Authentication extractors
//!
//! Resolve the bearer token from the Authorization header to a full user
//! record, so handlers see the caller's current flags.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use meet_core::entities::User;
use meet_core::Snowflake;
use meet_service::AuthService;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated user extracted from the bearer token
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The authenticated user record
    pub user: User,
}

impl AuthUser {
    /// The authenticated user's ID
    pub fn user_id(&self) -> Snowflake {
        self.user.id
    }

    /// Whether the authenticated user is an admin
    pub fn is_admin(&self) -> bool {
        self.user.is_admin
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        let app_state = AppState::from_ref(state);
        let service = AuthService::new(app_state.service_context());

        let user = service.resolve_bearer(bearer.token()).await.map_err(|e| {
            tracing::warn!(error = %e, "Bearer token rejected");
            ApiError::Service(e)
        })?;

        Ok(AuthUser { user })
    }
}

/// Authenticated admin user
///
/// Same as [`AuthUser`] but additionally requires the admin flag.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub user: User,
}

impl AdminUser {
    /// The admin's user ID
    pub fn user_id(&self) -> Snowflake {
        self.user.id
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let AuthUser { user } = AuthUser::from_request_parts(parts, state).await?;

        if !user.is_admin {
            return Err(ApiError::App(meet_common::AppError::InsufficientPermissions));
        }

        Ok(AdminUser { user })
    }
}
