//! Authentication service
//!
//! Handles user registration, credential verification, token issuance,
//! and bearer token resolution.

use meet_common::auth::{hash_password, validate_password_strength, verify_password};
use meet_common::AppError;
use meet_core::entities::User;
use tracing::{info, instrument, warn};

use crate::dto::{LoginRequest, RegisterRequest, TokenForm, TokenResponse, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user account
    #[instrument(skip(self, request), fields(username = %request.username, email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<UserResponse> {
        // Validate password strength before proceeding
        validate_password_strength(&request.password).map_err(ServiceError::from)?;

        if self
            .ctx
            .user_repo()
            .username_exists(&request.username)
            .await?
        {
            return Err(ServiceError::conflict("Username already registered"));
        }

        if self.ctx.user_repo().email_exists(&request.email).await? {
            return Err(ServiceError::conflict("Email already registered"));
        }

        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        let user = User::new(self.ctx.generate_id(), request.username, request.email);
        self.ctx.user_repo().create(&user, &password_hash).await?;

        info!(user_id = %user.id, "User registered successfully");

        Ok(UserResponse::from(&user))
    }

    /// Login with JSON credentials
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<TokenResponse> {
        self.issue_for_credentials(&request.username, &request.password)
            .await
    }

    /// Login with form-encoded credentials (OAuth2 password flow shape)
    #[instrument(skip(self, form), fields(username = %form.username))]
    pub async fn login_form(&self, form: TokenForm) -> ServiceResult<TokenResponse> {
        self.issue_for_credentials(&form.username, &form.password)
            .await
    }

    /// Verify username/password and issue an access token
    async fn issue_for_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> ServiceResult<TokenResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_username(username)
            .await?
            .ok_or_else(|| {
                warn!(username = %username, "Login failed: user not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let is_valid = verify_password(password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        let token = self
            .ctx
            .jwt_service()
            .issue_token(&user.username)
            .map_err(ServiceError::from)?;

        info!(user_id = %user.id, "User logged in successfully");

        Ok(TokenResponse::new(token))
    }

    /// Resolve a bearer token to the authenticated user
    ///
    /// Unknown or inactive users fail the same way as bad tokens.
    #[instrument(skip(self, token))]
    pub async fn resolve_bearer(&self, token: &str) -> ServiceResult<User> {
        let claims = self
            .ctx
            .jwt_service()
            .decode_token(token)
            .map_err(ServiceError::from)?;

        let user = self
            .ctx
            .user_repo()
            .find_by_username(claims.username())
            .await?
            .ok_or(ServiceError::App(AppError::InvalidToken))?;

        if !user.is_active {
            warn!(user_id = %user.id, "Rejected token for inactive user");
            return Err(ServiceError::App(AppError::InvalidToken));
        }

        Ok(user)
    }
}

