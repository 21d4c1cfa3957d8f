//! Admin service
//!
//! Admin-only user directory management.

use meet_common::auth::{hash_password, validate_password_strength};
use meet_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::{AdminUpdateUserRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Admin service
pub struct AdminService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AdminService<'a> {
    /// Create a new AdminService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List users, paginated
    #[instrument(skip(self))]
    pub async fn list_users(&self, skip: i64, limit: i64) -> ServiceResult<Vec<UserResponse>> {
        let users = self.ctx.user_repo().list(skip, limit).await?;
        Ok(users.iter().map(UserResponse::from).collect())
    }

    /// Get a user by ID
    #[instrument(skip(self))]
    pub async fn get_user(&self, user_id: Snowflake) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        Ok(UserResponse::from(&user))
    }

    /// Partially update a user; uniqueness is re-checked
    #[instrument(skip(self, request))]
    pub async fn update_user(
        &self,
        user_id: Snowflake,
        request: AdminUpdateUserRequest,
    ) -> ServiceResult<UserResponse> {
        let mut user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        let mut changed = false;

        if let Some(username) = request.username {
            if username != user.username {
                if self.ctx.user_repo().username_exists(&username).await? {
                    return Err(ServiceError::conflict("Username already registered"));
                }
                user.set_username(username);
                changed = true;
            }
        }

        if let Some(email) = request.email {
            if email != user.email {
                if self.ctx.user_repo().email_exists(&email).await? {
                    return Err(ServiceError::conflict("Email already registered"));
                }
                user.set_email(email);
                changed = true;
            }
        }

        if let Some(is_admin) = request.is_admin {
            user.is_admin = is_admin;
            changed = true;
        }

        if let Some(is_active) = request.is_active {
            user.is_active = is_active;
            changed = true;
        }

        if changed {
            self.ctx.user_repo().update(&user).await?;
        }

        if let Some(password) = request.password {
            validate_password_strength(&password).map_err(ServiceError::from)?;
            let password_hash =
                hash_password(&password).map_err(|e| ServiceError::internal(e.to_string()))?;
            self.ctx
                .user_repo()
                .update_password(user_id, &password_hash)
                .await?;
        }

        info!(user_id = %user_id, "User updated by admin");

        Ok(UserResponse::from(&user))
    }

    /// Hard-delete a user
    #[instrument(skip(self))]
    pub async fn delete_user(&self, user_id: Snowflake) -> ServiceResult<()> {
        self.ctx.user_repo().delete(user_id).await?;
        info!(user_id = %user_id, "User deleted by admin");
        Ok(())
    }
}

