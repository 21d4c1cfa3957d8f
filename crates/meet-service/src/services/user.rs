//! User service
//!
//! Handles account reads and self-service account updates.

use meet_core::entities::User;
use meet_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::{UpdateMeRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get user by ID
    #[instrument(skip(self))]
    pub async fn get_user(&self, user_id: Snowflake) -> ServiceResult<UserResponse> {
        let user = self.get_user_entity(user_id).await?;
        Ok(UserResponse::from(&user))
    }

    /// Get user entity by ID
    #[instrument(skip(self))]
    pub async fn get_user_entity(&self, user_id: Snowflake) -> ServiceResult<User> {
        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))
    }

    /// Update the current user's account fields
    ///
    /// Only the provided fields change; uniqueness is re-checked.
    #[instrument(skip(self, request))]
    pub async fn update_me(
        &self,
        user_id: Snowflake,
        request: UpdateMeRequest,
    ) -> ServiceResult<UserResponse> {
        let mut user = self.get_user_entity(user_id).await?;

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

        if changed {
            self.ctx.user_repo().update(&user).await?;
            info!(user_id = %user_id, "User account updated");
        }

        Ok(UserResponse::from(&user))
    }
}

