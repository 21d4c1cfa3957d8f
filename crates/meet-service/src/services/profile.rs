//! Profile service
//!
//! Handles the profile sub-fields of a user account: birth date, gender,
//! interests, joined groups, and the onboarding flag.

use meet_core::{Snowflake, SnowflakeParseError};
use tracing::{info, instrument};

use crate::dto::{OnboardingStatusResponse, ProfileResponse, UpdateProfileRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Profile service
pub struct ProfileService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProfileService<'a> {
    /// Create a new ProfileService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get the current user's profile
    #[instrument(skip(self))]
    pub async fn get_profile(&self, user_id: Snowflake) -> ServiceResult<ProfileResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        Ok(ProfileResponse::from(&user))
    }

    /// Partially update the current user's profile
    ///
    /// Omitted fields keep their prior values.
    #[instrument(skip(self, request))]
    pub async fn update_profile(
        &self,
        user_id: Snowflake,
        request: UpdateProfileRequest,
    ) -> ServiceResult<ProfileResponse> {
        let mut user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        let mut changed = false;

        if let Some(birth_date) = request.birth_date {
            user.birth_date = Some(birth_date);
            changed = true;
        }

        if let Some(gender) = request.gender {
            user.gender = Some(gender);
            changed = true;
        }

        if let Some(interests) = request.interests {
            user.interests = interests;
            changed = true;
        }

        if let Some(joined_groups) = request.joined_groups {
            user.joined_groups = joined_groups
                .iter()
                .map(|g| Snowflake::parse(g))
                .collect::<Result<Vec<_>, SnowflakeParseError>>()
                .map_err(|e| ServiceError::validation(format!("Invalid group id: {e}")))?;
            changed = true;
        }

        if let Some(onboarding_completed) = request.onboarding_completed {
            user.onboarding_completed = onboarding_completed;
            changed = true;
        }

        if let Some(profile_photo) = request.profile_photo {
            user.set_profile_photo(Some(profile_photo));
            changed = true;
        }

        if changed {
            self.ctx.user_repo().update(&user).await?;
            info!(user_id = %user_id, "User profile updated");
        }

        Ok(ProfileResponse::from(&user))
    }

    /// Get the current user's onboarding status
    #[instrument(skip(self))]
    pub async fn onboarding_status(
        &self,
        user_id: Snowflake,
    ) -> ServiceResult<OnboardingStatusResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        Ok(OnboardingStatusResponse {
            onboarding_completed: user.onboarding_completed,
        })
    }
}

