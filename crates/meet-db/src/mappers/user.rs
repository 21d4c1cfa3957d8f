//! User entity <-> model mapper

use meet_core::entities::User;
use meet_core::value_objects::Snowflake;

use crate::models::UserModel;

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: Snowflake::new(model.id),
            username: model.username,
            email: model.email,
            is_admin: model.is_admin,
            is_active: model.is_active,
            birth_date: model.birth_date,
            gender: model.gender,
            interests: model.interests,
            joined_groups: model.joined_groups.into_iter().map(Snowflake::new).collect(),
            onboarding_completed: model.onboarding_completed,
            profile_photo: model.profile_photo,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
