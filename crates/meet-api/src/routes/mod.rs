//! Route definitions
//!
//! All API routes organized by domain.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::handlers::{admin, auth, content, events, health, profile, users};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(profile_routes())
        .merge(event_routes())
        .merge(content_routes())
        .merge(admin_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/api/token", post(auth::token))
        .route("/api/login", post(auth::login))
}

/// User account routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/", post(users::register))
        .route("/users/me", get(users::get_current_user))
        .route("/users/me", patch(users::update_current_user))
        .route("/users/:user_id", get(users::get_user))
}

/// Profile routes
fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/api/profile/", get(profile::get_profile))
        .route("/api/profile/", patch(profile::update_profile))
        .route("/api/profile/photo", post(profile::upload_photo))
        .route("/api/onboarding-status/", get(profile::onboarding_status))
}

/// Event routes
fn event_routes() -> Router<AppState> {
    Router::new()
        .route("/api/events/", post(events::create_event))
        .route("/api/events/", get(events::list_events))
        .route("/api/events/:event_id", get(events::get_event))
        .route("/api/events/:event_id", patch(events::update_event))
        .route("/api/events/:event_id", delete(events::delete_event))
        .route("/api/events/:event_id/join", post(events::join_event))
        .route("/api/events/:event_id/leave", post(events::leave_event))
        .route("/api/events/:event_id/image", post(events::upload_image))
}

/// Public site content routes
fn content_routes() -> Router<AppState> {
    Router::new().route("/api/content/:key", get(content::get_content))
}

/// Admin routes
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/content/", get(admin::list_content))
        .route("/admin/content/", post(admin::create_content))
        .route("/admin/content/:key", patch(admin::update_content))
        .route("/admin/content/:key", delete(admin::delete_content))
        .route("/admin/users/", get(admin::list_users))
        .route("/admin/users/:user_id", get(admin::get_user))
        .route("/admin/users/:user_id", patch(admin::update_user))
        .route("/admin/users/:user_id", delete(admin::delete_user))
}
