//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;

/// Register a fresh user and return the registration data plus an access token
async fn register_and_login(server: &TestServer) -> (RegisterRequest, String) {
    let request = RegisterRequest::unique();
    let response = server.post("/users/", &request).await.unwrap();
    let _user: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let login = LoginRequest::from_register(&request);
    let response = server.post("/api/login", &login).await.unwrap();
    let token: TokenResponse = assert_json(response, StatusCode::OK).await.unwrap();

    (request, token.access_token)
}

/// Promote a registered user to admin directly in the database
async fn promote_to_admin(username: &str) {
    let pool = meet_db::create_pool_from_env()
        .await
        .expect("Failed to connect to database");
    sqlx::query("UPDATE users SET is_admin = TRUE WHERE username = $1")
        .bind(username)
        .execute(&pool)
        .await
        .expect("Failed to promote user");
}

/// Register a user, promote them to admin, and log in again
async fn register_admin(server: &TestServer) -> (RegisterRequest, String) {
    let request = RegisterRequest::unique();
    let response = server.post("/users/", &request).await.unwrap();
    let _user: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    promote_to_admin(&request.username).await;

    let login = LoginRequest::from_register(&request);
    let response = server.post("/api/login", &login).await.unwrap();
    let token: TokenResponse = assert_json(response, StatusCode::OK).await.unwrap();

    (request, token.access_token)
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/users/", &request).await.unwrap();
    let user: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(user.username, request.username);
    assert_eq!(user.email, request.email);
    assert!(!user.is_admin);
    assert!(user.is_active);
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    // First registration
    server.post("/users/", &request).await.unwrap();

    // Second registration with same email but a different username
    let second = RegisterRequest {
        username: format!("{}x", request.username),
        email: request.email.clone(),
        password: request.password.clone(),
    };
    let response = server.post("/users/", &second).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.message, "Email already registered");
}

#[tokio::test]
async fn test_register_duplicate_username() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    server.post("/users/", &request).await.unwrap();

    let second = RegisterRequest {
        username: request.username.clone(),
        email: format!("x{}", request.email),
        password: request.password.clone(),
    };
    let response = server.post("/users/", &second).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.message, "Username already registered");
}

#[tokio::test]
async fn test_login_json() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::unique();
    server.post("/users/", &register_req).await.unwrap();

    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/api/login", &login_req).await.unwrap();
    let token: TokenResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(!token.access_token.is_empty());
    assert_eq!(token.token_type, "bearer");
}

#[tokio::test]
async fn test_token_form() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::unique();
    server.post("/users/", &register_req).await.unwrap();

    let form = TokenForm::from_register(&register_req);
    let response = server.post_form("/api/token", &form).await.unwrap();
    let token: TokenResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(!token.access_token.is_empty());
    assert_eq!(token.token_type, "bearer");
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let login_req = LoginRequest {
        username: "nonexistentuser".to_string(),
        password: "wrongpass".to_string(),
    };

    let response = server.post("/api/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_login_wrong_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::unique();
    server.post("/users/", &register_req).await.unwrap();

    let login_req = LoginRequest {
        username: register_req.username.clone(),
        password: "WrongPass123!".to_string(),
    };
    let response = server.post("/api/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Current User Tests
// ============================================================================

#[tokio::test]
async fn test_get_current_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, token) = register_and_login(&server).await;

    let response = server.get_auth("/users/me", &token).await.unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(user.username, register_req.username);
    assert_eq!(user.email, register_req.email);
}

#[tokio::test]
async fn test_get_current_user_without_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/users/me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_get_current_user_invalid_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get_auth("/users/me", "not-a-real-token").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_update_current_user_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, token) = register_and_login(&server).await;

    let new_email = format!("updated_{}", register_req.email);
    let body = serde_json::json!({ "email": new_email });
    let response = server.patch_auth("/users/me", &token, &body).await.unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(user.email, new_email);
    assert_eq!(user.username, register_req.username);
}

#[tokio::test]
async fn test_get_user_by_id() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_register_req, token) = register_and_login(&server).await;

    let response = server.get_auth("/users/me", &token).await.unwrap();
    let me: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    let response = server
        .get_auth(&format!("/users/{}", me.id), &token)
        .await
        .unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(user.id, me.id);
}

// ============================================================================
// Profile Tests
// ============================================================================

#[tokio::test]
async fn test_get_profile_defaults() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_register_req, token) = register_and_login(&server).await;

    let response = server.get_auth("/api/profile/", &token).await.unwrap();
    let profile: ProfileResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(profile.gender.is_none());
    assert!(profile.interests.is_empty());
    assert!(profile.joined_groups.is_empty());
    assert!(!profile.onboarding_completed);
}

#[tokio::test]
async fn test_update_profile_partial_preserves_fields() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_register_req, token) = register_and_login(&server).await;

    // Set gender first
    let body = serde_json::json!({ "gender": "female" });
    let response = server.patch_auth("/api/profile/", &token, &body).await.unwrap();
    let profile: ProfileResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(profile.gender.as_deref(), Some("female"));

    // Updating interests must not clear gender
    let body = serde_json::json!({ "interests": ["hiking", "board games"] });
    let response = server.patch_auth("/api/profile/", &token, &body).await.unwrap();
    let profile: ProfileResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(profile.gender.as_deref(), Some("female"));
    assert_eq!(profile.interests, vec!["hiking", "board games"]);
}

#[tokio::test]
async fn test_update_profile_photo_url() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_register_req, token) = register_and_login(&server).await;

    // The photo URL is settable through the profile PATCH, not only the
    // upload endpoint
    let body = serde_json::json!({ "profile_photo": "/static/external_avatar.png" });
    let response = server.patch_auth("/api/profile/", &token, &body).await.unwrap();
    let profile: ProfileResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(
        profile.profile_photo.as_deref(),
        Some("/static/external_avatar.png")
    );

    // And it survives unrelated partial updates
    let body = serde_json::json!({ "gender": "male" });
    let response = server.patch_auth("/api/profile/", &token, &body).await.unwrap();
    let profile: ProfileResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(
        profile.profile_photo.as_deref(),
        Some("/static/external_avatar.png")
    );
}

#[tokio::test]
async fn test_onboarding_status_flow() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_register_req, token) = register_and_login(&server).await;

    let response = server.get_auth("/api/onboarding-status/", &token).await.unwrap();
    let status: OnboardingStatusResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!status.completed);

    let body = serde_json::json!({ "onboarding_completed": true });
    server.patch_auth("/api/profile/", &token, &body).await.unwrap();

    let response = server.get_auth("/api/onboarding-status/", &token).await.unwrap();
    let status: OnboardingStatusResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(status.completed);
}

#[tokio::test]
async fn test_upload_profile_photo() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_register_req, token) = register_and_login(&server).await;

    let response = server
        .post_file(
            "/api/profile/photo",
            &token,
            "photo",
            "avatar.png",
            "image/png",
            tiny_png(),
        )
        .await
        .unwrap();
    let upload: PhotoUploadResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(upload.success);
    assert!(upload.photo_url.contains("_profile.png"));

    // The profile now carries the photo URL
    let response = server.get_auth("/api/profile/", &token).await.unwrap();
    let profile: ProfileResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(profile.profile_photo.as_deref(), Some(upload.photo_url.as_str()));
}

#[tokio::test]
async fn test_upload_profile_photo_removes_stale_file() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_register_req, token) = register_and_login(&server).await;

    let response = server
        .post_file(
            "/api/profile/photo",
            &token,
            "photo",
            "avatar.jpg",
            "image/jpeg",
            tiny_png(),
        )
        .await
        .unwrap();
    let first: PhotoUploadResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(first.photo_url.contains("_profile.jpg"));

    let response = server
        .post_file(
            "/api/profile/photo",
            &token,
            "photo",
            "avatar.png",
            "image/png",
            tiny_png(),
        )
        .await
        .unwrap();
    let second: PhotoUploadResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(second.photo_url.contains("_profile.png"));

    // The differently named object from the first upload is gone from disk
    let media_root = std::path::PathBuf::from(std::env::var("MEDIA_ROOT").unwrap());
    let old_name = first.photo_url.rsplit('/').next().unwrap();
    let new_name = second.photo_url.rsplit('/').next().unwrap();
    assert!(!media_root.join(old_name).exists());
    assert!(media_root.join(new_name).exists());
}

#[tokio::test]
async fn test_upload_profile_photo_rejects_non_image() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_register_req, token) = register_and_login(&server).await;

    let response = server
        .post_file(
            "/api/profile/photo",
            &token,
            "photo",
            "notes.txt",
            "text/plain",
            b"not an image".to_vec(),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Event Tests
// ============================================================================

#[tokio::test]
async fn test_create_event() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_register_req, token) = register_and_login(&server).await;

    let response = server.get_auth("/users/me", &token).await.unwrap();
    let me: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    let request = CreateEventRequest::unique();
    let response = server.post_auth("/api/events/", &token, &request).await.unwrap();
    let event: EventResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(event.title, request.title);
    assert_eq!(event.created_by, me.id);
    // Creator is automatically a participant
    assert_eq!(event.participants, vec![me.id]);
    assert_eq!(event.participant_count, 1);
    assert!(event.is_active);
}

#[tokio::test]
async fn test_list_events_shows_created_event() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_register_req, token) = register_and_login(&server).await;

    let request = CreateEventRequest::unique();
    let response = server.post_auth("/api/events/", &token, &request).await.unwrap();
    let created: EventResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server.get_auth("/api/events/?filter_type=my", &token).await.unwrap();
    let events: Vec<EventResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(events.iter().any(|e| e.id == created.id));
}

#[tokio::test]
async fn test_join_and_leave_event() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_creator_req, creator_token) = register_and_login(&server).await;
    let (_joiner_req, joiner_token) = register_and_login(&server).await;

    let request = CreateEventRequest::unique();
    let response = server
        .post_auth("/api/events/", &creator_token, &request)
        .await
        .unwrap();
    let event: EventResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Join
    let response = server
        .post_auth_empty(&format!("/api/events/{}/join", event.id), &joiner_token)
        .await
        .unwrap();
    let message: MessageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(message.message, "Successfully joined the event");

    // Joining again is a no-op with a distinct message
    let response = server
        .post_auth_empty(&format!("/api/events/{}/join", event.id), &joiner_token)
        .await
        .unwrap();
    let message: MessageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(message.message, "Already joined this event");

    // Leave
    let response = server
        .post_auth_empty(&format!("/api/events/{}/leave", event.id), &joiner_token)
        .await
        .unwrap();
    let message: MessageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(message.message, "Successfully left the event");

    // Leaving again is also a no-op
    let response = server
        .post_auth_empty(&format!("/api/events/{}/leave", event.id), &joiner_token)
        .await
        .unwrap();
    let message: MessageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(message.message, "Not joined this event");
}

#[tokio::test]
async fn test_join_full_event() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_creator_req, creator_token) = register_and_login(&server).await;
    let (_second_req, second_token) = register_and_login(&server).await;
    let (_third_req, third_token) = register_and_login(&server).await;

    // Capacity 2; the creator takes one slot on creation
    let request = CreateEventRequest::with_capacity(2);
    let response = server
        .post_auth("/api/events/", &creator_token, &request)
        .await
        .unwrap();
    let event: EventResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth_empty(&format!("/api/events/{}/join", event.id), &second_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .post_auth_empty(&format!("/api/events/{}/join", event.id), &third_token)
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.code, "EVENT_FULL");
}

#[tokio::test]
async fn test_creator_cannot_leave() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_register_req, token) = register_and_login(&server).await;

    let request = CreateEventRequest::unique();
    let response = server.post_auth("/api/events/", &token, &request).await.unwrap();
    let event: EventResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth_empty(&format!("/api/events/{}/leave", event.id), &token)
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.code, "CREATOR_CANNOT_LEAVE");
}

#[tokio::test]
async fn test_update_event_requires_creator() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_creator_req, creator_token) = register_and_login(&server).await;
    let (_other_req, other_token) = register_and_login(&server).await;

    let request = CreateEventRequest::unique();
    let response = server
        .post_auth("/api/events/", &creator_token, &request)
        .await
        .unwrap();
    let event: EventResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let body = serde_json::json!({ "title": "Hijacked" });
    let response = server
        .patch_auth(&format!("/api/events/{}", event.id), &other_token, &body)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // The creator can update
    let body = serde_json::json!({ "title": "Renamed Event" });
    let response = server
        .patch_auth(&format!("/api/events/{}", event.id), &creator_token, &body)
        .await
        .unwrap();
    let updated: EventResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.title, "Renamed Event");
}

#[tokio::test]
async fn test_delete_event_soft_deletes() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_register_req, token) = register_and_login(&server).await;

    let request = CreateEventRequest::unique();
    let response = server.post_auth("/api/events/", &token, &request).await.unwrap();
    let event: EventResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete_auth(&format!("/api/events/{}", event.id), &token)
        .await
        .unwrap();
    let message: MessageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(message.message, "Event successfully deleted");

    // Fetch by ID still works, but the event is no longer active
    let response = server
        .get_auth(&format!("/api/events/{}", event.id), &token)
        .await
        .unwrap();
    let fetched: EventResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!fetched.is_active);

    // And the event no longer appears in listings
    let response = server.get_auth("/api/events/", &token).await.unwrap();
    let events: Vec<EventResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!events.iter().any(|e| e.id == event.id));
}

#[tokio::test]
async fn test_upload_event_image() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_register_req, token) = register_and_login(&server).await;

    let request = CreateEventRequest::unique();
    let response = server.post_auth("/api/events/", &token, &request).await.unwrap();
    let event: EventResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_file(
            &format!("/api/events/{}/image", event.id),
            &token,
            "file",
            "banner.png",
            "image/png",
            tiny_png(),
        )
        .await
        .unwrap();
    let upload: ImageUploadResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(upload.success);
    assert!(upload.image_url.contains(&format!("event_{}", event.id)));

    let response = server
        .get_auth(&format!("/api/events/{}", event.id), &token)
        .await
        .unwrap();
    let fetched: EventResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.image_url.as_deref(), Some(upload.image_url.as_str()));
}

#[tokio::test]
async fn test_upload_event_image_requires_creator() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_creator_req, creator_token) = register_and_login(&server).await;
    let (_other_req, other_token) = register_and_login(&server).await;

    let request = CreateEventRequest::unique();
    let response = server
        .post_auth("/api/events/", &creator_token, &request)
        .await
        .unwrap();
    let event: EventResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_file(
            &format!("/api/events/{}/image", event.id),
            &other_token,
            "file",
            "banner.png",
            "image/png",
            tiny_png(),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

// ============================================================================
// Site Content Tests
// ============================================================================

#[tokio::test]
async fn test_content_admin_crud_and_public_read() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_admin_req, admin_token) = register_admin(&server).await;

    // Create
    let request = CreateContentRequest::unique();
    let response = server
        .post_auth("/admin/content/", &admin_token, &request)
        .await
        .unwrap();
    let content: ContentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(content.key, request.key);
    assert_eq!(content.value, request.value);

    // Public read without auth
    let response = server
        .get(&format!("/api/content/{}", request.key))
        .await
        .unwrap();
    let fetched: ContentResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.value, request.value);

    // Update
    let new_value = "Updated headline";
    let body = serde_json::json!({ "value": new_value });
    let response = server
        .patch_auth(&format!("/admin/content/{}", request.key), &admin_token, &body)
        .await
        .unwrap();
    let updated: ContentResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.value, new_value);

    // Delete
    let response = server
        .delete_auth(&format!("/admin/content/{}", request.key), &admin_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Gone
    let response = server
        .get(&format!("/api/content/{}", request.key))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_content_admin_routes_require_admin() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_register_req, token) = register_and_login(&server).await;

    let request = CreateContentRequest::unique();
    let response = server.post_auth("/admin/content/", &token, &request).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server.get_auth("/admin/content/", &token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_missing_content_returns_not_found() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/content/no_such_key_at_all").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Admin User Management Tests
// ============================================================================

#[tokio::test]
async fn test_admin_list_users() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (admin_req, admin_token) = register_admin(&server).await;

    let response = server.get_auth("/admin/users/", &admin_token).await.unwrap();
    let users: Vec<UserResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(users.iter().any(|u| u.username == admin_req.username));
}

#[tokio::test]
async fn test_admin_deactivate_user_blocks_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_admin_req, admin_token) = register_admin(&server).await;
    let (target_req, target_token) = register_and_login(&server).await;

    let response = server.get_auth("/users/me", &target_token).await.unwrap();
    let target: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    // Deactivate
    let body = serde_json::json!({ "is_active": false });
    let response = server
        .patch_auth(&format!("/admin/users/{}", target.id), &admin_token, &body)
        .await
        .unwrap();
    let updated: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!updated.is_active);

    // Existing token is rejected once the account is inactive
    let response = server.get_auth("/users/me", &target_token).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    // A fresh login still issues a token, but it is rejected on use
    let login = LoginRequest::from_register(&target_req);
    let response = server.post("/api/login", &login).await.unwrap();
    let token: TokenResponse = assert_json(response, StatusCode::OK).await.unwrap();
    let response = server.get_auth("/users/me", &token.access_token).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_admin_delete_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_admin_req, admin_token) = register_admin(&server).await;
    let (_target_req, target_token) = register_and_login(&server).await;

    let response = server.get_auth("/users/me", &target_token).await.unwrap();
    let target: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    let response = server
        .delete_auth(&format!("/admin/users/{}", target.id), &admin_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth(&format!("/admin/users/{}", target.id), &admin_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_admin_routes_require_admin() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_register_req, token) = register_and_login(&server).await;

    let response = server.get_auth("/admin/users/", &token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}
