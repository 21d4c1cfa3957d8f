//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::Router;
use meet_common::{AppConfig, AppError, JwtService};
use meet_core::SnowflakeGenerator;
use meet_db::{
    create_pool, run_migrations, PgEventRepository, PgSiteContentRepository, PgUserRepository,
};
use meet_service::ServiceContextBuilder;
use meet_storage::LocalMediaStore;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tracing::info;

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// Uses the base middleware stack without rate limiting. Integration tests
/// build their app through this path.
pub fn create_app(state: AppState) -> Router {
    let router = build_router(&state);
    let router = apply_middleware(router);
    router.with_state(state)
}

/// Assemble API routes, health routes, static media serving, and body limits
fn build_router(state: &AppState) -> Router<AppState> {
    let storage = &state.config().storage;
    let media_route = normalize_media_route(&storage.public_base);
    let body_limit = storage.max_file_size_mb as usize * 1024 * 1024;

    create_router()
        .merge(health_routes())
        .nest_service(&media_route, ServeDir::new(&storage.media_root))
        .layer(DefaultBodyLimit::max(body_limit))
}

/// Public base must be a non-empty absolute path for nest_service
fn normalize_media_route(public_base: &str) -> String {
    let trimmed = public_base.trim_end_matches('/');
    if trimmed.is_empty() {
        "/static".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = meet_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Run pending migrations
    run_migrations(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("Database migrations applied");

    // Create media store
    let media_store = LocalMediaStore::new(&config.storage.media_root, &config.storage.public_base);
    media_store
        .ensure_root()
        .await
        .map_err(|e| AppError::Storage(e.to_string()))?;
    let media_store = Arc::new(media_store);

    // Create JWT service
    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
    ));

    // Create Snowflake generator
    let snowflake_generator = Arc::new(SnowflakeGenerator::new(config.snowflake.worker_id));

    // Create repositories
    let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
    let event_repo = Arc::new(PgEventRepository::new(pool.clone()));
    let content_repo = Arc::new(PgSiteContentRepository::new(pool.clone()));

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .pool(pool)
        .user_repo(user_repo)
        .event_repo(event_repo)
        .content_repo(content_repo)
        .media_store(media_store)
        .jwt_service(jwt_service)
        .snowflake_generator(snowflake_generator)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

/// Run the complete server with configuration
///
/// Applies the full middleware stack including rate limiting and CORS.
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.api.port));

    let state = create_app_state(config).await?;

    let router = build_router(&state);
    let router = apply_middleware_with_config(
        router,
        &state.config().rate_limit,
        &state.config().cors,
        state.config().app.env.is_production(),
    );
    let app = router.with_state(state);

    run_server(app, addr).await
}
