//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use axum::Router;
use nest_common::{AppConfig, AppError, JwtService, Mailer};
use nest_core::SnowflakeGenerator;
use nest_db::{
    create_pool, run_migrations, PgApplicationRepository, PgJobRepository, PgProfileRepository,
    PgUserRepository,
};
use nest_service::ServiceContext;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Directory holding the SQL migrations, relative to the workspace root
const MIGRATIONS_DIR: &str = "crates/nest-db/migrations";

/// Resolve the migrations directory
///
/// MIGRATIONS_DIR overrides; otherwise the workspace-relative default is
/// used, falling back to a source-tree path when the process runs from a
/// different working directory (as the test harness does).
fn migrations_dir() -> std::path::PathBuf {
    if let Ok(dir) = std::env::var("MIGRATIONS_DIR") {
        return dir.into();
    }
    let default = Path::new(MIGRATIONS_DIR);
    if default.exists() {
        return default.to_path_buf();
    }
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../nest-db/migrations")
}

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let router = create_router(&config.storage.upload_dir).merge(health_routes());
    let router = apply_middleware(router, &config.cors, config.app.env.is_production());
    router.with_state(state.clone())
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&config.database)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Database connection failed: {e}")))?;
    info!("PostgreSQL connection established");

    // Run migrations
    run_migrations(&pool, &migrations_dir())
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Migrations failed: {e}")))?;
    info!("Migrations applied");

    // Create JWT service
    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.token_expiry,
    ));

    // Create Snowflake generator
    let snowflake_generator = Arc::new(SnowflakeGenerator::new(config.snowflake.worker_id));

    // Create mailer
    let mailer = Mailer::from_config(&config.smtp)?;

    // Create repositories
    let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
    let job_repo = Arc::new(PgJobRepository::new(pool.clone()));
    let profile_repo = Arc::new(PgProfileRepository::new(pool.clone()));
    let application_repo = Arc::new(PgApplicationRepository::new(pool.clone()));

    // Build service context
    let service_context = ServiceContext::new(
        pool,
        user_repo,
        job_repo,
        profile_repo,
        application_repo,
        jwt_service,
        snowflake_generator,
        mailer,
    );

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .server
        .address()
        .parse()
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid server address: {e}")))?;

    // Uploads are served from disk, so the directory must exist up front
    tokio::fs::create_dir_all(&config.storage.upload_dir)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Cannot create upload dir: {e}")))?;

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}
