//! Route definitions
//!
//! All API routes organized by domain and mounted under /api. Uploaded
//! files are served back under /uploads.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::services::ServeDir;

use crate::handlers::{applications, auth, health, jobs, profile};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router(upload_dir: &str) -> Router<AppState> {
    Router::new()
        .nest("/api", api_routes())
        .nest_service("/uploads", ServeDir::new(upload_dir))
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(job_routes())
        .merge(application_routes())
        .merge(profile_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/me", get(auth::me))
        .route("/auth/forgot-password", post(auth::forgot_password))
        .route("/auth/verify-otp", post(auth::verify_otp))
        .route("/auth/reset-password", post(auth::reset_password))
}

/// Job routes
///
/// The recommendations route is registered before /:id so the literal
/// segment is not swallowed by the ID matcher.
fn job_routes() -> Router<AppState> {
    Router::new()
        .route("/jobs", get(jobs::list_jobs))
        .route("/jobs", post(jobs::create_job))
        .route("/jobs/recommendations", get(jobs::recommendations))
        .route("/jobs/:id", get(jobs::get_job))
        .route("/jobs/:id", put(jobs::update_job))
        .route("/jobs/:id", delete(jobs::delete_job))
}

/// Application routes
fn application_routes() -> Router<AppState> {
    Router::new()
        .route("/applications/my", get(applications::my_applications))
        .route("/applications/job/:job_id", get(applications::applications_for_job))
        .route("/applications/:job_id", post(applications::apply))
        .route("/applications/:id", put(applications::update_status))
}

/// Profile routes
fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/profile/me", get(profile::me))
        .route("/profile", post(profile::upsert))
        .route("/profile/resume", post(profile::upload_resume))
        .route("/profile/upload-file", post(profile::upload_file))
}
