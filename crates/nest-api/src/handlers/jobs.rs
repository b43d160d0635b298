//! Job handlers
//!
//! Posting CRUD, filtered listing, and skill-matched recommendations.

use axum::{
    extract::{Query, State},
    Json,
};
use nest_core::DomainError;
use nest_service::dto::{CreateJobRequest, JobListQuery, JobResponse, UpdateJobRequest};
use nest_service::JobService;

use crate::extractors::{AuthUser, SnowflakePath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List open jobs matching optional filters
///
/// GET /api/jobs
pub async fn list_jobs(
    State(state): State<AppState>,
    Query(query): Query<JobListQuery>,
) -> ApiResult<Json<Vec<JobResponse>>> {
    let service = JobService::new(state.service_context());
    let jobs = service.list(query.into()).await?;
    Ok(Json(jobs))
}

/// Skill-matched recommendations for the authenticated user
///
/// GET /api/jobs/recommendations
pub async fn recommendations(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<JobResponse>>> {
    let service = JobService::new(state.service_context());
    let jobs = service.recommendations(auth.user.id).await?;
    Ok(Json(jobs))
}

/// Get a single job with its recruiter
///
/// GET /api/jobs/:id
pub async fn get_job(
    State(state): State<AppState>,
    SnowflakePath(id): SnowflakePath,
) -> ApiResult<Json<JobResponse>> {
    let service = JobService::new(state.service_context());
    let job = service.get(id).await?;
    Ok(Json(job))
}

/// Create a job posting
///
/// POST /api/jobs
pub async fn create_job(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateJobRequest>,
) -> ApiResult<Created<Json<JobResponse>>> {
    if !auth.user.role.can_post_jobs() {
        return Err(DomainError::RoleNotPermitted.into());
    }

    let service = JobService::new(state.service_context());
    let job = service.create(request, &auth.user).await?;
    Ok(Created(Json(job)))
}

/// Update a job posting
///
/// PUT /api/jobs/:id
pub async fn update_job(
    State(state): State<AppState>,
    auth: AuthUser,
    SnowflakePath(id): SnowflakePath,
    ValidatedJson(request): ValidatedJson<UpdateJobRequest>,
) -> ApiResult<Json<JobResponse>> {
    let service = JobService::new(state.service_context());
    let job = service.update(id, request, &auth.user).await?;
    Ok(Json(job))
}

/// Delete a job posting
///
/// DELETE /api/jobs/:id
pub async fn delete_job(
    State(state): State<AppState>,
    auth: AuthUser,
    SnowflakePath(id): SnowflakePath,
) -> ApiResult<NoContent> {
    let service = JobService::new(state.service_context());
    service.delete(id, &auth.user).await?;
    Ok(NoContent)
}
