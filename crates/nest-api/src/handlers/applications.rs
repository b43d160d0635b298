//! Application handlers
//!
//! Students apply to jobs and review their own applications; recruiters
//! review and triage applicants for their postings.

use axum::{extract::State, Json};
use nest_core::DomainError;
use nest_service::dto::{
    ApplicantApplicationResponse, ApplicationResponse, UpdateApplicationStatusRequest,
};
use nest_service::ApplicationService;

use crate::extractors::{AuthUser, SnowflakePath};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Apply to a job as the authenticated student
///
/// POST /api/applications/:job_id
pub async fn apply(
    State(state): State<AppState>,
    auth: AuthUser,
    SnowflakePath(job_id): SnowflakePath,
) -> ApiResult<Created<Json<ApplicationResponse>>> {
    let service = ApplicationService::new(state.service_context());
    let application = service.apply(job_id, &auth.user).await?;
    Ok(Created(Json(application)))
}

/// The authenticated student's applications
///
/// GET /api/applications/my
pub async fn my_applications(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<ApplicationResponse>>> {
    if !auth.user.role.is_student() {
        return Err(DomainError::RoleNotPermitted.into());
    }

    let service = ApplicationService::new(state.service_context());
    let applications = service.my_applications(&auth.user).await?;
    Ok(Json(applications))
}

/// Applications for a job, visible to its owner or an admin
///
/// GET /api/applications/job/:job_id
pub async fn applications_for_job(
    State(state): State<AppState>,
    auth: AuthUser,
    SnowflakePath(job_id): SnowflakePath,
) -> ApiResult<Json<Vec<ApplicantApplicationResponse>>> {
    let service = ApplicationService::new(state.service_context());
    let applications = service.for_job(job_id, &auth.user).await?;
    Ok(Json(applications))
}

/// Change an application's status
///
/// PUT /api/applications/:id
pub async fn update_status(
    State(state): State<AppState>,
    auth: AuthUser,
    SnowflakePath(id): SnowflakePath,
    Json(request): Json<UpdateApplicationStatusRequest>,
) -> ApiResult<Json<ApplicationResponse>> {
    let service = ApplicationService::new(state.service_context());
    let application = service.update_status(id, request.status, &auth.user).await?;
    Ok(Json(application))
}
