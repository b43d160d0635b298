//! Profile handlers
//!
//! Profile read/upsert and file uploads (resumes and general files).
//! Uploaded files are stored on local disk under the configured upload
//! directory and served back under /uploads.

use axum::{
    extract::{Multipart, State},
    Json,
};
use nest_core::entities::ProfilePatch;
use nest_service::dto::{ProfileResponse, UploadResponse, UpsertProfileRequest};
use nest_service::{ProfileService, ServiceError};

use crate::extractors::AuthUser;
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// The authenticated user's profile
///
/// GET /api/profile/me
pub async fn me(State(state): State<AppState>, auth: AuthUser) -> ApiResult<Json<ProfileResponse>> {
    let service = ProfileService::new(state.service_context());
    let profile = service.me(auth.user.id).await?;
    Ok(Json(profile))
}

/// Create or update the authenticated user's profile
///
/// POST /api/profile
pub async fn upsert(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(request): Json<UpsertProfileRequest>,
) -> ApiResult<Json<ProfileResponse>> {
    let service = ProfileService::new(state.service_context());
    let profile = service
        .upsert(auth.user.id, ProfilePatch::from(request))
        .await?;
    Ok(Json(profile))
}

/// Upload a resume and attach it to the profile
///
/// POST /api/profile/resume
pub async fn upload_resume(
    State(state): State<AppState>,
    auth: AuthUser,
    multipart: Multipart,
) -> ApiResult<Json<ProfileResponse>> {
    let url = store_upload(&state, multipart).await?;

    let service = ProfileService::new(state.service_context());
    let profile = service.set_resume(auth.user.id, url).await?;
    Ok(Json(profile))
}

/// Upload a file without touching the profile
///
/// POST /api/profile/upload-file
pub async fn upload_file(
    State(state): State<AppState>,
    _auth: AuthUser,
    multipart: Multipart,
) -> ApiResult<Json<UploadResponse>> {
    let url = store_upload(&state, multipart).await?;
    Ok(Json(UploadResponse { url }))
}

/// Persist the first file field of a multipart body and return its URL path
async fn store_upload(state: &AppState, mut multipart: Multipart) -> ApiResult<String> {
    let max_bytes = u64::from(state.config().storage.max_file_size_mb) * 1024 * 1024;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ServiceError::bad_request(e.to_string()))
        .map_err(ApiError::from)?
    {
        let Some(original_name) = field.file_name().map(ToString::to_string) else {
            continue;
        };

        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::from(ServiceError::bad_request(e.to_string())))?;

        if data.len() as u64 > max_bytes {
            return Err(ServiceError::bad_request(format!(
                "File exceeds the {} MB limit",
                state.config().storage.max_file_size_mb
            ))
            .into());
        }

        let stored_name = stored_file_name(&original_name);
        let dir = std::path::Path::new(&state.config().storage.upload_dir);
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(ApiError::internal)?;
        tokio::fs::write(dir.join(&stored_name), &data)
            .await
            .map_err(ApiError::internal)?;

        tracing::info!(file = %stored_name, bytes = data.len(), "File stored");

        return Ok(format!("/uploads/{stored_name}"));
    }

    Err(ServiceError::bad_request("No file field in request").into())
}

/// A collision-free disk name keeping only a sanitized extension
fn stored_file_name(original: &str) -> String {
    let ext: String = original
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .unwrap_or("")
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .take(8)
        .collect();

    let id = uuid::Uuid::new_v4();
    if ext.is_empty() {
        id.to_string()
    } else {
        format!("{id}.{ext}")
    }
}
