//! Authentication handlers
//!
//! Endpoints for registration, login, the current user, and the OTP
//! password-reset flow.

use axum::{extract::State, Json};
use nest_service::dto::{
    AuthResponse, ForgotPasswordRequest, LoginRequest, MessageResponse, RegisterRequest,
    ResetPasswordRequest, UserResponse, VerifyOtpRequest,
};
use nest_service::AuthService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Register a new user
///
/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<Created<Json<AuthResponse>>> {
    let service = AuthService::new(state.service_context());
    let response = service.register(request).await?;
    Ok(Created(Json(response)))
}

/// Login with email and password
///
/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.login(request).await?;
    Ok(Json(response))
}

/// The authenticated user's own account
///
/// GET /api/auth/me
pub async fn me(auth: AuthUser) -> Json<UserResponse> {
    Json(UserResponse::from(&auth.user))
}

/// Issue a password-reset OTP and email it
///
/// POST /api/auth/forgot-password
pub async fn forgot_password(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ForgotPasswordRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = AuthService::new(state.service_context());
    service.forgot_password(request).await?;
    Ok(Json(MessageResponse::new("OTP sent to your email")))
}

/// Check a password-reset OTP without consuming it
///
/// POST /api/auth/verify-otp
pub async fn verify_otp(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<VerifyOtpRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = AuthService::new(state.service_context());
    service.verify_otp(request).await?;
    Ok(Json(MessageResponse::new("OTP verified")))
}

/// Reset the password with a valid OTP
///
/// POST /api/auth/reset-password
pub async fn reset_password(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ResetPasswordRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.reset_password(request).await?;
    Ok(Json(response))
}
