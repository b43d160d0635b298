//! Authentication extractor
//!
//! Extracts and validates JWT tokens from the Authorization header.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use nest_core::entities::User;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated user extracted from a JWT bearer token
///
/// Loads the full user row so handlers can check roles and reach the
/// account's name and email. A token whose subject no longer exists is
/// rejected, so deleted accounts cannot keep acting on old tokens.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user: User,
}

impl AuthUser {
    /// Create a new AuthUser
    pub fn new(user: User) -> Self {
        Self { user }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Extract the Authorization header
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        // Get the app state to access JWT service
        let app_state = AppState::from_ref(state);

        // Validate the token
        let claims = app_state
            .jwt_service()
            .decode_token(bearer.token())
            .map_err(|e| {
                tracing::warn!(error = %e, "Invalid bearer token");
                ApiError::App(e)
            })?;

        // Extract user ID from claims
        let user_id = claims.user_id().map_err(|e| {
            tracing::warn!(error = %e, "Invalid user ID in token");
            ApiError::InvalidAuthFormat
        })?;

        // Resolve the account behind the token
        let user = app_state
            .service_context()
            .user_repo()
            .find_by_id(user_id)
            .await
            .map_err(ApiError::from)?
            .ok_or_else(|| {
                tracing::warn!(user_id = %user_id, "Token subject no longer exists");
                ApiError::InvalidAuthFormat
            })?;

        Ok(AuthUser::new(user))
    }
}
