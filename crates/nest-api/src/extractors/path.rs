//! Snowflake path parameter extractor
//!
//! Parses a single path segment into a Snowflake ID with a consistent
//! 400 response on malformed input.

use axum::{async_trait, extract::FromRequestParts, extract::Path, http::request::Parts};
use nest_core::Snowflake;

use crate::response::ApiError;

/// A Snowflake ID taken from the request path
#[derive(Debug, Clone, Copy)]
pub struct SnowflakePath(pub Snowflake);

#[async_trait]
impl<S> FromRequestParts<S> for SnowflakePath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.to_string()))?;

        raw.parse::<i64>()
            .map(Snowflake::new)
            .map(SnowflakePath)
            .map_err(|_| ApiError::invalid_path(format!("Invalid id: {raw}")))
    }
}
