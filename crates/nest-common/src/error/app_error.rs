//! Infrastructure-level application errors
//!
//! Errors that originate outside the domain layer: auth token handling,
//! configuration, email delivery, and unexpected internal failures.

use thiserror::Error;

/// Application-level errors
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid authentication token")]
    InvalidToken,

    #[error("Authentication token has expired")]
    TokenExpired,

    #[error("Missing authentication credentials")]
    MissingAuth,

    #[error("Email could not be sent: {0}")]
    EmailDelivery(String),

    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Stable machine-readable error code
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidToken => "INVALID_TOKEN",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::MissingAuth => "MISSING_AUTH",
            Self::EmailDelivery(_) => "EMAIL_DELIVERY_FAILED",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// HTTP status code this error maps to
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidToken | Self::TokenExpired | Self::MissingAuth => 401,
            Self::EmailDelivery(_) | Self::Config(_) | Self::Internal(_) => 500,
        }
    }
}
