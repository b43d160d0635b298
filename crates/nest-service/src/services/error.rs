//! Service layer error types
//!
//! Provides a unified error type for all service operations.

use nest_common::AppError;
use nest_core::DomainError;
use std::fmt;

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// Domain rule violation
    Domain(DomainError),

    /// Application error (auth, email, config)
    App(AppError),

    /// Missing or wrong credentials
    InvalidCredentials,

    /// Resource not found
    NotFound { resource: &'static str, id: String },

    /// Validation error
    Validation(String),

    /// Bad multipart or file input
    BadRequest(String),

    /// Internal error
    Internal(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(e) => write!(f, "{e}"),
            Self::App(e) => write!(f, "{e}"),
            Self::InvalidCredentials => write!(f, "Invalid email or password"),
            Self::NotFound { resource, id } => write!(f, "{resource} not found: {id}"),
            Self::Validation(msg) => write!(f, "Validation error: {msg}"),
            Self::BadRequest(msg) => write!(f, "{msg}"),
            Self::Internal(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Domain(e) => Some(e),
            Self::App(e) => Some(e),
            _ => None,
        }
    }
}

impl ServiceError {
    /// Create a not found error
    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource,
            id: id.into(),
        }
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a bad request error
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) => {
                if e.is_not_found() {
                    404
                } else if e.is_authorization() {
                    403
                } else if e.is_validation() {
                    400
                } else if e.is_conflict() {
                    409
                } else {
                    500
                }
            }
            Self::App(e) => e.status_code(),
            Self::InvalidCredentials => 401,
            Self::NotFound { .. } => 404,
            Self::Validation(_) | Self::BadRequest(_) => 400,
            Self::Internal(_) => 500,
        }
    }

    /// Get the error code for API responses
    pub fn error_code(&self) -> &str {
        match self {
            Self::Domain(e) => e.code(),
            Self::App(e) => e.error_code(),
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<AppError> for ServiceError {
    fn from(err: AppError) -> Self {
        Self::App(err)
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;
    use nest_core::Snowflake;

    #[test]
    fn test_not_found_error() {
        let err = ServiceError::not_found("User", "123");
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.error_code(), "NOT_FOUND");
        assert!(err.to_string().contains("User not found: 123"));
    }

    #[test]
    fn test_invalid_credentials() {
        let err = ServiceError::InvalidCredentials;
        assert_eq!(err.status_code(), 401);
        assert_eq!(err.error_code(), "INVALID_CREDENTIALS");
    }

    #[test]
    fn test_domain_conflict_maps_to_409() {
        let err = ServiceError::from(DomainError::AlreadyApplied);
        assert_eq!(err.status_code(), 409);
        assert_eq!(err.error_code(), "ALREADY_APPLIED");
    }

    #[test]
    fn test_domain_not_found_maps_to_404() {
        let err = ServiceError::from(DomainError::JobNotFound(Snowflake::new(1)));
        assert_eq!(err.status_code(), 404);
    }

    #[test]
    fn test_domain_authorization_maps_to_403() {
        let err = ServiceError::from(DomainError::NotJobOwner);
        assert_eq!(err.status_code(), 403);
    }

    #[test]
    fn test_email_delivery_maps_to_500() {
        let err = ServiceError::from(AppError::EmailDelivery("relay down".to_string()));
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.error_code(), "EMAIL_DELIVERY_FAILED");
    }
}
