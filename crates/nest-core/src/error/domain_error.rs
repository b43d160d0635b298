//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Snowflake),

    #[error("User not found")]
    UserEmailNotFound,

    #[error("Job not found: {0}")]
    JobNotFound(Snowflake),

    #[error("There is no profile for this user")]
    ProfileNotFound,

    #[error("Application not found: {0}")]
    ApplicationNotFound(Snowflake),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid or expired OTP")]
    InvalidOrExpiredOtp,

    #[error("Only students can apply")]
    OnlyStudentsMayApply,

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not authorized to manage this job")]
    NotJobOwner,

    #[error("Not authorized to manage this application")]
    NotApplicationOwner,

    #[error("Role not permitted for this action")]
    RoleNotPermitted,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("User already exists")]
    EmailAlreadyExists,

    #[error("Already applied to this job")]
    AlreadyApplied,

    #[error("Profile already exists for this user")]
    ProfileAlreadyExists,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) | Self::UserEmailNotFound => "UNKNOWN_USER",
            Self::JobNotFound(_) => "UNKNOWN_JOB",
            Self::ProfileNotFound => "UNKNOWN_PROFILE",
            Self::ApplicationNotFound(_) => "UNKNOWN_APPLICATION",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidOrExpiredOtp => "INVALID_OR_EXPIRED_OTP",
            Self::OnlyStudentsMayApply => "INVALID_ROLE",

            // Authorization
            Self::NotJobOwner => "NOT_JOB_OWNER",
            Self::NotApplicationOwner => "NOT_APPLICATION_OWNER",
            Self::RoleNotPermitted => "ROLE_NOT_PERMITTED",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::AlreadyApplied => "ALREADY_APPLIED",
            Self::ProfileAlreadyExists => "PROFILE_ALREADY_EXISTS",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::UserEmailNotFound
                | Self::JobNotFound(_)
                | Self::ProfileNotFound
                | Self::ApplicationNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::InvalidOrExpiredOtp | Self::OnlyStudentsMayApply
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::NotJobOwner | Self::NotApplicationOwner | Self::RoleNotPermitted
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::EmailAlreadyExists | Self::AlreadyApplied | Self::ProfileAlreadyExists
        )
    }
}
