//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    CertificationInput, ContactInput, CreateJobRequest, EducationInput, ExperienceInput,
    ForgotPasswordRequest, JobListQuery, LoginRequest, RegisterRequest, ResetPasswordRequest,
    SkillInput, SocialsInput, UpdateApplicationStatusRequest, UpdateJobRequest,
    UpsertProfileRequest, VerifyOtpRequest,
};

// Re-export commonly used response types
pub use responses::{
    ApplicantApplicationResponse, ApplicantProfileResponse, ApplicantResponse,
    ApplicationResponse, AuthResponse, HealthResponse, JobResponse, JobSummaryResponse,
    MessageResponse, ProfileResponse, RecruiterResponse, UploadResponse, UserResponse,
};
