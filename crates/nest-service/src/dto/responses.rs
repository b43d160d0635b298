//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use serde::Serialize;

use nest_core::entities::{Certification, Contact, Education, Experience, Skill, Socials};
use nest_core::value_objects::{ApplicationStatus, JobType, UserRole};

// ============================================================================
// Common Response Types
// ============================================================================

/// Plain acknowledgement with a human-readable message
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with bearer token
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserResponse,
}

impl AuthResponse {
    pub fn new(token: String, expires_in: i64, user: UserResponse) -> Self {
        Self {
            token,
            token_type: "Bearer".to_string(),
            expires_in,
            user,
        }
    }
}

/// Public user fields
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Job Responses
// ============================================================================

/// A job posting with its recruiter resolved
#[derive(Debug, Clone, Serialize)]
pub struct JobResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    pub requirements: Vec<String>,
    pub experience_level: String,
    pub skills: Vec<String>,
    /// Absent when the recruiter account no longer exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recruiter: Option<RecruiterResponse>,
    pub is_open: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Recruiter identity shown on a posting
#[derive(Debug, Clone, Serialize)]
pub struct RecruiterResponse {
    pub id: String,
    pub name: String,
    pub email: String,
}

// ============================================================================
// Application Responses
// ============================================================================

/// An application as seen by the applying student
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationResponse {
    pub id: String,
    pub status: ApplicationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume: Option<String>,
    /// Absent when the posting was deleted after applying
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job: Option<JobSummaryResponse>,
    pub created_at: DateTime<Utc>,
}

/// Minimal job fields in an application listing
#[derive(Debug, Clone, Serialize)]
pub struct JobSummaryResponse {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
}

/// An application as seen by the job's recruiter
#[derive(Debug, Clone, Serialize)]
pub struct ApplicantApplicationResponse {
    pub id: String,
    pub status: ApplicationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applicant: Option<ApplicantResponse>,
    /// The applicant's profile subset, when one exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<ApplicantProfileResponse>,
    pub created_at: DateTime<Utc>,
}

/// Applicant identity in a recruiter's listing
#[derive(Debug, Clone, Serialize)]
pub struct ApplicantResponse {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// The slice of a profile shown to recruiters reviewing applicants
#[derive(Debug, Clone, Serialize)]
pub struct ApplicantProfileResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume: Option<String>,
    pub socials: Socials,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub skills: Vec<Skill>,
}

// ============================================================================
// Profile Responses
// ============================================================================

/// A user's full profile document
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub id: String,
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub skills: Vec<Skill>,
    pub contact: Contact,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub certifications: Vec<Certification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume: Option<String>,
    pub socials: Socials,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// URL of a stored upload
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub url: String,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness probe response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self { status: "ok" }
    }
}
