//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

use chrono::NaiveDate;
use nest_core::value_objects::{JobType, SkillLevel};

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 2, max = 100, message = "Name must be 2-100 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 6, max = 72, message = "Password must be 6-72 characters"))]
    pub password: String,

    /// Optional role; unknown or missing values default to student
    pub role: Option<String>,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub password: String,
}

/// Forgot password request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ForgotPasswordRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

/// OTP verification request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct VerifyOtpRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(equal = 6, message = "OTP must be 6 digits"))]
    pub otp: String,
}

/// Password reset request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ResetPasswordRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(equal = 6, message = "OTP must be 6 digits"))]
    pub otp: String,

    #[validate(length(min = 6, max = 72, message = "Password must be 6-72 characters"))]
    pub new_password: String,
}

// ============================================================================
// Job Requests
// ============================================================================

/// Create job request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateJobRequest {
    #[validate(length(min = 1, max = 200, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    #[validate(length(min = 1, max = 200, message = "Company is required"))]
    pub company: String,

    #[validate(length(min = 1, max = 200, message = "Location is required"))]
    pub location: String,

    #[serde(rename = "type", default)]
    pub job_type: JobType,

    pub salary: Option<String>,

    #[serde(default)]
    pub requirements: Vec<String>,

    /// Defaults to "0-1 years" when omitted
    pub experience_level: Option<String>,

    #[serde(default)]
    pub skills: Vec<String>,
}

/// Update job request; absent fields are left unchanged
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateJobRequest {
    #[validate(length(min = 1, max = 200, message = "Title must not be blank"))]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "Description must not be blank"))]
    pub description: Option<String>,

    #[validate(length(min = 1, max = 200, message = "Company must not be blank"))]
    pub company: Option<String>,

    #[validate(length(min = 1, max = 200, message = "Location must not be blank"))]
    pub location: Option<String>,

    #[serde(rename = "type")]
    pub job_type: Option<JobType>,

    pub salary: Option<String>,
    pub requirements: Option<Vec<String>>,
    pub experience_level: Option<String>,
    pub skills: Option<Vec<String>>,
    pub is_open: Option<bool>,
}

/// Query parameters for the job listing
#[derive(Debug, Clone, Deserialize, Default)]
pub struct JobListQuery {
    pub keyword: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub job_type: Option<JobType>,
    pub experience: Option<String>,
}

// ============================================================================
// Application Requests
// ============================================================================

/// Application status change request
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateApplicationStatusRequest {
    pub status: nest_core::value_objects::ApplicationStatus,
}

// ============================================================================
// Profile Requests
// ============================================================================

/// Profile upsert request; absent fields are left unchanged on an existing
/// profile, present fields overwrite their stored counterpart wholesale
#[derive(Debug, Clone, Deserialize, Default)]
pub struct UpsertProfileRequest {
    pub bio: Option<String>,
    pub skills: Option<Vec<SkillInput>>,
    pub contact: Option<ContactInput>,
    pub education: Option<Vec<EducationInput>>,
    pub experience: Option<Vec<ExperienceInput>>,
    pub certifications: Option<Vec<CertificationInput>>,
    pub resume: Option<String>,
    pub socials: Option<SocialsInput>,
}

/// Skill entry in a profile upsert
#[derive(Debug, Clone, Deserialize)]
pub struct SkillInput {
    pub name: String,
    #[serde(default)]
    pub level: SkillLevel,
    pub description: Option<String>,
}

/// Contact block in a profile upsert
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ContactInput {
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub zip: Option<String>,
}

/// Education entry; empty-string dates normalize to null
#[derive(Debug, Clone, Deserialize)]
pub struct EducationInput {
    pub school: String,
    pub degree: String,
    pub field_of_study: Option<String>,
    #[serde(default, deserialize_with = "flexible_date")]
    pub from: Option<NaiveDate>,
    #[serde(default, deserialize_with = "flexible_date")]
    pub to: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    pub description: Option<String>,
}

/// Work experience entry; empty-string dates normalize to null
#[derive(Debug, Clone, Deserialize)]
pub struct ExperienceInput {
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    #[serde(default, deserialize_with = "flexible_date")]
    pub from: Option<NaiveDate>,
    #[serde(default, deserialize_with = "flexible_date")]
    pub to: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    pub description: Option<String>,
}

/// Certification entry; empty-string dates normalize to null
#[derive(Debug, Clone, Deserialize)]
pub struct CertificationInput {
    pub name: String,
    pub issuer: String,
    #[serde(default, deserialize_with = "flexible_date")]
    pub date: Option<NaiveDate>,
    pub url: Option<String>,
    pub description: Option<String>,
}

/// Social links block in a profile upsert
#[derive(Debug, Clone, Deserialize, Default)]
pub struct SocialsInput {
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub website: Option<String>,
    pub twitter: Option<String>,
}

/// Deserialize an optional date, treating the empty string as absent
///
/// Accepts `null`, `""`, plain dates (`2024-06-01`), and RFC 3339 timestamps
/// (the date part is kept).
fn flexible_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw: Option<String> = Option::deserialize(deserializer)?;
    let Some(s) = raw else {
        return Ok(None);
    };
    let s = s.trim();
    if s.is_empty() {
        return Ok(None);
    }
    if let Ok(date) = s.parse::<NaiveDate>() {
        return Ok(Some(date));
    }
    chrono::DateTime::parse_from_rfc3339(s)
        .map(|dt| Some(dt.date_naive()))
        .map_err(|_| D::Error::custom(format!("invalid date: {s}")))
}
