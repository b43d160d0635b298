//! Test fixtures mirroring the API's request and response shapes
//!
//! These are deliberately independent of the server crates so the tests
//! exercise the wire contract, not the internal types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Auth
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl RegisterRequest {
    /// A unique student account
    pub fn student() -> Self {
        let tag = Uuid::new_v4().simple().to_string();
        Self {
            name: format!("Student {}", &tag[..8]),
            email: format!("student-{tag}@example.com"),
            password: "secret123".to_string(),
            role: None,
        }
    }

    /// A unique recruiter account
    pub fn recruiter() -> Self {
        let tag = Uuid::new_v4().simple().to_string();
        Self {
            name: format!("Recruiter {}", &tag[..8]),
            email: format!("recruiter-{tag}@example.com"),
            password: "secret123".to_string(),
            role: Some("recruiter".to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(request: &RegisterRequest) -> Self {
        Self {
            email: request.email.clone(),
            password: request.password.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserResponse,
}

#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
}

// ============================================================================
// Jobs
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct CreateJobRequest {
    pub title: String,
    pub description: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    pub requirements: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<String>,
    pub skills: Vec<String>,
}

impl CreateJobRequest {
    /// A unique posting with a recognizable skill
    pub fn unique() -> Self {
        let tag = Uuid::new_v4().simple().to_string();
        Self {
            title: format!("Backend Engineer {}", &tag[..8]),
            description: "Build and operate REST services.".to_string(),
            company: format!("Acme {}", &tag[..8]),
            location: "Seoul".to_string(),
            job_type: "Full-time".to_string(),
            salary: Some("$100k".to_string()),
            requirements: vec!["3+ years experience".to_string()],
            experience_level: Some("2-4 years".to_string()),
            skills: vec!["Rust".to_string(), "PostgreSQL".to_string()],
        }
    }

    /// A posting whose only skill is the given one
    pub fn with_skill(skill: &str) -> Self {
        let mut request = Self::unique();
        request.skills = vec![skill.to_string()];
        request.description = format!("Work daily with {skill}.");
        request
    }
}

#[derive(Debug, Deserialize)]
pub struct JobResponse {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub requirements: Vec<String>,
    pub experience_level: String,
    pub skills: Vec<String>,
    pub recruiter: Option<RecruiterResponse>,
    pub is_open: bool,
}

#[derive(Debug, Deserialize)]
pub struct RecruiterResponse {
    pub id: String,
    pub name: String,
    pub email: String,
}

// ============================================================================
// Applications
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ApplicationResponse {
    pub id: String,
    pub status: String,
    pub resume: Option<String>,
    pub job: Option<JobSummaryResponse>,
}

#[derive(Debug, Deserialize)]
pub struct JobSummaryResponse {
    pub id: String,
    pub title: String,
    pub company: String,
}

#[derive(Debug, Deserialize)]
pub struct ApplicantApplicationResponse {
    pub id: String,
    pub status: String,
    pub applicant: Option<ApplicantResponse>,
    pub profile: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct ApplicantResponse {
    pub id: String,
    pub name: String,
    pub email: String,
}

// ============================================================================
// Profiles
// ============================================================================

/// Minimal profile upsert body with one skill
pub fn profile_with_skill(skill: &str) -> serde_json::Value {
    serde_json::json!({
        "bio": "Final-year student looking for backend roles.",
        "skills": [{ "name": skill, "level": "Intermediate" }],
        "socials": { "github": "https://github.com/example" }
    })
}

#[derive(Debug, Deserialize)]
pub struct ProfileResponse {
    pub id: String,
    pub user_id: String,
    pub bio: Option<String>,
    pub skills: Vec<serde_json::Value>,
    pub resume: Option<String>,
}
