//! Application database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for applications table
#[derive(Debug, Clone, FromRow)]
pub struct ApplicationModel {
    pub id: i64,
    pub job_id: i64,
    pub applicant_id: i64,
    pub status: String,
    pub resume: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An application row joined with its job, which may have been deleted
#[derive(Debug, Clone, FromRow)]
pub struct ApplicationWithJobModel {
    pub id: i64,
    pub job_id: i64,
    pub applicant_id: i64,
    pub status: String,
    pub resume: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub j_id: Option<i64>,
    pub j_title: Option<String>,
    pub j_company: Option<String>,
    pub j_location: Option<String>,
    pub j_job_type: Option<String>,
}

/// An application row joined with its applicant
#[derive(Debug, Clone, FromRow)]
pub struct ApplicationWithApplicantModel {
    pub id: i64,
    pub job_id: i64,
    pub applicant_id: i64,
    pub status: String,
    pub resume: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub a_id: Option<i64>,
    pub a_name: Option<String>,
    pub a_email: Option<String>,
}
