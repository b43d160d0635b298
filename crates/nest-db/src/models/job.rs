//! Job database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for jobs table
#[derive(Debug, Clone, FromRow)]
pub struct JobModel {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub company: String,
    pub location: String,
    pub job_type: String,
    pub salary: Option<String>,
    pub requirements: Vec<String>,
    pub experience_level: String,
    pub skills: Vec<String>,
    pub recruiter_id: i64,
    pub is_open: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A job row joined with its recruiter, who may no longer exist
#[derive(Debug, Clone, FromRow)]
pub struct JobWithRecruiterModel {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub company: String,
    pub location: String,
    pub job_type: String,
    pub salary: Option<String>,
    pub requirements: Vec<String>,
    pub experience_level: String,
    pub skills: Vec<String>,
    pub recruiter_id: i64,
    pub is_open: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub r_id: Option<i64>,
    pub r_name: Option<String>,
    pub r_email: Option<String>,
}
