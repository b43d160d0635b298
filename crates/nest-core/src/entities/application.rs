//! Application entity - join record between a job and a student

use chrono::{DateTime, Utc};

use crate::value_objects::{ApplicationStatus, JobType, Snowflake};

/// A student's application to a job
///
/// At most one exists per (job, applicant) pair; the storage layer enforces
/// this with a unique constraint so concurrent applies cannot slip through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Application {
    pub id: Snowflake,
    pub job_id: Snowflake,
    pub applicant_id: Snowflake,
    pub status: ApplicationStatus,
    /// Optional path to the resume snapshot submitted with this application
    pub resume: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Application {
    pub fn new(id: Snowflake, job_id: Snowflake, applicant_id: Snowflake) -> Self {
        let now = Utc::now();
        Self {
            id,
            job_id,
            applicant_id,
            status: ApplicationStatus::Applied,
            resume: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Minimal job fields shown in a student's application list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSummary {
    pub id: Snowflake,
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: JobType,
}

/// An application with its job reference resolved
///
/// `job` is None when the posting was deleted after the student applied.
#[derive(Debug, Clone)]
pub struct ApplicationWithJob {
    pub application: Application,
    pub job: Option<JobSummary>,
}

/// Applicant identity attached when a recruiter lists applications
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicantInfo {
    pub id: Snowflake,
    pub name: String,
    pub email: String,
}

/// An application with its applicant reference resolved
#[derive(Debug, Clone)]
pub struct ApplicationWithApplicant {
    pub application: Application,
    pub applicant: Option<ApplicantInfo>,
}
