//! Job entity - a posting owned by a recruiter

use chrono::{DateTime, Utc};

use crate::value_objects::{JobType, Snowflake};

/// Experience level applied when a posting omits one
pub const DEFAULT_EXPERIENCE_LEVEL: &str = "0-1 years";

/// A job posting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub id: Snowflake,
    pub title: String,
    pub description: String,
    pub company: String,
    pub location: String,
    pub job_type: JobType,
    /// Free text, may be a range like "10k-20k"
    pub salary: Option<String>,
    pub requirements: Vec<String>,
    /// Free text, e.g. "0-2 years"
    pub experience_level: String,
    pub skills: Vec<String>,
    /// Weak reference to the owning recruiter's user id
    pub recruiter_id: Snowflake,
    pub is_open: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Job {
    /// Whether the given user may modify or delete this posting
    pub fn is_managed_by(&self, user_id: Snowflake, is_admin: bool) -> bool {
        is_admin || self.recruiter_id == user_id
    }
}

/// Recruiter identity attached to a posting at read time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecruiterInfo {
    pub id: Snowflake,
    pub name: String,
    pub email: String,
}

/// A job with its recruiter reference resolved
#[derive(Debug, Clone)]
pub struct JobWithRecruiter {
    pub job: Job,
    /// None when the recruiter account no longer exists
    pub recruiter: Option<RecruiterInfo>,
}

/// Listing filters; every field is optional and filters combine with AND
#[derive(Debug, Clone, Default)]
pub struct JobFilter {
    /// Case-insensitive substring over title, company, description, and skills
    pub keyword: Option<String>,
    /// Case-insensitive substring on location
    pub location: Option<String>,
    /// Exact employment type
    pub job_type: Option<JobType>,
    /// Case-insensitive substring on experience level
    pub experience: Option<String>,
}

impl JobFilter {
    pub fn is_empty(&self) -> bool {
        self.keyword.is_none()
            && self.location.is_none()
            && self.job_type.is_none()
            && self.experience.is_none()
    }
}
