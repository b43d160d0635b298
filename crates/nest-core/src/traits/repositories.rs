//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{
    Application, ApplicationWithApplicant, ApplicationWithJob, Job, JobFilter, JobWithRecruiter,
    Profile, User,
};
use crate::error::DomainError;
use crate::value_objects::{ApplicationStatus, Snowflake};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new user
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>>;

    /// Update password hash
    async fn update_password(&self, id: Snowflake, password_hash: &str) -> RepoResult<()>;

    /// Store a hashed reset OTP and its expiry on the user record
    async fn set_reset_otp(
        &self,
        id: Snowflake,
        otp_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> RepoResult<()>;

    /// Clear any stored reset OTP state
    async fn clear_reset_otp(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Job Repository
// ============================================================================

#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Find job by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Job>>;

    /// Find job by ID with its recruiter resolved
    async fn find_with_recruiter(&self, id: Snowflake) -> RepoResult<Option<JobWithRecruiter>>;

    /// List open jobs matching the filter, newest first, recruiters resolved
    async fn list(&self, filter: &JobFilter) -> RepoResult<Vec<JobWithRecruiter>>;

    /// The most recently created open jobs, newest first
    async fn list_recent(&self, limit: i64) -> RepoResult<Vec<JobWithRecruiter>>;

    /// Open jobs where any skill name matches the posting's skills,
    /// description, or requirements (exact containment or case-insensitive
    /// pattern). Order is unspecified.
    async fn list_matching_skills(
        &self,
        skill_names: &[String],
        limit: i64,
    ) -> RepoResult<Vec<JobWithRecruiter>>;

    /// Create a new job posting
    async fn create(&self, job: &Job) -> RepoResult<()>;

    /// Overwrite an existing job posting
    async fn update(&self, job: &Job) -> RepoResult<()>;

    /// Hard-delete a job posting (existing applications are left in place)
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Profile Repository
// ============================================================================

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Find the profile belonging to a user
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Option<Profile>>;

    /// Create a new profile
    async fn create(&self, profile: &Profile) -> RepoResult<()>;

    /// Overwrite an existing profile document
    async fn update(&self, profile: &Profile) -> RepoResult<()>;
}

// ============================================================================
// Application Repository
// ============================================================================

#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    /// Find application by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Application>>;

    /// Fast-path duplicate check for a friendlier error message; the unique
    /// constraint enforced by `create` is the actual invariant
    async fn exists(&self, job_id: Snowflake, applicant_id: Snowflake) -> RepoResult<bool>;

    /// Insert an application; a unique violation on (job, applicant) maps to
    /// `DomainError::AlreadyApplied`
    async fn create(&self, application: &Application) -> RepoResult<()>;

    /// A student's applications, newest first, job summaries resolved
    async fn list_by_applicant(
        &self,
        applicant_id: Snowflake,
    ) -> RepoResult<Vec<ApplicationWithJob>>;

    /// Applications for a job, newest first, applicants resolved
    async fn list_by_job(&self, job_id: Snowflake) -> RepoResult<Vec<ApplicationWithApplicant>>;

    /// Overwrite the status of an application
    async fn update_status(&self, id: Snowflake, status: ApplicationStatus) -> RepoResult<()>;
}
