//! # nest-core
//!
//! Domain layer containing entities, value objects, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    ApplicantInfo, Application, ApplicationWithApplicant, ApplicationWithJob, Certification,
    Contact, Education, Experience, Job, JobFilter, JobSummary, JobWithRecruiter, Profile,
    ProfilePatch, RecruiterInfo, Skill, Socials, User, DEFAULT_EXPERIENCE_LEVEL,
};
pub use error::DomainError;
pub use traits::{
    ApplicationRepository, JobRepository, ProfileRepository, RepoResult, UserRepository,
};
pub use value_objects::{
    ApplicationStatus, JobType, SkillLevel, Snowflake, SnowflakeGenerator, SnowflakeParseError,
    UserRole,
};
