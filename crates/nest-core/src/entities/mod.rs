//! Domain entities

mod application;
mod job;
mod profile;
mod user;

pub use application::{
    ApplicantInfo, Application, ApplicationWithApplicant, ApplicationWithJob, JobSummary,
};
pub use job::{Job, JobFilter, JobWithRecruiter, RecruiterInfo, DEFAULT_EXPERIENCE_LEVEL};
pub use profile::{
    Certification, Contact, Education, Experience, Profile, ProfilePatch, Skill, Socials,
};
pub use user::User;
