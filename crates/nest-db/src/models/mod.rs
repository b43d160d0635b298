//! Database models with SQLx FromRow derives

mod application;
mod job;
mod profile;
mod user;

pub use application::{ApplicationModel, ApplicationWithApplicantModel, ApplicationWithJobModel};
pub use job::{JobModel, JobWithRecruiterModel};
pub use profile::ProfileModel;
pub use user::UserModel;
