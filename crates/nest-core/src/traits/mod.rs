//! Repository traits

mod repositories;

pub use repositories::{
    ApplicationRepository, JobRepository, ProfileRepository, RepoResult, UserRepository,
};
