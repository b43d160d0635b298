//! PostgreSQL repository implementations

mod application;
mod error;
mod job;
mod profile;
mod user;

pub use application::PgApplicationRepository;
pub use job::PgJobRepository;
pub use profile::PgProfileRepository;
pub use user::PgUserRepository;
