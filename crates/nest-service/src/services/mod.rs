//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod application;
pub mod auth;
pub mod context;
pub mod error;
pub mod external_jobs;
pub mod job;
pub mod profile;

// Re-export all services for convenience
pub use application::ApplicationService;
pub use auth::AuthService;
pub use context::ServiceContext;
pub use error::{ServiceError, ServiceResult};
pub use external_jobs::{ExternalJob, ExternalJobService};
pub use job::JobService;
pub use profile::ProfileService;
