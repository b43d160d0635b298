//! # nest-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    ApplicationService, AuthService, ExternalJobService, JobService, ProfileService,
    ServiceContext, ServiceError, ServiceResult,
};
