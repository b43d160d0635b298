//! Request handlers organized by domain

pub mod applications;
pub mod auth;
pub mod health;
pub mod jobs;
pub mod profile;
