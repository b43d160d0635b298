//! Shared infrastructure for the CareerNest backend
//!
//! Authentication primitives, configuration loading, email delivery,
//! error types, and tracing setup used by every other crate.

pub mod auth;
pub mod config;
pub mod error;
pub mod mail;
pub mod telemetry;

pub use auth::{Claims, IssuedToken, JwtService};
pub use config::AppConfig;
pub use error::AppError;
pub use mail::{Mailer, OutgoingEmail};
