//! Axum extractors for request handling
//!
//! Custom extractors for authentication, path parsing, and validation.

mod auth;
mod path;
mod validated;

pub use auth::AuthUser;
pub use path::SnowflakePath;
pub use validated::ValidatedJson;
