//! Value objects shared across the domain

mod roles;
mod snowflake;

pub use roles::{ApplicationStatus, JobType, SkillLevel, UnknownVariant, UserRole};
pub use snowflake::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
