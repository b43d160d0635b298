//! User entity <-> model mapper

use nest_core::entities::User;
use nest_core::value_objects::{Snowflake, UserRole};

use crate::models::UserModel;

/// Convert UserModel to User entity
///
/// The role column carries a CHECK constraint, so an unparseable value can
/// only come from manual data edits; it falls back to the default role.
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: Snowflake::new(model.id),
            name: model.name,
            email: model.email,
            role: model.role.parse::<UserRole>().unwrap_or_default(),
            reset_otp_hash: model.reset_otp_hash,
            reset_otp_expires_at: model.reset_otp_expires_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
