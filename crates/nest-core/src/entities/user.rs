//! User entity - an account that can log in

use chrono::{DateTime, Utc};

use crate::value_objects::{Snowflake, UserRole};

/// A registered account
///
/// The password hash lives only in the storage layer; this entity carries the
/// public identity plus the transient password-reset state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    /// SHA-256 hex digest of the active reset OTP, if one was issued
    pub reset_otp_hash: Option<String>,
    /// When the active reset OTP stops being accepted
    pub reset_otp_expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with no reset state
    pub fn new(id: Snowflake, name: String, email: String, role: UserRole) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            email,
            role,
            reset_otp_hash: None,
            reset_otp_expires_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether a reset OTP is present and still inside its window
    pub fn otp_valid_at(&self, now: DateTime<Utc>) -> bool {
        self.reset_otp_hash.is_some()
            && self.reset_otp_expires_at.is_some_and(|exp| exp > now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn test_user() -> User {
        User::new(
            Snowflake::new(1),
            "Ada".to_string(),
            "ada@example.com".to_string(),
            UserRole::Student,
        )
    }

    #[test]
    fn test_new_user_has_no_otp() {
        let user = test_user();
        assert!(user.reset_otp_hash.is_none());
        assert!(!user.otp_valid_at(Utc::now()));
    }

    #[test]
    fn test_otp_validity_window() {
        let mut user = test_user();
        let now = Utc::now();
        user.reset_otp_hash = Some("abc".to_string());
        user.reset_otp_expires_at = Some(now + Duration::minutes(10));

        assert!(user.otp_valid_at(now));
        assert!(user.otp_valid_at(now + Duration::minutes(9)));
        assert!(!user.otp_valid_at(now + Duration::minutes(10) + Duration::seconds(1)));
    }
}
