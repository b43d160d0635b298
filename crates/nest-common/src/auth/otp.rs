//! One-time passcode generation and hashing for password resets
//!
//! OTPs are 6-digit numeric codes drawn uniformly from a cryptographically
//! secure source (leading zeros allowed). Only a SHA-256 digest of the code
//! is ever persisted; the plaintext goes out by email and is then forgotten.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::OsRng;
use rand::Rng;
use sha2::{Digest, Sha256};

/// How long an issued OTP stays valid
#[must_use]
pub fn otp_validity() -> Duration {
    Duration::minutes(10)
}

/// Generate a uniformly random 6-digit OTP, zero-padded
#[must_use]
pub fn generate_otp() -> String {
    let code: u32 = OsRng.gen_range(0..1_000_000);
    format!("{code:06}")
}

/// SHA-256 hex digest of an OTP, the only form stored at rest
#[must_use]
pub fn hash_otp(otp: &str) -> String {
    let digest = Sha256::digest(otp.as_bytes());
    format!("{digest:x}")
}

/// Expiry timestamp for an OTP issued now
#[must_use]
pub fn otp_expiry() -> DateTime<Utc> {
    Utc::now() + otp_validity()
}

/// Check a supplied OTP against a stored hash and expiry
#[must_use]
pub fn otp_matches(
    supplied: &str,
    stored_hash: Option<&str>,
    expires_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> bool {
    let Some(stored) = stored_hash else {
        return false;
    };
    let Some(expiry) = expires_at else {
        return false;
    };
    expiry > now && hash_otp(supplied) == stored
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_otp_is_six_digits() {
        for _ in 0..100 {
            let otp = generate_otp();
            assert_eq!(otp.len(), 6);
            assert!(otp.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_hash_is_deterministic() {
        assert_eq!(hash_otp("123456"), hash_otp("123456"));
        assert_ne!(hash_otp("123456"), hash_otp("123457"));
    }

    #[test]
    fn test_hash_matches_known_digest() {
        // sha256("123456")
        assert_eq!(
            hash_otp("123456"),
            "8d969eef6ecad3c29a3a629280e686cf0c3f5d5a86aff3ca12020c923adc6c92"
        );
    }

    #[test]
    fn test_otp_matches_within_window() {
        let now = Utc::now();
        let hash = hash_otp("042137");
        assert!(otp_matches(
            "042137",
            Some(&hash),
            Some(now + Duration::minutes(5)),
            now
        ));
    }

    #[test]
    fn test_otp_rejected_after_expiry() {
        let now = Utc::now();
        let hash = hash_otp("042137");
        assert!(!otp_matches(
            "042137",
            Some(&hash),
            Some(now - Duration::seconds(1)),
            now
        ));
    }

    #[test]
    fn test_otp_rejected_on_wrong_code() {
        let now = Utc::now();
        let hash = hash_otp("042137");
        assert!(!otp_matches(
            "999999",
            Some(&hash),
            Some(now + Duration::minutes(5)),
            now
        ));
    }

    #[test]
    fn test_otp_rejected_when_unset() {
        let now = Utc::now();
        assert!(!otp_matches("123456", None, None, now));
    }
}
