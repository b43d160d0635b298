//! Authentication utilities

mod jwt;
mod otp;
mod password;

pub use jwt::{Claims, IssuedToken, JwtService};
pub use otp::{generate_otp, hash_otp, otp_expiry, otp_matches, otp_validity};
pub use password::{hash_password, verify_password};
