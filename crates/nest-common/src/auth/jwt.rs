//! JWT utilities for authentication
//!
//! Provides token encoding, decoding, and validation using the `jsonwebtoken` crate.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use nest_core::Snowflake;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// JWT claims structure
///
/// The token is a stateless bearer credential: it carries only the user id,
/// so a request can be authenticated without a server-side session store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Get the user ID as a Snowflake
    ///
    /// # Errors
    /// Returns an error if the subject cannot be parsed as a Snowflake
    pub fn user_id(&self) -> Result<Snowflake, AppError> {
        self.sub
            .parse::<i64>()
            .map(Snowflake::new)
            .map_err(|_| AppError::InvalidToken)
    }

    /// Check if the token is expired
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

/// Bearer token returned from the auth endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuedToken {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// JWT service for encoding and decoding tokens
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_expiry: i64,
}

impl JwtService {
    /// Create a new JWT service with the given secret and expiry in seconds
    #[must_use]
    pub fn new(secret: &str, token_expiry: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            token_expiry,
        }
    }

    /// Issue a bearer token for a user
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn issue(&self, user_id: Snowflake) -> Result<IssuedToken, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.token_expiry)).timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("Failed to encode JWT")))?;

        Ok(IssuedToken {
            token,
            token_type: "Bearer".to_string(),
            expires_in: self.token_expiry,
        })
    }

    /// Decode and validate a bearer token
    ///
    /// # Errors
    /// Returns an error if the token is invalid or expired
    pub fn decode_token(&self, token: &str) -> Result<Claims, AppError> {
        let validation = Validation::default();

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::InvalidToken,
            }
        })?;

        Ok(token_data.claims)
    }
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("token_expiry", &self.token_expiry)
            .finish_non_exhaustive()
    }
}
