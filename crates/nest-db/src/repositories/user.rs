//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use nest_core::entities::User;
use nest_core::error::DomainError;
use nest_core::traits::{RepoResult, UserRepository};
use nest_core::value_objects::Snowflake;

use crate::models::UserModel;

use super::error::{map_db_error, map_unique_violation, user_not_found};

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, name, email, password_hash, role,
                   reset_otp_hash, reset_otp_expires_at, created_at, updated_at
            FROM users
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, name, email, password_hash, role,
                   reset_otp_hash, reset_otp_expires_at, created_at, updated_at
            FROM users
            WHERE email = $1
            ",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)
            ",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self, password_hash))]
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO users (id, name, email, password_hash, role, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(user.id.into_inner())
        .bind(&user.name)
        .bind(&user.email)
        .bind(password_hash)
        .bind(user.role.as_str())
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::EmailAlreadyExists))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>> {
        let result = sqlx::query_scalar::<_, String>(
            r"
            SELECT password_hash FROM users WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self, password_hash))]
    async fn update_password(&self, id: Snowflake, password_hash: &str) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET password_hash = $2, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .bind(password_hash)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self, otp_hash))]
    async fn set_reset_otp(
        &self,
        id: Snowflake,
        otp_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET reset_otp_hash = $2, reset_otp_expires_at = $3, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .bind(otp_hash)
        .bind(expires_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn clear_reset_otp(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET reset_otp_hash = NULL, reset_otp_expires_at = NULL, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgUserRepository>();
    }
}
