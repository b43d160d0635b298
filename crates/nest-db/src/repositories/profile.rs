//! PostgreSQL implementation of ProfileRepository

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::instrument;

use nest_core::entities::Profile;
use nest_core::error::DomainError;
use nest_core::traits::{ProfileRepository, RepoResult};
use nest_core::value_objects::Snowflake;

use crate::models::ProfileModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of ProfileRepository
#[derive(Clone)]
pub struct PgProfileRepository {
    pool: PgPool,
}

impl PgProfileRepository {
    /// Create a new PgProfileRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for PgProfileRepository {
    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Option<Profile>> {
        let result = sqlx::query_as::<_, ProfileModel>(
            r"
            SELECT id, user_id, bio, skills, contact, education, experience,
                   certifications, resume, socials, created_at, updated_at
            FROM profiles
            WHERE user_id = $1
            ",
        )
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Profile::from))
    }

    #[instrument(skip(self, profile))]
    async fn create(&self, profile: &Profile) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO profiles (id, user_id, bio, skills, contact, education, experience,
                                  certifications, resume, socials, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            ",
        )
        .bind(profile.id.into_inner())
        .bind(profile.user_id.into_inner())
        .bind(&profile.bio)
        .bind(Json(&profile.skills))
        .bind(Json(&profile.contact))
        .bind(Json(&profile.education))
        .bind(Json(&profile.experience))
        .bind(Json(&profile.certifications))
        .bind(&profile.resume)
        .bind(Json(&profile.socials))
        .bind(profile.created_at)
        .bind(profile.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::ProfileAlreadyExists))?;

        Ok(())
    }

    #[instrument(skip(self, profile))]
    async fn update(&self, profile: &Profile) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE profiles
            SET bio = $2, skills = $3, contact = $4, education = $5, experience = $6,
                certifications = $7, resume = $8, socials = $9, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(profile.id.into_inner())
        .bind(&profile.bio)
        .bind(Json(&profile.skills))
        .bind(Json(&profile.contact))
        .bind(Json(&profile.education))
        .bind(Json(&profile.experience))
        .bind(Json(&profile.certifications))
        .bind(&profile.resume)
        .bind(Json(&profile.socials))
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ProfileNotFound);
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
        assert_send_sync::<PgProfileRepository>();
    }
}
