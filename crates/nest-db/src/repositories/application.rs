//! PostgreSQL implementation of ApplicationRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use nest_core::entities::{Application, ApplicationWithApplicant, ApplicationWithJob};
use nest_core::error::DomainError;
use nest_core::traits::{ApplicationRepository, RepoResult};
use nest_core::value_objects::{ApplicationStatus, Snowflake};

use crate::models::{ApplicationModel, ApplicationWithApplicantModel, ApplicationWithJobModel};

use super::error::{application_not_found, map_db_error, map_unique_violation};

/// PostgreSQL implementation of ApplicationRepository
#[derive(Clone)]
pub struct PgApplicationRepository {
    pool: PgPool,
}

impl PgApplicationRepository {
    /// Create a new PgApplicationRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ApplicationRepository for PgApplicationRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Application>> {
        let result = sqlx::query_as::<_, ApplicationModel>(
            r"
            SELECT id, job_id, applicant_id, status, resume, created_at, updated_at
            FROM applications
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Application::from))
    }

    #[instrument(skip(self))]
    async fn exists(&self, job_id: Snowflake, applicant_id: Snowflake) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM applications WHERE job_id = $1 AND applicant_id = $2)
            ",
        )
        .bind(job_id.into_inner())
        .bind(applicant_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn create(&self, application: &Application) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO applications (id, job_id, applicant_id, status, resume,
                                      created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(application.id.into_inner())
        .bind(application.job_id.into_inner())
        .bind(application.applicant_id.into_inner())
        .bind(application.status.as_str())
        .bind(&application.resume)
        .bind(application.created_at)
        .bind(application.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::AlreadyApplied))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_by_applicant(
        &self,
        applicant_id: Snowflake,
    ) -> RepoResult<Vec<ApplicationWithJob>> {
        // LEFT JOIN keeps applications whose job was deleted.
        let rows = sqlx::query_as::<_, ApplicationWithJobModel>(
            r"
            SELECT a.id, a.job_id, a.applicant_id, a.status, a.resume,
                   a.created_at, a.updated_at,
                   j.id AS j_id, j.title AS j_title, j.company AS j_company,
                   j.location AS j_location, j.job_type AS j_job_type
            FROM applications a
            LEFT JOIN jobs j ON j.id = a.job_id
            WHERE a.applicant_id = $1
            ORDER BY a.created_at DESC
            ",
        )
        .bind(applicant_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(ApplicationWithJob::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_by_job(&self, job_id: Snowflake) -> RepoResult<Vec<ApplicationWithApplicant>> {
        let rows = sqlx::query_as::<_, ApplicationWithApplicantModel>(
            r"
            SELECT a.id, a.job_id, a.applicant_id, a.status, a.resume,
                   a.created_at, a.updated_at,
                   u.id AS a_id, u.name AS a_name, u.email AS a_email
            FROM applications a
            LEFT JOIN users u ON u.id = a.applicant_id
            WHERE a.job_id = $1
            ORDER BY a.created_at DESC
            ",
        )
        .bind(job_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows
            .into_iter()
            .map(ApplicationWithApplicant::from)
            .collect())
    }

    #[instrument(skip(self))]
    async fn update_status(&self, id: Snowflake, status: ApplicationStatus) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE applications
            SET status = $2, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .bind(status.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(application_not_found(id));
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
        assert_send_sync::<PgApplicationRepository>();
    }
}
