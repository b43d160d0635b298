//! PostgreSQL implementation of JobRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use nest_core::entities::{Job, JobFilter, JobWithRecruiter};
use nest_core::traits::{JobRepository, RepoResult};
use nest_core::value_objects::Snowflake;

use crate::models::{JobModel, JobWithRecruiterModel};

use super::error::{job_not_found, map_db_error};

/// Columns selected when joining a job with its recruiter
const JOINED_COLUMNS: &str = r"
    j.id, j.title, j.description, j.company, j.location, j.job_type, j.salary,
    j.requirements, j.experience_level, j.skills, j.recruiter_id, j.is_open,
    j.created_at, j.updated_at,
    u.id AS r_id, u.name AS r_name, u.email AS r_email
";

/// PostgreSQL implementation of JobRepository
#[derive(Clone)]
pub struct PgJobRepository {
    pool: PgPool,
}

impl PgJobRepository {
    /// Create a new PgJobRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobRepository for PgJobRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Job>> {
        let result = sqlx::query_as::<_, JobModel>(
            r"
            SELECT id, title, description, company, location, job_type, salary,
                   requirements, experience_level, skills, recruiter_id, is_open,
                   created_at, updated_at
            FROM jobs
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Job::from))
    }

    #[instrument(skip(self))]
    async fn find_with_recruiter(&self, id: Snowflake) -> RepoResult<Option<JobWithRecruiter>> {
        let sql = format!(
            r"
            SELECT {JOINED_COLUMNS}
            FROM jobs j
            LEFT JOIN users u ON u.id = j.recruiter_id
            WHERE j.id = $1
            "
        );

        let result = sqlx::query_as::<_, JobWithRecruiterModel>(&sql)
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(JobWithRecruiter::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: &JobFilter) -> RepoResult<Vec<JobWithRecruiter>> {
        // Every filter is optional; NULL binds disable their clause.
        let sql = format!(
            r"
            SELECT {JOINED_COLUMNS}
            FROM jobs j
            LEFT JOIN users u ON u.id = j.recruiter_id
            WHERE j.is_open = TRUE
              AND ($1::TEXT IS NULL
                   OR j.title ILIKE '%' || $1 || '%'
                   OR j.company ILIKE '%' || $1 || '%'
                   OR j.description ILIKE '%' || $1 || '%'
                   OR EXISTS (SELECT 1 FROM unnest(j.skills) s WHERE s ILIKE '%' || $1 || '%'))
              AND ($2::TEXT IS NULL OR j.location ILIKE '%' || $2 || '%')
              AND ($3::TEXT IS NULL OR j.job_type = $3)
              AND ($4::TEXT IS NULL OR j.experience_level ILIKE '%' || $4 || '%')
            ORDER BY j.created_at DESC
            "
        );

        let rows = sqlx::query_as::<_, JobWithRecruiterModel>(&sql)
            .bind(filter.keyword.as_deref())
            .bind(filter.location.as_deref())
            .bind(filter.job_type.map(|t| t.as_str()))
            .bind(filter.experience.as_deref())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(JobWithRecruiter::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_recent(&self, limit: i64) -> RepoResult<Vec<JobWithRecruiter>> {
        let sql = format!(
            r"
            SELECT {JOINED_COLUMNS}
            FROM jobs j
            LEFT JOIN users u ON u.id = j.recruiter_id
            WHERE j.is_open = TRUE
            ORDER BY j.created_at DESC
            LIMIT $1
            "
        );

        let rows = sqlx::query_as::<_, JobWithRecruiterModel>(&sql)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(JobWithRecruiter::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_matching_skills(
        &self,
        skill_names: &[String],
        limit: i64,
    ) -> RepoResult<Vec<JobWithRecruiter>> {
        // A job matches when any profile skill appears in its skills list or,
        // as a case-insensitive pattern, in its description or requirements.
        // Skill names are escaped so "C++" matches literally.
        let patterns: Vec<String> = skill_names.iter().map(|s| escape_regex(s)).collect();

        let sql = format!(
            r"
            SELECT {JOINED_COLUMNS}
            FROM jobs j
            LEFT JOIN users u ON u.id = j.recruiter_id
            WHERE j.is_open = TRUE
              AND (
                  EXISTS (SELECT 1 FROM unnest(j.skills) s WHERE s ~* ANY($1))
                  OR j.description ~* ANY($1)
                  OR EXISTS (SELECT 1 FROM unnest(j.requirements) r WHERE r ~* ANY($1))
              )
            LIMIT $2
            "
        );

        let rows = sqlx::query_as::<_, JobWithRecruiterModel>(&sql)
            .bind(&patterns)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(JobWithRecruiter::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, job: &Job) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO jobs (id, title, description, company, location, job_type, salary,
                              requirements, experience_level, skills, recruiter_id, is_open,
                              created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            ",
        )
        .bind(job.id.into_inner())
        .bind(&job.title)
        .bind(&job.description)
        .bind(&job.company)
        .bind(&job.location)
        .bind(job.job_type.as_str())
        .bind(&job.salary)
        .bind(&job.requirements)
        .bind(&job.experience_level)
        .bind(&job.skills)
        .bind(job.recruiter_id.into_inner())
        .bind(job.is_open)
        .bind(job.created_at)
        .bind(job.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, job: &Job) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE jobs
            SET title = $2, description = $3, company = $4, location = $5, job_type = $6,
                salary = $7, requirements = $8, experience_level = $9, skills = $10,
                is_open = $11, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(job.id.into_inner())
        .bind(&job.title)
        .bind(&job.description)
        .bind(&job.company)
        .bind(&job.location)
        .bind(job.job_type.as_str())
        .bind(&job.salary)
        .bind(&job.requirements)
        .bind(&job.experience_level)
        .bind(&job.skills)
        .bind(job.is_open)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(job_not_found(job.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        // Hard delete; applications keep their job_id and render without a job.
        let result = sqlx::query(
            r"
            DELETE FROM jobs WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(job_not_found(id));
        }

        Ok(())
    }
}

/// Escape POSIX regex metacharacters in a literal skill name
fn escape_regex(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(
            c,
            '\\' | '.' | '+' | '*' | '?' | '(' | ')' | '|' | '[' | ']' | '{' | '}' | '^' | '$'
        ) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
