//! Job service
//!
//! Posting CRUD, listing with filters, and skill-matched recommendations.

use chrono::Utc;
use tracing::{info, instrument};

use nest_core::entities::{Job, JobFilter, User, DEFAULT_EXPERIENCE_LEVEL};
use nest_core::error::DomainError;
use nest_core::value_objects::Snowflake;

use crate::dto::{CreateJobRequest, JobResponse, UpdateJobRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Recommendation caps from the matching chain
const RECOMMEND_NO_SKILLS_LIMIT: i64 = 10;
const RECOMMEND_MATCH_LIMIT: i64 = 20;

/// Job service
pub struct JobService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> JobService<'a> {
    /// Create a new JobService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List open jobs matching the filter, newest first
    #[instrument(skip(self))]
    pub async fn list(&self, filter: JobFilter) -> ServiceResult<Vec<JobResponse>> {
        let jobs = self.ctx.job_repo().list(&filter).await?;
        Ok(jobs.into_iter().map(JobResponse::from).collect())
    }

    /// Get a single job with its recruiter resolved
    #[instrument(skip(self))]
    pub async fn get(&self, id: Snowflake) -> ServiceResult<JobResponse> {
        let job = self
            .ctx
            .job_repo()
            .find_with_recruiter(id)
            .await?
            .ok_or(DomainError::JobNotFound(id))?;

        Ok(JobResponse::from(job))
    }

    /// Create a job posting owned by the acting recruiter
    ///
    /// Role is enforced at the HTTP boundary; this only records ownership.
    #[instrument(skip(self, request), fields(actor = %actor.id))]
    pub async fn create(
        &self,
        request: CreateJobRequest,
        actor: &User,
    ) -> ServiceResult<JobResponse> {
        let now = Utc::now();
        let job = Job {
            id: self.ctx.generate_id(),
            title: request.title,
            description: request.description,
            company: request.company,
            location: request.location,
            job_type: request.job_type,
            salary: request.salary,
            requirements: request.requirements,
            experience_level: request
                .experience_level
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_EXPERIENCE_LEVEL.to_string()),
            skills: request.skills,
            recruiter_id: actor.id,
            is_open: true,
            created_at: now,
            updated_at: now,
        };

        self.ctx.job_repo().create(&job).await?;

        info!(job_id = %job.id, "Job created");

        self.get(job.id).await
    }

    /// Update a posting; only its owner or an admin may do so
    #[instrument(skip(self, request), fields(actor = %actor.id))]
    pub async fn update(
        &self,
        id: Snowflake,
        request: UpdateJobRequest,
        actor: &User,
    ) -> ServiceResult<JobResponse> {
        let mut job = self
            .ctx
            .job_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::JobNotFound(id))?;

        if !job.is_managed_by(actor.id, actor.role.is_admin()) {
            return Err(DomainError::NotJobOwner.into());
        }

        if let Some(title) = request.title {
            job.title = title;
        }
        if let Some(description) = request.description {
            job.description = description;
        }
        if let Some(company) = request.company {
            job.company = company;
        }
        if let Some(location) = request.location {
            job.location = location;
        }
        if let Some(job_type) = request.job_type {
            job.job_type = job_type;
        }
        if let Some(salary) = request.salary {
            job.salary = Some(salary);
        }
        if let Some(requirements) = request.requirements {
            job.requirements = requirements;
        }
        if let Some(experience_level) = request.experience_level {
            job.experience_level = experience_level;
        }
        if let Some(skills) = request.skills {
            job.skills = skills;
        }
        if let Some(is_open) = request.is_open {
            job.is_open = is_open;
        }

        self.ctx.job_repo().update(&job).await?;

        info!(job_id = %id, "Job updated");

        self.get(id).await
    }

    /// Delete a posting; applications referencing it are left in place
    #[instrument(skip(self), fields(actor = %actor.id))]
    pub async fn delete(&self, id: Snowflake, actor: &User) -> ServiceResult<()> {
        let job = self
            .ctx
            .job_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::JobNotFound(id))?;

        if !job.is_managed_by(actor.id, actor.role.is_admin()) {
            return Err(DomainError::NotJobOwner.into());
        }

        self.ctx.job_repo().delete(id).await?;

        info!(job_id = %id, "Job deleted");
        Ok(())
    }

    /// Skill-matched recommendations for a student
    ///
    /// Matching chain: no profile or no skills yields the 10 most-recent open
    /// jobs; otherwise open jobs matching any skill (skills list, description,
    /// or requirements, case-insensitive) capped at 20; zero matches falls
    /// back to the 20 most-recent open jobs.
    #[instrument(skip(self))]
    pub async fn recommendations(&self, student_id: Snowflake) -> ServiceResult<Vec<JobResponse>> {
        let skill_names = self
            .ctx
            .profile_repo()
            .find_by_user(student_id)
            .await?
            .map(|p| p.skill_names())
            .unwrap_or_default();

        if skill_names.is_empty() {
            let jobs = self
                .ctx
                .job_repo()
                .list_recent(RECOMMEND_NO_SKILLS_LIMIT)
                .await?;
            return Ok(jobs.into_iter().map(JobResponse::from).collect());
        }

        let matched = self
            .ctx
            .job_repo()
            .list_matching_skills(&skill_names, RECOMMEND_MATCH_LIMIT)
            .await?;

        let jobs = if matched.is_empty() {
            self.ctx.job_repo().list_recent(RECOMMEND_MATCH_LIMIT).await?
        } else {
            matched
        };

        Ok(jobs.into_iter().map(JobResponse::from).collect())
    }
}
