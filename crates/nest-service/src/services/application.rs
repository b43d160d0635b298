//! Application service
//!
//! A student applies once per job; recruiters list and triage applicants.

use tracing::{info, instrument};

use nest_common::OutgoingEmail;
use nest_core::entities::{Application, User};
use nest_core::error::DomainError;
use nest_core::value_objects::{ApplicationStatus, Snowflake};

use crate::dto::{ApplicantApplicationResponse, ApplicationResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Application service
pub struct ApplicationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ApplicationService<'a> {
    /// Create a new ApplicationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Apply to a job as the acting student
    ///
    /// The existence pre-check gives a friendly error on the common path; the
    /// unique constraint on (job, applicant) is what actually prevents
    /// duplicates under concurrent requests. Notification emails are
    /// dispatched without awaiting, so the response never waits on SMTP.
    #[instrument(skip(self), fields(actor = %actor.id))]
    pub async fn apply(&self, job_id: Snowflake, actor: &User) -> ServiceResult<ApplicationResponse> {
        // The job lookup comes first: applying to a missing job is a
        // not-found outcome regardless of who asks.
        let job = self
            .ctx
            .job_repo()
            .find_with_recruiter(job_id)
            .await?
            .ok_or(DomainError::JobNotFound(job_id))?;

        if !actor.role.is_student() {
            return Err(DomainError::OnlyStudentsMayApply.into());
        }

        if self.ctx.application_repo().exists(job_id, actor.id).await? {
            return Err(DomainError::AlreadyApplied.into());
        }

        let resume = self
            .ctx
            .profile_repo()
            .find_by_user(actor.id)
            .await?
            .and_then(|p| p.resume);

        let mut application = Application::new(self.ctx.generate_id(), job_id, actor.id);
        application.resume = resume;

        // A concurrent duplicate insert surfaces here as AlreadyApplied.
        self.ctx.application_repo().create(&application).await?;

        info!(application_id = %application.id, job_id = %job_id, "Application created");

        if let Some(recruiter) = &job.recruiter {
            self.ctx.mailer().send_detached(OutgoingEmail::new(
                recruiter.email.clone(),
                format!("New application for {}", job.job.title),
                format!(
                    "Hi {},\n\n{} ({}) has applied to your posting \"{}\".",
                    recruiter.name, actor.name, actor.email, job.job.title
                ),
            ));
        }
        self.ctx.mailer().send_detached(OutgoingEmail::new(
            actor.email.clone(),
            format!("Application received: {}", job.job.title),
            format!(
                "Hi {},\n\nYour application to \"{}\" at {} was received.",
                actor.name, job.job.title, job.job.company
            ),
        ));

        Ok(ApplicationResponse {
            id: application.id.to_string(),
            status: application.status,
            resume: application.resume,
            job: None,
            created_at: application.created_at,
        })
    }

    /// The acting student's applications, newest first
    #[instrument(skip(self), fields(actor = %actor.id))]
    pub async fn my_applications(&self, actor: &User) -> ServiceResult<Vec<ApplicationResponse>> {
        let applications = self
            .ctx
            .application_repo()
            .list_by_applicant(actor.id)
            .await?;

        Ok(applications
            .into_iter()
            .map(ApplicationResponse::from)
            .collect())
    }

    /// Applications for a job, visible to its owner or an admin
    ///
    /// Each applicant's profile subset is looked up individually; fine at
    /// this scale, batch it before the applicant counts grow.
    #[instrument(skip(self), fields(actor = %actor.id))]
    pub async fn for_job(
        &self,
        job_id: Snowflake,
        actor: &User,
    ) -> ServiceResult<Vec<ApplicantApplicationResponse>> {
        let job = self
            .ctx
            .job_repo()
            .find_by_id(job_id)
            .await?
            .ok_or(DomainError::JobNotFound(job_id))?;

        if !job.is_managed_by(actor.id, actor.role.is_admin()) {
            return Err(DomainError::NotJobOwner.into());
        }

        let applications = self.ctx.application_repo().list_by_job(job_id).await?;

        let mut responses = Vec::with_capacity(applications.len());
        for with in applications {
            let profile = match &with.applicant {
                Some(applicant) => self.ctx.profile_repo().find_by_user(applicant.id).await?,
                None => None,
            };
            responses.push(ApplicantApplicationResponse::new(with, profile));
        }

        Ok(responses)
    }

    /// Overwrite an application's status
    ///
    /// Any status may move to any other; no transition graph is enforced.
    #[instrument(skip(self), fields(actor = %actor.id))]
    pub async fn update_status(
        &self,
        id: Snowflake,
        status: ApplicationStatus,
        actor: &User,
    ) -> ServiceResult<ApplicationResponse> {
        let application = self
            .ctx
            .application_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::ApplicationNotFound(id))?;

        // Authorization follows the job the application belongs to.
        let job = self
            .ctx
            .job_repo()
            .find_by_id(application.job_id)
            .await?
            .ok_or(DomainError::JobNotFound(application.job_id))?;

        if !job.is_managed_by(actor.id, actor.role.is_admin()) {
            return Err(DomainError::NotApplicationOwner.into());
        }

        self.ctx.application_repo().update_status(id, status).await?;

        info!(application_id = %id, status = %status, "Application status updated");

        Ok(ApplicationResponse {
            id: application.id.to_string(),
            status,
            resume: application.resume,
            job: None,
            created_at: application.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    // The duplicate-application invariant and authorization paths are covered
    // by the integration test crate against a real database.
}
