//! Application entity <-> model mappers

use nest_core::entities::{
    ApplicantInfo, Application, ApplicationWithApplicant, ApplicationWithJob, JobSummary,
};
use nest_core::value_objects::{ApplicationStatus, JobType, Snowflake};

use crate::models::{ApplicationModel, ApplicationWithApplicantModel, ApplicationWithJobModel};

impl From<ApplicationModel> for Application {
    fn from(model: ApplicationModel) -> Self {
        Application {
            id: Snowflake::new(model.id),
            job_id: Snowflake::new(model.job_id),
            applicant_id: Snowflake::new(model.applicant_id),
            status: model
                .status
                .parse::<ApplicationStatus>()
                .unwrap_or_default(),
            resume: model.resume,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<ApplicationWithJobModel> for ApplicationWithJob {
    fn from(model: ApplicationWithJobModel) -> Self {
        let job = match (model.j_id, model.j_title, model.j_company, model.j_location) {
            (Some(id), Some(title), Some(company), Some(location)) => Some(JobSummary {
                id: Snowflake::new(id),
                title,
                company,
                location,
                job_type: model
                    .j_job_type
                    .as_deref()
                    .and_then(|s| s.parse::<JobType>().ok())
                    .unwrap_or_default(),
            }),
            _ => None,
        };

        let application = Application {
            id: Snowflake::new(model.id),
            job_id: Snowflake::new(model.job_id),
            applicant_id: Snowflake::new(model.applicant_id),
            status: model
                .status
                .parse::<ApplicationStatus>()
                .unwrap_or_default(),
            resume: model.resume,
            created_at: model.created_at,
            updated_at: model.updated_at,
        };

        ApplicationWithJob { application, job }
    }
}

impl From<ApplicationWithApplicantModel> for ApplicationWithApplicant {
    fn from(model: ApplicationWithApplicantModel) -> Self {
        let applicant = match (model.a_id, model.a_name, model.a_email) {
            (Some(id), Some(name), Some(email)) => Some(ApplicantInfo {
                id: Snowflake::new(id),
                name,
                email,
            }),
            _ => None,
        };

        let application = Application {
            id: Snowflake::new(model.id),
            job_id: Snowflake::new(model.job_id),
            applicant_id: Snowflake::new(model.applicant_id),
            status: model
                .status
                .parse::<ApplicationStatus>()
                .unwrap_or_default(),
            resume: model.resume,
            created_at: model.created_at,
            updated_at: model.updated_at,
        };

        ApplicationWithApplicant {
            application,
            applicant,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_deleted_job_maps_to_none() {
        let now = Utc::now();
        let model = ApplicationWithJobModel {
            id: 1,
            job_id: 2,
            applicant_id: 3,
            status: "applied".to_string(),
            resume: None,
            created_at: now,
            updated_at: now,
            j_id: None,
            j_title: None,
            j_company: None,
            j_location: None,
            j_job_type: None,
        };

        let with = ApplicationWithJob::from(model);
        assert!(with.job.is_none());
        assert_eq!(with.application.job_id, Snowflake::new(2));
    }
}
