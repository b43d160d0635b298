//! Job entity <-> model mappers

use nest_core::entities::{Job, JobWithRecruiter, RecruiterInfo};
use nest_core::value_objects::{JobType, Snowflake};

use crate::models::{JobModel, JobWithRecruiterModel};

impl From<JobModel> for Job {
    fn from(model: JobModel) -> Self {
        Job {
            id: Snowflake::new(model.id),
            title: model.title,
            description: model.description,
            company: model.company,
            location: model.location,
            job_type: model.job_type.parse::<JobType>().unwrap_or_default(),
            salary: model.salary,
            requirements: model.requirements,
            experience_level: model.experience_level,
            skills: model.skills,
            recruiter_id: Snowflake::new(model.recruiter_id),
            is_open: model.is_open,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<JobWithRecruiterModel> for JobWithRecruiter {
    fn from(model: JobWithRecruiterModel) -> Self {
        let recruiter = match (model.r_id, model.r_name, model.r_email) {
            (Some(id), Some(name), Some(email)) => Some(RecruiterInfo {
                id: Snowflake::new(id),
                name,
                email,
            }),
            _ => None,
        };

        let job = Job {
            id: Snowflake::new(model.id),
            title: model.title,
            description: model.description,
            company: model.company,
            location: model.location,
            job_type: model.job_type.parse::<JobType>().unwrap_or_default(),
            salary: model.salary,
            requirements: model.requirements,
            experience_level: model.experience_level,
            skills: model.skills,
            recruiter_id: Snowflake::new(model.recruiter_id),
            is_open: model.is_open,
            created_at: model.created_at,
            updated_at: model.updated_at,
        };

        JobWithRecruiter { job, recruiter }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn joined_model(r_id: Option<i64>) -> JobWithRecruiterModel {
        let now = Utc::now();
        JobWithRecruiterModel {
            id: 1,
            title: "Backend Engineer".to_string(),
            description: "Build APIs".to_string(),
            company: "Acme".to_string(),
            location: "Remote".to_string(),
            job_type: "Full-time".to_string(),
            salary: None,
            requirements: vec![],
            experience_level: "0-1 years".to_string(),
            skills: vec!["Rust".to_string()],
            recruiter_id: 7,
            is_open: true,
            created_at: now,
            updated_at: now,
            r_id,
            r_name: r_id.map(|_| "Grace".to_string()),
            r_email: r_id.map(|_| "grace@acme.com".to_string()),
        }
    }

    #[test]
    fn test_recruiter_resolved() {
        let with = JobWithRecruiter::from(joined_model(Some(7)));
        assert_eq!(with.job.job_type, JobType::FullTime);
        assert_eq!(with.recruiter.unwrap().name, "Grace");
    }

    #[test]
    fn test_missing_recruiter_maps_to_none() {
        let with = JobWithRecruiter::from(joined_model(None));
        assert!(with.recruiter.is_none());
    }
}
