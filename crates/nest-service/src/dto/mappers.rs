//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs and
//! from request inputs to domain types.

use nest_core::entities::{
    ApplicantInfo, ApplicationWithApplicant, ApplicationWithJob, Certification, Contact, Education,
    Experience, JobFilter, JobSummary, JobWithRecruiter, Profile, ProfilePatch, RecruiterInfo,
    Skill, Socials, User,
};

use super::requests::{
    CertificationInput, ContactInput, EducationInput, ExperienceInput, JobListQuery, SkillInput,
    SocialsInput, UpsertProfileRequest,
};
use super::responses::{
    ApplicantApplicationResponse, ApplicantProfileResponse, ApplicantResponse, ApplicationResponse,
    JobResponse, JobSummaryResponse, ProfileResponse, RecruiterResponse, UserResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
            created_at: user.created_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Job Mappers
// ============================================================================

impl From<&RecruiterInfo> for RecruiterResponse {
    fn from(info: &RecruiterInfo) -> Self {
        Self {
            id: info.id.to_string(),
            name: info.name.clone(),
            email: info.email.clone(),
        }
    }
}

impl From<JobWithRecruiter> for JobResponse {
    fn from(with: JobWithRecruiter) -> Self {
        let recruiter = with.recruiter.as_ref().map(RecruiterResponse::from);
        let job = with.job;
        Self {
            id: job.id.to_string(),
            title: job.title,
            description: job.description,
            company: job.company,
            location: job.location,
            job_type: job.job_type,
            salary: job.salary,
            requirements: job.requirements,
            experience_level: job.experience_level,
            skills: job.skills,
            recruiter,
            is_open: job.is_open,
            created_at: job.created_at,
            updated_at: job.updated_at,
        }
    }
}

impl From<JobListQuery> for JobFilter {
    fn from(query: JobListQuery) -> Self {
        Self {
            keyword: query.keyword.filter(|s| !s.trim().is_empty()),
            location: query.location.filter(|s| !s.trim().is_empty()),
            job_type: query.job_type,
            experience: query.experience.filter(|s| !s.trim().is_empty()),
        }
    }
}

// ============================================================================
// Application Mappers
// ============================================================================

impl From<&JobSummary> for JobSummaryResponse {
    fn from(summary: &JobSummary) -> Self {
        Self {
            id: summary.id.to_string(),
            title: summary.title.clone(),
            company: summary.company.clone(),
            location: summary.location.clone(),
            job_type: summary.job_type,
        }
    }
}

impl From<ApplicationWithJob> for ApplicationResponse {
    fn from(with: ApplicationWithJob) -> Self {
        Self {
            id: with.application.id.to_string(),
            status: with.application.status,
            resume: with.application.resume,
            job: with.job.as_ref().map(JobSummaryResponse::from),
            created_at: with.application.created_at,
        }
    }
}

impl From<&ApplicantInfo> for ApplicantResponse {
    fn from(info: &ApplicantInfo) -> Self {
        Self {
            id: info.id.to_string(),
            name: info.name.clone(),
            email: info.email.clone(),
        }
    }
}

impl ApplicantApplicationResponse {
    /// Combine an application row with the applicant's optional profile
    pub fn new(with: ApplicationWithApplicant, profile: Option<Profile>) -> Self {
        Self {
            id: with.application.id.to_string(),
            status: with.application.status,
            resume: with.application.resume,
            applicant: with.applicant.as_ref().map(ApplicantResponse::from),
            profile: profile.map(ApplicantProfileResponse::from),
            created_at: with.application.created_at,
        }
    }
}

impl From<Profile> for ApplicantProfileResponse {
    fn from(profile: Profile) -> Self {
        Self {
            resume: profile.resume,
            socials: profile.socials,
            education: profile.education,
            experience: profile.experience,
            skills: profile.skills,
        }
    }
}

// ============================================================================
// Profile Mappers
// ============================================================================

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self {
            id: profile.id.to_string(),
            user_id: profile.user_id.to_string(),
            bio: profile.bio,
            skills: profile.skills,
            contact: profile.contact,
            education: profile.education,
            experience: profile.experience,
            certifications: profile.certifications,
            resume: profile.resume,
            socials: profile.socials,
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}

impl From<SkillInput> for Skill {
    fn from(input: SkillInput) -> Self {
        Self {
            name: input.name,
            level: input.level,
            description: input.description,
        }
    }
}

impl From<ContactInput> for Contact {
    fn from(input: ContactInput) -> Self {
        Self {
            phone: input.phone,
            address: input.address,
            city: input.city,
            state: input.state,
            country: input.country,
            zip: input.zip,
        }
    }
}

impl From<EducationInput> for Education {
    fn from(input: EducationInput) -> Self {
        Self {
            school: input.school,
            degree: input.degree,
            field_of_study: input.field_of_study,
            from: input.from,
            to: input.to,
            current: input.current,
            description: input.description,
        }
    }
}

impl From<ExperienceInput> for Experience {
    fn from(input: ExperienceInput) -> Self {
        Self {
            title: input.title,
            company: input.company,
            location: input.location,
            from: input.from,
            to: input.to,
            current: input.current,
            description: input.description,
        }
    }
}

impl From<CertificationInput> for Certification {
    fn from(input: CertificationInput) -> Self {
        Self {
            name: input.name,
            issuer: input.issuer,
            date: input.date,
            url: input.url,
            description: input.description,
        }
    }
}

impl From<SocialsInput> for Socials {
    fn from(input: SocialsInput) -> Self {
        Self {
            linkedin: input.linkedin,
            github: input.github,
            website: input.website,
            twitter: input.twitter,
        }
    }
}

impl From<UpsertProfileRequest> for ProfilePatch {
    fn from(request: UpsertProfileRequest) -> Self {
        Self {
            bio: request.bio,
            skills: request
                .skills
                .map(|v| v.into_iter().map(Skill::from).collect()),
            contact: request.contact.map(Contact::from),
            education: request
                .education
                .map(|v| v.into_iter().map(Education::from).collect()),
            experience: request
                .experience
                .map(|v| v.into_iter().map(Experience::from).collect()),
            certifications: request
                .certifications
                .map(|v| v.into_iter().map(Certification::from).collect()),
            resume: request.resume,
            socials: request.socials.map(Socials::from),
        }
    }
}
