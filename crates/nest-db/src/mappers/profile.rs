//! Profile entity <-> model mapper

use nest_core::entities::Profile;
use nest_core::value_objects::Snowflake;

use crate::models::ProfileModel;

impl From<ProfileModel> for Profile {
    fn from(model: ProfileModel) -> Self {
        Profile {
            id: Snowflake::new(model.id),
            user_id: Snowflake::new(model.user_id),
            bio: model.bio,
            skills: model.skills.0,
            contact: model.contact.0,
            education: model.education.0,
            experience: model.experience.0,
            certifications: model.certifications.0,
            resume: model.resume,
            socials: model.socials.0,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
