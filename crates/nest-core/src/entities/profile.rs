//! Profile entity - one per user, holding everything beyond the bare account

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{SkillLevel, Snowflake};

/// A user's profile document
///
/// Exactly one exists per user (unique reference on `user_id`). Structured
/// sub-lists are persisted as JSON documents by the storage layer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Profile {
    pub id: Snowflake,
    pub user_id: Snowflake,
    pub bio: Option<String>,
    pub skills: Vec<Skill>,
    pub contact: Contact,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub certifications: Vec<Certification>,
    /// Path to the uploaded resume, e.g. "/uploads/abc.pdf"
    pub resume: Option<String>,
    pub socials: Socials,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Names of all listed skills, used by job recommendations
    pub fn skill_names(&self) -> Vec<String> {
        self.skills.iter().map(|s| s.name.clone()).collect()
    }
}

/// A named skill with self-assessed proficiency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    #[serde(default)]
    pub level: SkillLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Contact block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
}

/// Education history entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub school: String,
    pub degree: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_of_study: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Work experience entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Certification entry; `url` may point at an uploaded attachment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Social links block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Socials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
}

/// Fields accepted by the profile upsert
///
/// `None` means "leave as is" for an existing profile; only present fields
/// overwrite the stored document.
#[derive(Debug, Clone, Default)]
pub struct ProfilePatch {
    pub bio: Option<String>,
    pub skills: Option<Vec<Skill>>,
    pub contact: Option<Contact>,
    pub education: Option<Vec<Education>>,
    pub experience: Option<Vec<Experience>>,
    pub certifications: Option<Vec<Certification>>,
    pub resume: Option<String>,
    pub socials: Option<Socials>,
}

impl ProfilePatch {
    /// Apply this patch over an existing profile document
    pub fn apply_to(self, profile: &mut Profile) {
        if let Some(bio) = self.bio {
            profile.bio = Some(bio);
        }
        if let Some(skills) = self.skills {
            profile.skills = skills;
        }
        if let Some(contact) = self.contact {
            profile.contact = contact;
        }
        if let Some(education) = self.education {
            profile.education = education;
        }
        if let Some(experience) = self.experience {
            profile.experience = experience;
        }
        if let Some(certifications) = self.certifications {
            profile.certifications = certifications;
        }
        if let Some(resume) = self.resume {
            profile.resume = Some(resume);
        }
        if let Some(socials) = self.socials {
            profile.socials = socials;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_names() {
        let profile = Profile {
            skills: vec![
                Skill {
                    name: "Rust".to_string(),
                    level: SkillLevel::Expert,
                    description: None,
                },
                Skill {
                    name: "SQL".to_string(),
                    level: SkillLevel::Intermediate,
                    description: None,
                },
            ],
            ..Default::default()
        };
        assert_eq!(profile.skill_names(), vec!["Rust", "SQL"]);
    }

    #[test]
    fn test_patch_only_overwrites_present_fields() {
        let mut profile = Profile {
            bio: Some("old bio".to_string()),
            resume: Some("/uploads/old.pdf".to_string()),
            ..Default::default()
        };

        let patch = ProfilePatch {
            bio: Some("new bio".to_string()),
            ..Default::default()
        };
        patch.apply_to(&mut profile);

        assert_eq!(profile.bio.as_deref(), Some("new bio"));
        assert_eq!(profile.resume.as_deref(), Some("/uploads/old.pdf"));
    }

    #[test]
    fn test_skill_serde_defaults() {
        let skill: Skill = serde_json::from_str(r#"{"name":"Go"}"#).unwrap();
        assert_eq!(skill.level, SkillLevel::Intermediate);
        assert!(skill.description.is_none());
    }
}
