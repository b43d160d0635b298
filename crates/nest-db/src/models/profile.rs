//! Profile database model
//!
//! Structured sub-lists live in JSONB columns, decoded through
//! `sqlx::types::Json` into the domain's serde types.

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::FromRow;

use nest_core::entities::{Certification, Contact, Education, Experience, Skill, Socials};

/// Database model for profiles table
#[derive(Debug, Clone, FromRow)]
pub struct ProfileModel {
    pub id: i64,
    pub user_id: i64,
    pub bio: Option<String>,
    pub skills: Json<Vec<Skill>>,
    pub contact: Json<Contact>,
    pub education: Json<Vec<Education>>,
    pub experience: Json<Vec<Experience>>,
    pub certifications: Json<Vec<Certification>>,
    pub resume: Option<String>,
    pub socials: Json<Socials>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
