//! User roles and the enumerated states carried by domain records

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Account role controlling what a user may do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Student,
    Recruiter,
    Admin,
}

impl UserRole {
    /// Parse a role from free-form input, defaulting to `Student`
    ///
    /// Registration accepts an optional role field and normalizes it to
    /// lowercase before matching.
    pub fn from_input(input: Option<&str>) -> Self {
        input
            .and_then(|s| s.trim().to_lowercase().parse().ok())
            .unwrap_or_default()
    }

    /// Database/JSON representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Recruiter => "recruiter",
            Self::Admin => "admin",
        }
    }

    #[inline]
    pub fn is_student(&self) -> bool {
        matches!(self, Self::Student)
    }

    #[inline]
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Recruiters and admins may manage job postings
    #[inline]
    pub fn can_post_jobs(&self) -> bool {
        matches!(self, Self::Recruiter | Self::Admin)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(Self::Student),
            "recruiter" => Ok(Self::Recruiter),
            "admin" => Ok(Self::Admin),
            _ => Err(UnknownVariant),
        }
    }
}

/// Employment type of a job posting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum JobType {
    #[default]
    #[serde(rename = "Internship")]
    Internship,
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    #[serde(rename = "Contract")]
    Contract,
}

impl JobType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Internship => "Internship",
            Self::FullTime => "Full-time",
            Self::PartTime => "Part-time",
            Self::Contract => "Contract",
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Internship" => Ok(Self::Internship),
            "Full-time" => Ok(Self::FullTime),
            "Part-time" => Ok(Self::PartTime),
            "Contract" => Ok(Self::Contract),
            _ => Err(UnknownVariant),
        }
    }
}

/// Self-assessed proficiency of a profile skill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SkillLevel {
    #[serde(rename = "Beginner")]
    Beginner,
    #[default]
    #[serde(rename = "Intermediate")]
    Intermediate,
    #[serde(rename = "Expert")]
    Expert,
}

impl SkillLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Expert => "Expert",
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Triage state of a job application
///
/// No transition graph is enforced: a recruiter may move an application
/// between any two states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Applied,
    Shortlisted,
    Interviewing,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Applied => "applied",
            Self::Shortlisted => "shortlisted",
            Self::Interviewing => "interviewing",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "applied" => Ok(Self::Applied),
            "shortlisted" => Ok(Self::Shortlisted),
            "interviewing" => Ok(Self::Interviewing),
            "accepted" => Ok(Self::Accepted),
            "rejected" => Ok(Self::Rejected),
            _ => Err(UnknownVariant),
        }
    }
}

/// Error for parsing any of the enumerations above
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown variant")]
pub struct UnknownVariant;
