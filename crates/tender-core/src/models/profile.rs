use crate::{Award, EducationEntry, LanguageSkill, Project, UserId, WorkExperience};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User-editable biographical and professional record tied to a session.
///
/// Always replaced wholesale: by a fetch, or by the canonical record the
/// server returns from an update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: UserId,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,

    // Contact & links
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub portfolio_url: Option<String>,

    // Skills & interests
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub goals: Option<String>,

    // History
    #[serde(default)]
    pub work_experiences: Vec<WorkExperience>,
    #[serde(default)]
    pub education_entries: Vec<EducationEntry>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub languages: Vec<LanguageSkill>,
    #[serde(default)]
    pub awards: Vec<Award>,

    // Files
    #[serde(default)]
    pub cv_filename: Option<String>,
    #[serde(default)]
    pub transcript_filename: Option<String>,
    #[serde(default)]
    pub profile_picture_url: Option<String>,

    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub is_admin: bool,

    // Audit
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(default, alias = "profile_completion")]
    pub profile_completion_percentage: u8,
}

fn default_active() -> bool {
    true
}

impl Profile {
    /// Empty profile for a freshly created account
    pub fn new(id: UserId, email: String) -> Self {
        Self {
            id,
            email,
            name: None,
            headline: None,
            bio: None,
            phone: None,
            linkedin_url: None,
            github_url: None,
            portfolio_url: None,
            skills: Vec::new(),
            interests: Vec::new(),
            goals: None,
            work_experiences: Vec::new(),
            education_entries: Vec::new(),
            projects: Vec::new(),
            languages: Vec::new(),
            awards: Vec::new(),
            cv_filename: None,
            transcript_filename: None,
            profile_picture_url: None,
            is_active: true,
            is_admin: false,
            created_at: Some(Utc::now()),
            updated_at: None,
            profile_completion_percentage: 0,
        }
    }

    /// Name to show in headers, falling back to the email address
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.email,
        }
    }

    pub fn has_resume(&self) -> bool {
        self.cv_filename.is_some()
    }
}
