use crate::{
    Award, CoreError, CoreResult, EducationEntry, LanguageSkill, Project, WorkExperience,
};

use serde::Serialize;

pub const MAX_NAME_LENGTH: usize = 200;
pub const MAX_HEADLINE_LENGTH: usize = 200;
pub const MAX_TEXT_LENGTH: usize = 2000;
pub const MAX_LIST_ENTRIES: usize = 100;

/// Partial profile change. Absent fields are left alone by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfolio_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interests: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goals: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_experiences: Option<Vec<WorkExperience>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education_entries: Option<Vec<EducationEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<Project>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<LanguageSkill>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub awards: Option<Vec<Award>>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        *self == ProfileUpdate::default()
    }

    /// Local checks run before the request leaves the client.
    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        if self.is_empty() {
            return Err(CoreError::validation("profile", "No fields to update"));
        }

        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(CoreError::validation("name", "Name cannot be empty"));
            }
            check_length("name", name, MAX_NAME_LENGTH)?;
        }

        if let Some(headline) = &self.headline {
            check_length("headline", headline, MAX_HEADLINE_LENGTH)?;
        }
        if let Some(bio) = &self.bio {
            check_length("bio", bio, MAX_TEXT_LENGTH)?;
        }
        if let Some(goals) = &self.goals {
            check_length("goals", goals, MAX_TEXT_LENGTH)?;
        }

        check_url("linkedin_url", self.linkedin_url.as_deref())?;
        check_url("github_url", self.github_url.as_deref())?;
        check_url("portfolio_url", self.portfolio_url.as_deref())?;

        if let Some(skills) = &self.skills {
            check_tags("skills", skills)?;
        }
        if let Some(interests) = &self.interests {
            check_tags("interests", interests)?;
        }

        if let Some(experiences) = &self.work_experiences {
            for experience in experiences {
                if experience.title.trim().is_empty() || experience.company.trim().is_empty() {
                    return Err(CoreError::validation(
                        "work_experiences",
                        "Each work experience needs a title and a company",
                    ));
                }
            }
        }

        if let Some(entries) = &self.education_entries {
            if entries.iter().any(|e| e.institution.trim().is_empty()) {
                return Err(CoreError::validation(
                    "education_entries",
                    "Each education entry needs an institution",
                ));
            }
        }

        Ok(())
    }
}

#[track_caller]
fn check_length(field: &str, value: &str, max: usize) -> CoreResult<()> {
    let len = value.chars().count();
    if len > max {
        return Err(CoreError::validation(
            field,
            format!("{} must be at most {} characters, got {}", field, max, len),
        ));
    }
    Ok(())
}

#[track_caller]
fn check_url(field: &str, value: Option<&str>) -> CoreResult<()> {
    match value {
        Some(url) if !url.is_empty() => {
            if url.starts_with("http://") || url.starts_with("https://") {
                Ok(())
            } else {
                Err(CoreError::validation(
                    field,
                    format!("{} must start with http:// or https://", field),
                ))
            }
        }
        _ => Ok(()),
    }
}

#[track_caller]
fn check_tags(field: &str, tags: &[String]) -> CoreResult<()> {
    if tags.len() > MAX_LIST_ENTRIES {
        return Err(CoreError::validation(
            field,
            format!("{} accepts at most {} entries", field, MAX_LIST_ENTRIES),
        ));
    }
    if tags.iter().any(|t| t.trim().is_empty()) {
        return Err(CoreError::validation(
            field,
            format!("{} cannot contain empty entries", field),
        ));
    }
    Ok(())
}
