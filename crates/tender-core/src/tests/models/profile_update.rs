use crate::models::profile_update::MAX_TEXT_LENGTH;
use crate::{ProfileUpdate, WorkExperience};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok, some};

#[test]
fn given_empty_update_when_validate_then_error() {
    let update = ProfileUpdate::default();

    assert!(update.is_empty());
    assert_that!(update.validate(), err(anything()));
}

#[test]
fn given_headline_only_when_serialized_then_other_fields_absent() {
    let update = ProfileUpdate {
        headline: Some("Rustacean".to_string()),
        ..Default::default()
    };

    let body = serde_json::to_value(&update).unwrap();

    assert_eq!(body, serde_json::json!({ "headline": "Rustacean" }));
}

#[test]
fn given_blank_name_when_validate_then_name_field_reported() {
    let update = ProfileUpdate {
        name: Some("   ".to_string()),
        ..Default::default()
    };

    let error = update.validate().unwrap_err();

    assert_that!(error.field(), some(eq("name")));
}

#[test]
fn given_bio_too_long_when_validate_then_error() {
    let update = ProfileUpdate {
        bio: Some("x".repeat(MAX_TEXT_LENGTH + 1)),
        ..Default::default()
    };

    assert_that!(update.validate(), err(anything()));
}

#[test]
fn given_link_without_scheme_when_validate_then_error() {
    let update = ProfileUpdate {
        github_url: Some("github.com/ada".to_string()),
        ..Default::default()
    };

    let error = update.validate().unwrap_err();

    assert_that!(error.field(), some(eq("github_url")));
}

#[test]
fn given_empty_skill_when_validate_then_error() {
    let update = ProfileUpdate {
        skills: Some(vec!["rust".to_string(), "".to_string()]),
        ..Default::default()
    };

    assert_that!(update.validate(), err(anything()));
}

#[test]
fn given_experience_without_company_when_validate_then_error() {
    let update = ProfileUpdate {
        work_experiences: Some(vec![WorkExperience {
            title: "Engineer".to_string(),
            company: String::new(),
            location: None,
            start_date: None,
            end_date: None,
            is_current: false,
            description_bullets: Vec::new(),
        }]),
        ..Default::default()
    };

    assert_that!(update.validate(), err(anything()));
}

#[test]
fn given_valid_update_when_validate_then_ok() {
    let update = ProfileUpdate {
        name: Some("Ada".to_string()),
        linkedin_url: Some("https://linkedin.com/in/ada".to_string()),
        skills: Some(vec!["rust".to_string()]),
        ..Default::default()
    };

    assert_that!(update.validate(), ok(anything()));
}
