use crate::{Profile, UserId};

use serde_json::json;

#[test]
fn test_profile_deserializes_backend_record() {
    let profile: Profile = serde_json::from_value(json!({
        "id": 42,
        "email": "ada@example.com",
        "name": "Ada Lovelace",
        "skills": ["rust", "math"],
        "work_experiences": [{
            "title": "Analyst",
            "company": "Analytical Engines Ltd",
            "is_current": true,
            "description_bullets": ["Wrote the first program"]
        }],
        "education_entries": [{
            "institution": "Home",
            "degree_type": "other",
            "gpa": 4.0
        }],
        "is_active": true,
        "created_at": "2024-01-01T00:00:00Z",
        "profile_completion_percentage": 40
    }))
    .unwrap();

    assert_eq!(profile.id, UserId::from(42));
    assert_eq!(profile.skills, vec!["rust", "math"]);
    assert_eq!(profile.work_experiences.len(), 1);
    assert!(profile.work_experiences[0].is_current);
    assert_eq!(profile.education_entries[0].gpa, Some(4.0));
    assert_eq!(profile.profile_completion_percentage, 40);
    assert!(profile.projects.is_empty());
}

#[test]
fn test_profile_minimal_record_uses_defaults() {
    let profile: Profile =
        serde_json::from_value(json!({ "id": "u-1", "email": "a@x.com" })).unwrap();

    assert_eq!(profile.id.as_str(), "u-1");
    assert!(profile.is_active);
    assert!(!profile.is_admin);
    assert!(profile.name.is_none());
    assert!(!profile.has_resume());
}

#[test]
fn test_profile_display_name_falls_back_to_email() {
    let mut profile = Profile::new(UserId::from("u-1"), "a@x.com".to_string());
    assert_eq!(profile.display_name(), "a@x.com");

    profile.name = Some("Ada".to_string());
    assert_eq!(profile.display_name(), "Ada");
}

#[test]
fn test_work_experience_accepts_bullets_alias() {
    let profile: Profile = serde_json::from_value(json!({
        "id": 1,
        "email": "a@x.com",
        "work_experiences": [{ "title": "Dev", "company": "Co", "bullets": ["x"] }]
    }))
    .unwrap();

    assert_eq!(profile.work_experiences[0].description_bullets, vec!["x"]);
}
