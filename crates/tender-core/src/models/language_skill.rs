use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageSkill {
    pub language: String,
    /// "native", "fluent", "advanced", "intermediate", "beginner"
    pub proficiency: String,
}
