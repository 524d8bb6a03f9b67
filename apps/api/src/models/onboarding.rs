use serde::{Deserialize, Serialize};

/// Everything the onboarding wizard collects apart from the résumé file,
/// which goes through the upload path instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OnboardingData {
    pub current_status: String,
    pub industry: String,
    pub career_path: String,
    pub experience_level: String,
    pub user_goals: Vec<String>,
    pub user_note: Option<String>,
}
