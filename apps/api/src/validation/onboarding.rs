//! The seven onboarding wizard steps. Step 7 is free text and always passes.

use serde::Deserialize;

use super::rules::{is_blank, FileField};
use super::{Validate, ValidationErrors};

pub(super) fn check_current_status(errors: &mut ValidationErrors, value: &str) {
    errors.check(
        !is_blank(value),
        "currentStatus",
        "Please select your current status",
    );
}

pub(super) fn check_industry(errors: &mut ValidationErrors, value: &str) {
    errors.check(!is_blank(value), "industry", "Please select an industry");
}

pub(super) fn check_career_path(errors: &mut ValidationErrors, value: &str) {
    errors.check(!is_blank(value), "careerPath", "Please select a career path");
}

pub(super) fn check_experience_level(errors: &mut ValidationErrors, value: &str) {
    errors.check(
        !is_blank(value),
        "experienceLevel",
        "Please select your experience level",
    );
}

pub(super) fn check_user_goals(errors: &mut ValidationErrors, goals: &[String]) {
    errors.check(
        !goals.is_empty(),
        "userGoals",
        "Please select at least one goal",
    );
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CurrentStatusStep {
    pub current_status: String,
}

impl Validate for CurrentStatusStep {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_current_status(&mut errors, &self.current_status);
        errors.into_result()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IndustryStep {
    pub industry: String,
}

impl Validate for IndustryStep {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_industry(&mut errors, &self.industry);
        errors.into_result()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CareerPathStep {
    pub career_path: String,
}

impl Validate for CareerPathStep {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_career_path(&mut errors, &self.career_path);
        errors.into_result()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceLevelStep {
    pub experience_level: String,
}

impl Validate for ExperienceLevelStep {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_experience_level(&mut errors, &self.experience_level);
        errors.into_result()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeStep {
    pub resume_file: Option<FileField>,
}

impl Validate for ResumeStep {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let has_file = self
            .resume_file
            .as_ref()
            .and_then(FileField::as_file)
            .is_some();
        errors.check(has_file, "resumeFile", "Please upload your resume");
        errors.into_result()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserGoalsStep {
    pub user_goals: Vec<String>,
}

impl Validate for UserGoalsStep {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_user_goals(&mut errors, &self.user_goals);
        errors.into_result()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserNoteStep {
    pub user_note: Option<String>,
}

impl Validate for UserNoteStep {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_select_steps_reject_blank() {
        assert!(CurrentStatusStep::default().validate().is_err());
        assert!(IndustryStep {
            industry: "   ".to_string()
        }
        .validate()
        .is_err());
        assert!(CareerPathStep::default().validate().is_err());
        assert!(ExperienceLevelStep::default().validate().is_err());
    }

    #[test]
    fn test_select_steps_accept_values() {
        assert!(CurrentStatusStep {
            current_status: "Working Professional".to_string()
        }
        .validate()
        .is_ok());
        assert!(IndustryStep {
            industry: "Healthcare".to_string()
        }
        .validate()
        .is_ok());
        assert!(CareerPathStep {
            career_path: "Data Science".to_string()
        }
        .validate()
        .is_ok());
        assert!(ExperienceLevelStep {
            experience_level: "Mid Level".to_string()
        }
        .validate()
        .is_ok());
    }

    #[test]
    fn test_resume_step_requires_file_shape() {
        let ok: ResumeStep = serde_json::from_value(json!({
            "resumeFile": {"name": "cv.pdf", "size": 1000, "type": "application/pdf"}
        }))
        .unwrap();
        assert!(ok.validate().is_ok());

        let path_only: ResumeStep =
            serde_json::from_value(json!({"resumeFile": "cv.pdf"})).unwrap();
        assert_eq!(
            path_only.validate().unwrap_err().get("resumeFile"),
            Some("Please upload your resume")
        );

        let missing: ResumeStep = serde_json::from_value(json!({})).unwrap();
        assert!(missing.validate().is_err());

        let null: ResumeStep = serde_json::from_value(json!({"resumeFile": null})).unwrap();
        assert!(null.validate().is_err());
    }

    #[test]
    fn test_goals_step_requires_one_goal() {
        assert!(UserGoalsStep::default().validate().is_err());
        assert!(UserGoalsStep {
            user_goals: vec!["Switch careers".to_string()]
        }
        .validate()
        .is_ok());
    }

    #[test]
    fn test_note_step_always_passes() {
        assert!(UserNoteStep::default().validate().is_ok());
        assert!(UserNoteStep {
            user_note: Some(String::new())
        }
        .validate()
        .is_ok());
    }
}
