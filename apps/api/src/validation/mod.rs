//! Form validation: named, pure checks over the records the UI submits.
//!
//! Every form reports all failing fields in one pass. A field keeps the
//! message of the first rule it failed. Cross-field rules (password
//! confirmation) report on the dependent field.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;

pub mod auth;
pub mod documents;
pub mod onboarding;
pub mod rules;

use crate::models::onboarding::OnboardingData;

/// Field path → human-readable message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `message` for `field` unless the field already has one.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    /// Records `message` when `ok` is false.
    pub fn check(&mut self, ok: bool, field: &str, message: impl Into<String>) {
        if !ok {
            self.add(field, message);
        }
    }

    #[cfg(test)]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|(k, v)| format!("{k}: {v}")).collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

/// Every schema the UI can ask for by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Login,
    Register,
    ForgotPassword,
    OnboardingStep1,
    OnboardingStep2,
    OnboardingStep3,
    OnboardingStep4,
    OnboardingStep5,
    OnboardingStep6,
    OnboardingStep7,
    JobInput,
    Profile,
    CoverLetter,
    ResumeFile,
}

impl FormKind {
    pub const ALL: [FormKind; 14] = [
        FormKind::Login,
        FormKind::Register,
        FormKind::ForgotPassword,
        FormKind::OnboardingStep1,
        FormKind::OnboardingStep2,
        FormKind::OnboardingStep3,
        FormKind::OnboardingStep4,
        FormKind::OnboardingStep5,
        FormKind::OnboardingStep6,
        FormKind::OnboardingStep7,
        FormKind::JobInput,
        FormKind::Profile,
        FormKind::CoverLetter,
        FormKind::ResumeFile,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FormKind::Login => "login",
            FormKind::Register => "register",
            FormKind::ForgotPassword => "forgotPassword",
            FormKind::OnboardingStep1 => "onboardingStep1",
            FormKind::OnboardingStep2 => "onboardingStep2",
            FormKind::OnboardingStep3 => "onboardingStep3",
            FormKind::OnboardingStep4 => "onboardingStep4",
            FormKind::OnboardingStep5 => "onboardingStep5",
            FormKind::OnboardingStep6 => "onboardingStep6",
            FormKind::OnboardingStep7 => "onboardingStep7",
            FormKind::JobInput => "jobInput",
            FormKind::Profile => "profile",
            FormKind::CoverLetter => "coverLetter",
            FormKind::ResumeFile => "resumeFile",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Deserializes `payload` into this form's record and validates it.
    /// The outer error means the payload did not have the form's shape at all.
    pub fn validate_json(
        self,
        payload: serde_json::Value,
    ) -> Result<Result<(), ValidationErrors>, serde_json::Error> {
        use self::auth::{ForgotPasswordForm, LoginForm, ProfileForm, RegisterForm};
        use self::documents::{CoverLetterForm, JobInputForm, ResumeFileForm};
        use self::onboarding::{
            CareerPathStep, CurrentStatusStep, ExperienceLevelStep, IndustryStep, ResumeStep,
            UserGoalsStep, UserNoteStep,
        };

        match self {
            FormKind::Login => run::<LoginForm>(payload),
            FormKind::Register => run::<RegisterForm>(payload),
            FormKind::ForgotPassword => run::<ForgotPasswordForm>(payload),
            FormKind::OnboardingStep1 => run::<CurrentStatusStep>(payload),
            FormKind::OnboardingStep2 => run::<IndustryStep>(payload),
            FormKind::OnboardingStep3 => run::<CareerPathStep>(payload),
            FormKind::OnboardingStep4 => run::<ExperienceLevelStep>(payload),
            FormKind::OnboardingStep5 => run::<ResumeStep>(payload),
            FormKind::OnboardingStep6 => run::<UserGoalsStep>(payload),
            FormKind::OnboardingStep7 => run::<UserNoteStep>(payload),
            FormKind::JobInput => run::<JobInputForm>(payload),
            FormKind::Profile => run::<ProfileForm>(payload),
            FormKind::CoverLetter => run::<CoverLetterForm>(payload),
            FormKind::ResumeFile => run::<ResumeFileForm>(payload),
        }
    }
}

fn run<T: DeserializeOwned + Validate>(
    payload: serde_json::Value,
) -> Result<Result<(), ValidationErrors>, serde_json::Error> {
    let form: T = serde_json::from_value(payload)?;
    Ok(form.validate())
}

/// The saved onboarding record must satisfy every step that carries a field of it.
impl Validate for OnboardingData {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        onboarding::check_current_status(&mut errors, &self.current_status);
        onboarding::check_industry(&mut errors, &self.industry);
        onboarding::check_career_path(&mut errors, &self.career_path);
        onboarding::check_experience_level(&mut errors, &self.experience_level);
        onboarding::check_user_goals(&mut errors, &self.user_goals);
        errors.into_result()
    }
}
