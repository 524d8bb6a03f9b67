//! Job input, cover letter and résumé file forms.

use serde::{Deserialize, Serialize};

use super::rules::{char_len, check_resume_file, is_url, FileField, FileRejection, INVALID_URL};
use super::{Validate, ValidationErrors};

pub const JOB_DESCRIPTION_MIN: usize = 50;
pub const COVER_LETTER_MIN: usize = 100;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobInputForm {
    pub job_description: String,
    /// Empty string is treated the same as absent.
    pub linkedin_url: Option<String>,
}

impl Validate for JobInputForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check(
            char_len(&self.job_description) >= JOB_DESCRIPTION_MIN,
            "jobDescription",
            "Job description must be at least 50 characters",
        );
        if let Some(url) = self.linkedin_url.as_deref().filter(|u| !u.is_empty()) {
            errors.check(is_url(url), "linkedinUrl", INVALID_URL);
        }
        errors.into_result()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CoverLetterForm {
    pub content: String,
}

impl Validate for CoverLetterForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check(
            char_len(&self.content) >= COVER_LETTER_MIN,
            "content",
            "Cover letter must be at least 100 characters",
        );
        errors.into_result()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeFileForm {
    pub file: Option<FileField>,
}

impl Validate for ResumeFileForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let outcome = match self.file.as_ref().and_then(FileField::as_file) {
            Some(file) => check_resume_file(file).map(|_| ()),
            None => Err(FileRejection::Missing),
        };
        if let Err(rejection) = outcome {
            errors.add("file", rejection.to_string());
        }
        errors.into_result()
    }
}
