//! Field-level checks shared by every form.

use std::sync::OnceLock;

use regex::Regex;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::models::file::{FileDescriptor, ResumeMime, MAX_RESUME_BYTES};

pub const INVALID_EMAIL: &str = "Please enter a valid email address";
pub const INVALID_URL: &str = "Please enter a valid URL";

fn re_email() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap())
}

pub fn is_email(value: &str) -> bool {
    re_email().is_match(value)
}

/// Absolute URL with a host. `https://linkedin.com/jobs/1` passes, `linkedin.com` does not.
pub fn is_url(value: &str) -> bool {
    Url::parse(value).map(|u| u.has_host()).unwrap_or(false)
}

/// Length in characters, not bytes, so accented names count the way users see them.
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Why a résumé file was refused. Display strings are shown to the user verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FileRejection {
    #[error("Please select a file")]
    Missing,

    #[error("File size must be less than 10MB")]
    TooLarge,

    #[error("Only PDF and DOCX files are allowed")]
    UnsupportedType,
}

/// The single résumé-file rule used by both the `resumeFile` form and the upload path.
/// Size is checked before type.
pub fn check_resume_file(file: &FileDescriptor) -> Result<ResumeMime, FileRejection> {
    if file.size > MAX_RESUME_BYTES {
        return Err(FileRejection::TooLarge);
    }
    ResumeMime::parse(&file.mime_type).ok_or(FileRejection::UnsupportedType)
}

/// A form slot that is supposed to hold a file.
///
/// Values without the shape of a `FileDescriptor` land in `Other` so the form
/// reports them as a field error rather than failing to deserialize.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FileField {
    File(FileDescriptor),
    Other(serde_json::Value),
}

impl FileField {
    pub fn as_file(&self) -> Option<&FileDescriptor> {
        match self {
            FileField::File(file) => Some(file),
            FileField::Other(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::file::{DOCX_MIME, PDF_MIME};
    use serde_json::json;

    #[test]
    fn test_email_accepts_common_addresses() {
        assert!(is_email("demo@hiremate.me"));
        assert!(is_email("first.last+tag@sub.example.co.uk"));
    }

    #[test]
    fn test_email_rejects_malformed() {
        for bad in ["", "plain", "a@b", "@example.com", "a b@example.com", "a@@b.com"] {
            assert!(!is_email(bad), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn test_url_requires_scheme_and_host() {
        assert!(is_url("https://www.linkedin.com/jobs/view/123"));
        assert!(is_url("http://localhost:3000"));
        assert!(!is_url("linkedin.com/jobs"));
        assert!(!is_url("not a url"));
        assert!(!is_url(""));
    }

    #[test]
    fn test_char_len_counts_characters() {
        assert_eq!(char_len("Zoë"), 3);
        assert_eq!(char_len(""), 0);
    }

    #[test]
    fn test_resume_file_limit_is_inclusive() {
        let at_limit = FileDescriptor::new("cv.pdf", MAX_RESUME_BYTES, PDF_MIME);
        assert_eq!(check_resume_file(&at_limit), Ok(ResumeMime::Pdf));

        let over = FileDescriptor::new("cv.pdf", MAX_RESUME_BYTES + 1, PDF_MIME);
        assert_eq!(check_resume_file(&over), Err(FileRejection::TooLarge));
    }

    #[test]
    fn test_resume_file_type_check() {
        let docx = FileDescriptor::new("cv.docx", 2048, DOCX_MIME);
        assert_eq!(check_resume_file(&docx), Ok(ResumeMime::Docx));

        let png = FileDescriptor::new("cv.png", 2048, "image/png");
        assert_eq!(check_resume_file(&png), Err(FileRejection::UnsupportedType));
    }

    #[test]
    fn test_size_reported_before_type() {
        let both = FileDescriptor::new("cv.png", MAX_RESUME_BYTES * 2, "image/png");
        assert_eq!(check_resume_file(&both), Err(FileRejection::TooLarge));
    }

    #[test]
    fn test_file_field_keeps_non_file_values() {
        let file: FileField =
            serde_json::from_value(json!({"name": "cv.pdf", "size": 10, "type": PDF_MIME}))
                .unwrap();
        assert!(file.as_file().is_some());

        let other: FileField = serde_json::from_value(json!("C:\\fakepath\\cv.pdf")).unwrap();
        assert!(other.as_file().is_none());
    }
}
