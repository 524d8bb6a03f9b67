use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Largest résumé the upload path accepts: 10 MiB.
pub const MAX_RESUME_BYTES: u64 = 10 * 1024 * 1024;

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Name, size and MIME type of an uploaded file. Contents never travel with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileDescriptor {
    pub name: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub mime_type: String,
}

impl FileDescriptor {
    pub fn new(name: impl Into<String>, size: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime_type: mime_type.into(),
        }
    }
}

/// The two résumé formats the product accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeMime {
    Pdf,
    Docx,
}

impl ResumeMime {
    /// Matches the bare MIME type; parameters such as `; charset=` are ignored.
    pub fn parse(mime_type: &str) -> Option<Self> {
        let essence = mime_type.split(';').next().unwrap_or("").trim();
        if essence.eq_ignore_ascii_case(PDF_MIME) {
            Some(ResumeMime::Pdf)
        } else if essence.eq_ignore_ascii_case(DOCX_MIME) {
            Some(ResumeMime::Docx)
        } else {
            None
        }
    }
}

/// Session-local handle to an uploaded avatar.
///
/// Only meaningful inside the process that issued it and only until
/// `expires_at`. Nothing is stored behind the URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvatarRef {
    pub url: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl AvatarRef {
    #[cfg(test)]
    pub fn is_valid_at(&self, at: DateTime<Utc>) -> bool {
        at >= self.issued_at && at < self.expires_at
    }
}

/// Text the upload path hands back after "reading" a résumé.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeText {
    pub file_name: String,
    pub text: String,
}
