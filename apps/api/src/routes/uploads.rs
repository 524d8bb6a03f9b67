//! Multipart upload handlers. Only the file's name, size and MIME type are
//! kept; the bytes are counted chunk by chunk and dropped.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::file::{AvatarRef, FileDescriptor, ResumeText};
use crate::routes::{success, Success};
use crate::state::AppState;
use crate::validation::rules::FileRejection;
use crate::validation::ValidationErrors;

/// Multipart field the UI puts the file under.
pub const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct ResumePayload {
    pub resume: ResumeText,
}

#[derive(Debug, Serialize)]
pub struct AvatarPayload {
    pub avatar: AvatarRef,
}

/// Reads the `file` part of a multipart body into a `FileDescriptor`.
async fn read_file_field(mut multipart: Multipart) -> Result<FileDescriptor, AppError> {
    while let Some(mut field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let name = field.file_name().unwrap_or("upload").to_string();
        let mime_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let mut size = 0u64;
        while let Some(chunk) = field.chunk().await? {
            size += chunk.len() as u64;
        }
        return Ok(FileDescriptor::new(name, size, mime_type));
    }

    let mut errors = ValidationErrors::new();
    errors.add(FILE_FIELD, FileRejection::Missing.to_string());
    Err(AppError::Validation(errors))
}

/// POST /api/v1/resumes/upload
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<Success<ResumePayload>>, AppError> {
    let file = read_file_field(multipart).await?;
    info!(file = %file.name, size = file.size, "Resume upload received");
    let resume = state.service.upload_resume(&file).await?;
    Ok(success(ResumePayload { resume }))
}

/// POST /api/v1/profile/avatar
pub async fn handle_upload_avatar(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<Success<AvatarPayload>>, AppError> {
    let file = read_file_field(multipart).await?;
    let avatar = state.service.upload_avatar(&file).await?;
    Ok(success(AvatarPayload { avatar }))
}
