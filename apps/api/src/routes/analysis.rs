//! Axum route handlers for job input, matching, cover letters and history.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::analysis::ResumeAnalysis;
use crate::models::job::{CoverLetter, JobDescription, JobSuggestion};
use crate::routes::{success, Success};
use crate::state::AppState;
use crate::validation::documents::JobInputForm;
use crate::validation::Validate;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRequest {
    #[serde(default)]
    pub resume_text: String,
    pub job_description: JobDescription,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetterRequest {
    pub job_description: JobDescription,
    #[serde(default)]
    pub resume_text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPayload {
    pub job_description: JobDescription,
}

#[derive(Debug, Serialize)]
pub struct AnalysisPayload {
    pub analysis: ResumeAnalysis,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetterPayload {
    pub cover_letter: CoverLetter,
}

#[derive(Debug, Serialize)]
pub struct SuggestionsPayload {
    pub jobs: Vec<JobSuggestion>,
}

#[derive(Debug, Serialize)]
pub struct HistoryPayload {
    pub analyses: Vec<ResumeAnalysis>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/jobs/parse
///
/// Accepts pasted text and an optional LinkedIn URL. The returned posting is a fixture.
pub async fn handle_parse_job(
    State(state): State<AppState>,
    Json(form): Json<JobInputForm>,
) -> Result<Json<Success<JobPayload>>, AppError> {
    form.validate()?;
    let linkedin_url = form.linkedin_url.as_deref().filter(|u| !u.is_empty());
    let job_description = state
        .service
        .parse_job_description(&form.job_description, linkedin_url)
        .await?;
    Ok(success(JobPayload { job_description }))
}

/// GET /api/v1/jobs/suggestions
pub async fn handle_job_suggestions(
    State(state): State<AppState>,
) -> Result<Json<Success<SuggestionsPayload>>, AppError> {
    let jobs = state.service.get_job_suggestions().await?;
    Ok(success(SuggestionsPayload { jobs }))
}

/// POST /api/v1/analysis/match
pub async fn handle_match(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<Success<AnalysisPayload>>, AppError> {
    let analysis = state
        .service
        .get_match_score(&request.resume_text, &request.job_description)
        .await?;
    Ok(success(AnalysisPayload { analysis }))
}

/// GET /api/v1/analysis/history
pub async fn handle_history(
    State(state): State<AppState>,
) -> Result<Json<Success<HistoryPayload>>, AppError> {
    let analyses = state.service.get_analysis_history().await?;
    Ok(success(HistoryPayload { analyses }))
}

/// POST /api/v1/cover-letters
pub async fn handle_cover_letter(
    State(state): State<AppState>,
    Json(request): Json<CoverLetterRequest>,
) -> Result<Json<Success<CoverLetterPayload>>, AppError> {
    let cover_letter = state
        .service
        .generate_cover_letter(&request.job_description, &request.resume_text)
        .await?;
    Ok(success(CoverLetterPayload { cover_letter }))
}
