pub mod analysis;
pub mod auth;
pub mod forms;
pub mod health;
pub mod profile;
pub mod uploads;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, patch, post},
    Json, Router,
};
use serde::Serialize;

use crate::models::file::MAX_RESUME_BYTES;
use crate::state::AppState;

/// Upload bodies may exceed the résumé limit by this much multipart overhead,
/// so an oversized file still reaches the size rule and gets its message.
const MULTIPART_OVERHEAD: usize = 1024 * 1024;
const UPLOAD_BODY_LIMIT: usize = MAX_RESUME_BYTES as usize + MULTIPART_OVERHEAD;

/// `{ "success": true, ...payload }`
#[derive(Debug, Serialize)]
pub struct Success<T: Serialize> {
    success: bool,
    #[serde(flatten)]
    payload: T,
}

pub fn success<T: Serialize>(payload: T) -> Json<Success<T>> {
    Json(Success {
        success: true,
        payload,
    })
}

pub fn build_router(state: AppState) -> Router {
    let uploads = Router::new()
        .route("/api/v1/resumes/upload", post(uploads::handle_upload_resume))
        .route("/api/v1/profile/avatar", post(uploads::handle_upload_avatar))
        .layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT));

    Router::new()
        .route("/health", get(health::health_handler))
        // Auth
        .route("/api/v1/auth/login", post(auth::handle_login))
        .route("/api/v1/auth/register", post(auth::handle_register))
        .route(
            "/api/v1/auth/reset-password",
            post(auth::handle_reset_password),
        )
        // Onboarding & profile
        .route("/api/v1/onboarding", post(profile::handle_save_onboarding))
        .route("/api/v1/profile", patch(profile::handle_update_profile))
        // Jobs & analysis
        .route("/api/v1/jobs/parse", post(analysis::handle_parse_job))
        .route(
            "/api/v1/jobs/suggestions",
            get(analysis::handle_job_suggestions),
        )
        .route("/api/v1/analysis/match", post(analysis::handle_match))
        .route("/api/v1/analysis/history", get(analysis::handle_history))
        .route("/api/v1/cover-letters", post(analysis::handle_cover_letter))
        // Form schemas
        .route(
            "/api/v1/forms/:form/validate",
            post(forms::handle_validate_form),
        )
        .merge(uploads)
        .with_state(state)
}
