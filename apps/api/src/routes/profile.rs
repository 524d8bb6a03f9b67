//! Onboarding and profile handlers. Both acknowledge without returning data.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::models::onboarding::OnboardingData;
use crate::models::user::ProfileUpdate;
use crate::routes::{success, Success};
use crate::state::AppState;
use crate::validation::Validate;

/// POST /api/v1/onboarding
pub async fn handle_save_onboarding(
    State(state): State<AppState>,
    Json(data): Json<OnboardingData>,
) -> Result<Json<Success<()>>, AppError> {
    data.validate()?;
    state.service.save_onboarding_data(&data).await?;
    Ok(success(()))
}

/// PATCH /api/v1/profile
///
/// The UI keeps its own copy of the user; nothing updated is sent back.
pub async fn handle_update_profile(
    State(state): State<AppState>,
    Json(update): Json<ProfileUpdate>,
) -> Result<Json<Success<()>>, AppError> {
    update.validate()?;
    state.service.update_profile(&update).await?;
    Ok(success(()))
}
