//! Axum route handlers for sign-in, sign-up and password reset.

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::user::User;
use crate::routes::{success, Success};
use crate::state::AppState;
use crate::validation::auth::{ForgotPasswordForm, LoginForm, RegisterForm};
use crate::validation::Validate;

#[derive(Debug, Serialize)]
pub struct UserPayload {
    pub user: User,
}

#[derive(Debug, Serialize)]
pub struct MessagePayload {
    pub message: String,
}

/// POST /api/v1/auth/login
pub async fn handle_login(
    State(state): State<AppState>,
    Json(form): Json<LoginForm>,
) -> Result<Json<Success<UserPayload>>, AppError> {
    form.validate()?;
    let user = state.service.login(&form.email, &form.password).await?;
    Ok(success(UserPayload { user }))
}

/// POST /api/v1/auth/register
pub async fn handle_register(
    State(state): State<AppState>,
    Json(form): Json<RegisterForm>,
) -> Result<Json<Success<UserPayload>>, AppError> {
    form.validate()?;
    let user = state
        .service
        .register(&form.email, &form.password, &form.full_name)
        .await?;
    info!(user_id = %user.id, "Registration complete");
    Ok(success(UserPayload { user }))
}

/// POST /api/v1/auth/reset-password
pub async fn handle_reset_password(
    State(state): State<AppState>,
    Json(form): Json<ForgotPasswordForm>,
) -> Result<Json<Success<MessagePayload>>, AppError> {
    form.validate()?;
    let message = state.service.reset_password(&form.email).await?;
    Ok(success(MessagePayload { message }))
}
