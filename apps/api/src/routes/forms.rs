use axum::{extract::Path, Json};
use serde::Serialize;
use serde_json::Value;

use crate::errors::AppError;
use crate::routes::{success, Success};
use crate::validation::{FormKind, ValidationErrors};

#[derive(Debug, Serialize)]
pub struct FormCheckPayload {
    pub form: &'static str,
    pub valid: bool,
    pub errors: ValidationErrors,
}

/// POST /api/v1/forms/:form/validate
///
/// Runs a named schema over the body. Field errors are a normal 200 answer;
/// only an unknown schema or a body of the wrong shape is an error.
pub async fn handle_validate_form(
    Path(form): Path<String>,
    Json(payload): Json<Value>,
) -> Result<Json<Success<FormCheckPayload>>, AppError> {
    let kind = FormKind::from_name(&form)
        .ok_or_else(|| AppError::NotFound(format!("Unknown form '{form}'")))?;

    let errors = kind
        .validate_json(payload)
        .map_err(|e| AppError::BadRequest(format!("Malformed {form} payload: {e}")))?
        .err()
        .unwrap_or_default();

    Ok(success(FormCheckPayload {
        form: kind.name(),
        valid: errors.is_empty(),
        errors,
    }))
}
