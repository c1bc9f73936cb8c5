//! Auth handlers — login against the shared credential.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use notevault_core::error::AppError;

use crate::dto::request::LoginRequest;
use crate::dto::response::LoginResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    state.credentials.verify(&req.username, &req.password)?;
    let token = state.jwt_encoder.generate_token(&req.username)?;

    tracing::info!(username = %req.username, "Login succeeded");
    Ok(Json(LoginResponse { token }))
}
