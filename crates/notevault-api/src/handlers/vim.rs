//! Vim configuration handlers.
//!
//! The configuration lives as JSON inside the vault's app directory and
//! is created on first read.

use axum::Json;
use axum::extract::State;

use notevault_core::error::{AppError, ErrorKind};
use notevault_core::traits::tree::TreeProvider;
use notevault_entity::vim::{VimConfig, VimConfigPayload};

use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/vimconfig
pub async fn get_config(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<VimConfig>, ApiError> {
    let config_path = state.vim_config_path();

    match state.vault.read_file(&config_path).await {
        Ok(content) => {
            let config: VimConfig = serde_json::from_str(&content).map_err(AppError::from)?;
            Ok(Json(config))
        }
        Err(err) if err.kind == ErrorKind::NotFound => {
            let config = VimConfig::empty_now();
            let json = serde_json::to_string_pretty(&config).map_err(AppError::from)?;
            state.vault.write_file(&config_path, &json).await?;
            Ok(Json(config))
        }
        Err(err) => Err(err.into()),
    }
}

/// POST /api/vimconfig
pub async fn save_config(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(payload): Json<VimConfigPayload>,
) -> Result<Json<VimConfig>, ApiError> {
    let config_path = state.vim_config_path();

    // Preserve createdAt from the existing file when readable.
    let created_at = match state.vault.read_file(&config_path).await {
        Ok(content) => serde_json::from_str::<VimConfig>(&content)
            .ok()
            .map(|c| c.created_at),
        Err(_) => None,
    };

    let config = payload.into_config(created_at);
    let json = serde_json::to_string_pretty(&config).map_err(AppError::from)?;
    state.vault.write_file(&config_path, &json).await?;

    Ok(Json(config))
}
