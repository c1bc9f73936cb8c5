//! File CRUD, rename, move, and checkbox handlers.

use axum::Json;
use axum::extract::{Query, State};
use validator::Validate;

use notevault_core::error::AppError;
use notevault_core::path as vault_path;
use notevault_core::traits::tree::TreeProvider;

use crate::dto::request::{
    FileWriteRequest, MoveRequest, PathQuery, RenameRequest, ToggleCheckboxRequest,
};
use crate::dto::response::{FileResponse, OkPathResponse, OkResponse, RenameResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/file?path=
pub async fn get_file(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<PathQuery>,
) -> Result<Json<FileResponse>, ApiError> {
    let content = state.vault.read_file(&query.path).await?;
    Ok(Json(FileResponse {
        path: query.path,
        content,
    }))
}

/// PUT /api/file
pub async fn put_file(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(req): Json<FileWriteRequest>,
) -> Result<Json<OkResponse>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    state
        .vault
        .write_file(&req.path, req.content.as_deref().unwrap_or_default())
        .await?;
    Ok(Json(OkResponse::new()))
}

/// POST /api/file
pub async fn post_file(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(req): Json<FileWriteRequest>,
) -> Result<Json<OkPathResponse>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let final_path = state
        .vault
        .create_file(&req.path, req.content.as_deref().unwrap_or_default())
        .await?;
    Ok(Json(OkPathResponse::new(final_path)))
}

/// POST /api/file/rename
pub async fn rename(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(req): Json<RenameRequest>,
) -> Result<Json<RenameResponse>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    state.vault.rename_entry(&req.old_path, &req.new_path).await?;
    Ok(Json(RenameResponse {
        ok: true,
        old_path: req.old_path,
        new_path: req.new_path,
    }))
}

/// POST /api/file/move
pub async fn move_entry(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(req): Json<MoveRequest>,
) -> Result<Json<OkPathResponse>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    state
        .vault
        .move_entry(&req.source_path, &req.destination_parent_path, &req.new_name)
        .await?;

    let destination = vault_path::join(&req.destination_parent_path, &req.new_name);
    Ok(Json(OkPathResponse::new(destination)))
}

/// DELETE /api/file?path=
pub async fn delete(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<PathQuery>,
) -> Result<Json<OkPathResponse>, ApiError> {
    state.vault.delete_entry(&query.path).await?;
    Ok(Json(OkPathResponse::new(query.path)))
}

/// POST /api/file/toggle-checkbox
pub async fn toggle_checkbox(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(req): Json<ToggleCheckboxRequest>,
) -> Result<Json<OkResponse>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    state
        .vault
        .toggle_checkbox(&req.path, &req.checkbox_text)
        .await?;
    Ok(Json(OkResponse::new()))
}
