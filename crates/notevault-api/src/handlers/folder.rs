//! Folder listing and creation handlers.

use axum::Json;
use axum::extract::{Query, State};
use validator::Validate;

use notevault_core::error::AppError;
use notevault_core::path as vault_path;
use notevault_core::traits::tree::TreeProvider;
use notevault_entity::tree::{FolderItem, FolderListing};

use crate::dto::request::{FolderCreateRequest, PathQuery};
use crate::dto::response::OkPathResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/folder?path=
pub async fn get_folder(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<PathQuery>,
) -> Result<Json<FolderListing>, ApiError> {
    let path = if query.path.is_empty() {
        "/".to_string()
    } else {
        query.path
    };

    if !state.vault.is_dir(&path).await? {
        return Err(AppError::not_found("Folder not found").into());
    }

    let entries = state.vault.list_folder(&path, 1).await?;
    let items = entries
        .into_iter()
        .map(|entry| {
            let kind = if entry.is_dir { "folder" } else { "file" };
            FolderItem {
                kind: kind.to_string(),
                extension: if entry.is_dir {
                    None
                } else {
                    vault_path::extension(&entry.path)
                },
                name: entry.name,
                path: entry.path,
                is_dir: entry.is_dir,
            }
        })
        .collect();

    Ok(Json(FolderListing { path, items }))
}

/// POST /api/folder
pub async fn create_folder(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(req): Json<FolderCreateRequest>,
) -> Result<Json<OkPathResponse>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    state.vault.create_folder(&req.path).await?;
    Ok(Json(OkPathResponse::new(req.path)))
}
