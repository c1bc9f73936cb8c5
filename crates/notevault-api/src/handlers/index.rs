//! Vault-wide file index handler.

use axum::Json;
use axum::extract::State;

use notevault_entity::tree::FileIndexEntry;

use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/file-index
///
/// Flat list of every Markdown file in the vault, served from a TTL
/// cache so the quick switcher does not rescan the disk per request.
pub async fn file_index(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<Vec<FileIndexEntry>>, ApiError> {
    let entries = state.file_index.get().await?;
    Ok(Json(entries.as_ref().clone()))
}
