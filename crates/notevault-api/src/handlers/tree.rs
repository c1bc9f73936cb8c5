//! Tree listing handler.

use axum::Json;
use axum::extract::{Query, State};

use notevault_core::traits::tree::{TreeEntry, TreeProvider};

use crate::dto::request::TreeQuery;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/tree?path=&depth=
///
/// Lists a folder, optionally including nested children up to `depth`
/// levels (1 = only this folder). A folder that does not exist yields an
/// empty array.
pub async fn get_tree(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<TreeQuery>,
) -> Result<Json<Vec<TreeEntry>>, ApiError> {
    let path = query.path.unwrap_or_else(|| "/".to_string());
    let depth = query.depth.unwrap_or(1).max(1);

    let entries = state.vault.list_folder(&path, depth).await?;
    Ok(Json(entries))
}
