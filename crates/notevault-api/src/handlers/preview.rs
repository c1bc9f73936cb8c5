//! Preview handlers: server-rendered HTML (v1) and raw Markdown (v2).

use axum::Json;
use axum::extract::{Query, State};
use axum::response::Html;

use notevault_core::traits::tree::TreeProvider;

use crate::dto::request::{PathQuery, SearchQuery};
use crate::dto::response::MarkdownResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/preview?path=
pub async fn preview(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<PathQuery>,
) -> Result<Html<String>, ApiError> {
    let html = state.vault.render_preview(&query.path).await?;
    Ok(Html(html))
}

/// GET /api/files/search?q=
pub async fn search(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<SearchQuery>,
) -> Result<Html<String>, ApiError> {
    let html = state.vault.render_preview(&query.q).await?;
    Ok(Html(html))
}

/// GET /api/v2/file?path=
///
/// Raw Markdown instead of HTML; the client renders locally.
pub async fn file_v2(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<PathQuery>,
) -> Result<Json<MarkdownResponse>, ApiError> {
    let markdown = state.vault.read_markdown(&query.path).await?;
    Ok(Json(MarkdownResponse {
        path: query.path,
        markdown,
    }))
}

/// GET /api/v2/preview?path=
pub async fn preview_v2(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<PathQuery>,
) -> Result<Json<MarkdownResponse>, ApiError> {
    let markdown = state.vault.read_markdown(&query.path).await?;
    Ok(Json(MarkdownResponse {
        path: query.path,
        markdown,
    }))
}

/// GET /api/v2/files/search?q=
pub async fn search_v2(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<SearchQuery>,
) -> Result<Json<MarkdownResponse>, ApiError> {
    let markdown = state.vault.read_markdown(&query.q).await?;
    Ok(Json(MarkdownResponse {
        path: query.q,
        markdown,
    }))
}
