//! Route definitions for the NoteVault HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let max_body = state.config.server.max_body_size_bytes as usize;

    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(tree_routes())
        .merge(folder_routes())
        .merge(file_routes())
        .merge(preview_routes())
        .merge(vim_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(max_body))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints: login
fn auth_routes() -> Router<AppState> {
    Router::new().route("/login", post(handlers::auth::login))
}

/// Tree listing and file index
fn tree_routes() -> Router<AppState> {
    Router::new()
        .route("/tree", get(handlers::tree::get_tree))
        .route("/file-index", get(handlers::index::file_index))
}

/// Folder listing and creation
fn folder_routes() -> Router<AppState> {
    Router::new()
        .route("/folder", get(handlers::folder::get_folder))
        .route("/folder", post(handlers::folder::create_folder))
}

/// File CRUD, rename, move, checkbox toggle
fn file_routes() -> Router<AppState> {
    Router::new()
        .route("/file", get(handlers::file::get_file))
        .route("/file", put(handlers::file::put_file))
        .route("/file", post(handlers::file::post_file))
        .route("/file", delete(handlers::file::delete))
        .route("/file/rename", post(handlers::file::rename))
        .route("/file/move", post(handlers::file::move_entry))
        .route(
            "/file/toggle-checkbox",
            post(handlers::file::toggle_checkbox),
        )
}

/// Preview and search, server-rendered (v1) and raw Markdown (v2)
fn preview_routes() -> Router<AppState> {
    Router::new()
        .route("/preview", get(handlers::preview::preview))
        .route("/files/search", get(handlers::preview::search))
        .route("/v2/file", get(handlers::preview::file_v2))
        .route("/v2/preview", get(handlers::preview::preview_v2))
        .route("/v2/files/search", get(handlers::preview::search_v2))
}

/// Vim configuration endpoints
fn vim_routes() -> Router<AppState> {
    Router::new()
        .route("/vimconfig", get(handlers::vim::get_config))
        .route("/vimconfig", post(handlers::vim::save_config))
}

/// Health check endpoints (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}

/// Build CORS layer from configuration
fn build_cors_layer(state: &AppState) -> CorsLayer {
    let cors_config = &state.config.server.cors;

    let mut cors = CorsLayer::new().allow_headers(Any);

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    let methods: Vec<Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(methods);

    cors = cors.max_age(std::time::Duration::from_secs(cors_config.max_age_seconds));

    cors
}
