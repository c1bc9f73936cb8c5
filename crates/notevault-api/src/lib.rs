//! # notevault-api
//!
//! The NoteVault HTTP API: axum handlers, routing, DTOs, the `AuthUser`
//! extractor, and the mapping from domain errors to HTTP responses.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use state::AppState;
