//! Response DTOs.
//!
//! Shapes match the web client's expectations, so wire names are
//! camelCase and bodies are bare objects rather than envelope-wrapped.

use serde::{Deserialize, Serialize};

/// Login response carrying the bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Signed JWT.
    pub token: String,
}

/// Minimal success acknowledgement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OkResponse {
    /// Always `true`.
    pub ok: bool,
}

impl OkResponse {
    /// The canonical `{ "ok": true }` body.
    pub fn new() -> Self {
        Self { ok: true }
    }
}

impl Default for OkResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// Acknowledgement carrying the affected path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OkPathResponse {
    /// Always `true`.
    pub ok: bool,
    /// The affected vault path (for create, the final server-side path).
    pub path: String,
}

impl OkPathResponse {
    /// Success acknowledgement for `path`.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            ok: true,
            path: path.into(),
        }
    }
}

/// Acknowledgement of a rename.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameResponse {
    /// Always `true`.
    pub ok: bool,
    /// The previous vault path.
    pub old_path: String,
    /// The new vault path.
    pub new_path: String,
}

/// File content response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileResponse {
    /// The requested vault path.
    pub path: String,
    /// File content.
    pub content: String,
}

/// Raw Markdown response (v2 API: the client renders locally).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkdownResponse {
    /// The requested vault path.
    pub path: String,
    /// Raw Markdown content.
    pub markdown: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `"ok"` when the server is up.
    pub status: String,
    /// Crate version.
    pub version: String,
}
