//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use notevault_auth::credentials::CredentialVerifier;
use notevault_auth::jwt::decoder::JwtDecoder;
use notevault_auth::jwt::encoder::JwtEncoder;
use notevault_core::config::AppConfig;
use notevault_vault::index::FileIndex;
use notevault_vault::store::FsVault;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Filesystem vault store.
    pub vault: Arc<FsVault>,
    /// Cached vault-wide Markdown file index.
    pub file_index: Arc<FileIndex>,
    /// JWT token encoder.
    pub jwt_encoder: Arc<JwtEncoder>,
    /// JWT token decoder and validator.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Shared-credential verifier.
    pub credentials: Arc<CredentialVerifier>,
}

impl AppState {
    /// Vault-relative path of the persisted vim configuration file.
    pub fn vim_config_path(&self) -> String {
        format!("/{}/config-vim.json", self.config.vault.app_dir)
    }
}
