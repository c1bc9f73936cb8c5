//! Vim editor configuration stored inside the vault.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Persisted vim-mode editor configuration.
///
/// Stored as JSON at `<app_dir>/config-vim.json` inside the vault. The
/// mapping entries are opaque to the server; only the editor widget
/// interprets them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VimConfig {
    /// Custom key mappings.
    #[serde(default)]
    pub key_mappings: Vec<serde_json::Value>,
    /// Custom ex commands.
    #[serde(default)]
    pub ex_commands: Vec<serde_json::Value>,
    /// Keys excluded from vim handling.
    #[serde(default)]
    pub unmapped_keys: Vec<serde_json::Value>,
    /// Creation timestamp, preserved across saves.
    pub created_at: DateTime<Utc>,
    /// Last-save timestamp.
    pub updated_at: DateTime<Utc>,
}

impl VimConfig {
    /// An empty configuration stamped with the current time.
    pub fn empty_now() -> Self {
        let now = Utc::now();
        Self {
            key_mappings: Vec::new(),
            ex_commands: Vec::new(),
            unmapped_keys: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Incoming vim configuration payload, without timestamps.
///
/// On save, `created_at` is taken from the existing file when present and
/// `updated_at` is refreshed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VimConfigPayload {
    /// Custom key mappings.
    #[serde(default)]
    pub key_mappings: Vec<serde_json::Value>,
    /// Custom ex commands.
    #[serde(default)]
    pub ex_commands: Vec<serde_json::Value>,
    /// Keys excluded from vim handling.
    #[serde(default)]
    pub unmapped_keys: Vec<serde_json::Value>,
}

impl VimConfigPayload {
    /// Stamp the payload into a persistable config.
    pub fn into_config(self, created_at: Option<DateTime<Utc>>) -> VimConfig {
        let now = Utc::now();
        VimConfig {
            key_mappings: self.key_mappings,
            ex_commands: self.ex_commands,
            unmapped_keys: self.unmapped_keys,
            created_at: created_at.unwrap_or(now),
            updated_at: now,
        }
    }
}
