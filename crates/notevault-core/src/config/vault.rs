//! Vault (note storage) configuration.

use serde::{Deserialize, Serialize};

/// Vault configuration: where notes live on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaultConfig {
    /// Root directory holding the Markdown vault.
    #[serde(default = "default_root")]
    pub root: String,
    /// Name of the hidden directory inside the vault used for
    /// application data (vim config and similar).
    #[serde(default = "default_app_dir")]
    pub app_dir: String,
    /// TTL for the cached vault-wide file index, in seconds.
    #[serde(default = "default_index_ttl")]
    pub index_ttl_seconds: u64,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            app_dir: default_app_dir(),
            index_ttl_seconds: default_index_ttl(),
        }
    }
}

fn default_root() -> String {
    "/vault".to_string()
}

fn default_app_dir() -> String {
    ".notevault".to_string()
}

fn default_index_ttl() -> u64 {
    600
}
