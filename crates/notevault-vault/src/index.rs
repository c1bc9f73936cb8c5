//! Vault-wide Markdown file index with a TTL cache.
//!
//! Scanning the whole vault on every request would hit the disk for each
//! quick-switcher keystroke, so the flattened index is cached and only
//! rebuilt after the TTL expires.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use tracing::debug;

use notevault_core::error::{AppError, ErrorKind};
use notevault_core::result::AppResult;
use notevault_entity::tree::FileIndexEntry;

use crate::paths;
use crate::store::FsVault;

const INDEX_KEY: &str = "vault_file_index";

/// Cached index of every `.md` file in the vault.
#[derive(Debug, Clone)]
pub struct FileIndex {
    /// The vault to scan.
    vault: FsVault,
    /// Single-entry TTL cache holding the flattened index.
    cache: Cache<String, Arc<Vec<FileIndexEntry>>>,
}

impl FileIndex {
    /// Create an index over the given vault with the given TTL.
    pub fn new(vault: FsVault, ttl_seconds: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(1)
            .time_to_live(Duration::from_secs(ttl_seconds))
            .build();
        Self { vault, cache }
    }

    /// Return the index, rebuilding it when the cached copy has expired.
    pub async fn get(&self) -> AppResult<Arc<Vec<FileIndexEntry>>> {
        let vault = self.vault.clone();
        self.cache
            .try_get_with(INDEX_KEY.to_string(), async move {
                let entries = scan(&vault).await?;
                debug!(files = entries.len(), "Rebuilt vault file index");
                Ok::<_, AppError>(Arc::new(entries))
            })
            .await
            .map_err(|e: Arc<AppError>| (*e).clone())
    }
}

/// Walk the vault collecting every Markdown file.
async fn scan(vault: &FsVault) -> AppResult<Vec<FileIndexEntry>> {
    let mut entries = Vec::new();
    let mut stack: Vec<(PathBuf, String)> = vec![(vault.root().to_path_buf(), "/".to_string())];

    while let Some((dir, folder_path)) = stack.pop() {
        let mut reader = tokio::fs::read_dir(&dir).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to scan folder: {folder_path}"),
                e,
            )
        })?;

        while let Some(entry) = reader.next_entry().await.map_err(|e| {
            AppError::with_source(ErrorKind::Storage, "Failed to read directory entry", e)
        })? {
            let meta = entry.metadata().await.map_err(|e| {
                AppError::with_source(ErrorKind::Storage, "Failed to get entry metadata", e)
            })?;

            let name = entry.file_name().to_string_lossy().to_string();
            let entry_path = paths::child_path(&folder_path, &name);

            if meta.is_dir() {
                stack.push((entry.path(), entry_path));
            } else if name.to_lowercase().ends_with(".md") {
                let file_name = name[..name.len() - 3].to_string();
                entries.push(FileIndexEntry {
                    file_name,
                    file_path: entry_path,
                });
            }
        }
    }

    entries.sort_by(|a, b| a.file_path.cmp(&b.file_path));
    Ok(entries)
}
