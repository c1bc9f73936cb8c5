//! Filesystem vault store.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use notevault_core::error::{AppError, ErrorKind};
use notevault_core::path as vault_path;
use notevault_core::result::AppResult;
use notevault_core::traits::tree::{TreeEntry, TreeProvider};

use crate::checkbox;
use crate::markdown;
use crate::paths;

/// Filesystem-backed vault rooted at a single directory.
#[derive(Debug, Clone)]
pub struct FsVault {
    /// Root directory of the vault.
    root: PathBuf,
}

impl FsVault {
    /// Create a new vault rooted at the given path, creating the
    /// directory if it does not exist.
    pub async fn new(root_path: &str) -> AppResult<Self> {
        let root = PathBuf::from(root_path);
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create vault root: {}", root.display()),
                e,
            )
        })?;
        Ok(Self { root })
    }

    /// The vault root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a vault-relative path to an absolute path inside the root.
    fn resolve(&self, path: &str) -> AppResult<PathBuf> {
        paths::resolve(&self.root, path)
    }

    /// Ensure the parent directory of a path exists.
    async fn ensure_parent(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to create parent directory: {}", parent.display()),
                    e,
                )
            })?;
        }
        Ok(())
    }

    /// Write content through a temp file and rename it into place, so a
    /// concurrent reader never observes a partial write.
    async fn atomic_write(&self, full_path: &Path, content: &str) -> AppResult<()> {
        self.ensure_parent(full_path).await?;

        let mut tmp = full_path.as_os_str().to_owned();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, content).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write temp file: {}", tmp.display()),
                e,
            )
        })?;

        fs::rename(&tmp, full_path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to move temp file into place: {}", full_path.display()),
                e,
            )
        })?;

        Ok(())
    }

    /// Whether anything exists at the given vault path.
    pub async fn exists(&self, path: &str) -> AppResult<bool> {
        let full = self.resolve(path)?;
        Ok(fs::try_exists(&full).await.unwrap_or(false))
    }

    /// Whether the given vault path is an existing directory.
    pub async fn is_dir(&self, path: &str) -> AppResult<bool> {
        let full = self.resolve(path)?;
        match fs::metadata(&full).await {
            Ok(meta) => Ok(meta.is_dir()),
            Err(_) => Ok(false),
        }
    }

    /// Toggle a task-list checkbox on the first line matching
    /// `checkbox_text`, rewriting the file atomically.
    pub async fn toggle_checkbox(&self, path: &str, checkbox_text: &str) -> AppResult<()> {
        let content = self.read_file(path).await?;
        let updated = checkbox::toggle(&content, checkbox_text).ok_or_else(|| {
            AppError::not_found(format!("No matching checkbox in file: {path}"))
        })?;
        let full = self.resolve(path)?;
        self.atomic_write(&full, &updated).await?;
        debug!(path, "Toggled checkbox");
        Ok(())
    }

    /// Recursively list a directory into tree entries up to `depth`
    /// further levels.
    fn list_recursive<'a>(
        &'a self,
        full_path: PathBuf,
        folder_path: String,
        depth: u32,
    ) -> Pin<Box<dyn Future<Output = AppResult<Vec<TreeEntry>>> + Send + 'a>> {
        Box::pin(async move {
            let mut entries = Vec::new();
            let mut dir = fs::read_dir(&full_path).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to list folder: {folder_path}"),
                    e,
                )
            })?;

            while let Some(entry) = dir.next_entry().await.map_err(|e| {
                AppError::with_source(ErrorKind::Storage, "Failed to read directory entry", e)
            })? {
                let meta = entry.metadata().await.map_err(|e| {
                    AppError::with_source(ErrorKind::Storage, "Failed to get entry metadata", e)
                })?;

                let name = entry.file_name().to_string_lossy().to_string();
                let entry_path = paths::child_path(&folder_path, &name);

                let children = if meta.is_dir() && depth > 1 {
                    Some(
                        self.list_recursive(entry.path(), entry_path.clone(), depth - 1)
                            .await?,
                    )
                } else {
                    None
                };

                entries.push(TreeEntry {
                    path: entry_path,
                    name,
                    is_dir: meta.is_dir(),
                    children,
                });
            }

            entries.sort_by(|a, b| {
                b.is_dir
                    .cmp(&a.is_dir)
                    .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
            });

            Ok(entries)
        })
    }
}

#[async_trait]
impl TreeProvider for FsVault {
    async fn list_folder(&self, path: &str, depth: u32) -> AppResult<Vec<TreeEntry>> {
        let full = self.resolve(path)?;

        // Listing a folder that does not exist yields an empty result
        // rather than an error.
        match fs::metadata(&full).await {
            Ok(meta) if meta.is_dir() => {}
            _ => return Ok(Vec::new()),
        }

        let folder_path = vault_path::normalize(path);
        self.list_recursive(full, folder_path, depth.max(1)).await
    }

    async fn read_file(&self, path: &str) -> AppResult<String> {
        let full = self.resolve(path)?;

        if full.is_dir() {
            return Err(AppError::validation(format!(
                "Path is a directory, not a file: {path}"
            )));
        }

        fs::read_to_string(&full).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::not_found(format!("File not found: {path}"))
            } else {
                AppError::with_source(ErrorKind::Storage, format!("Failed to read file: {path}"), e)
            }
        })
    }

    async fn write_file(&self, path: &str, content: &str) -> AppResult<()> {
        let full = self.resolve(path)?;
        self.atomic_write(&full, content).await?;
        debug!(path, bytes = content.len(), "Wrote file");
        Ok(())
    }

    async fn create_file(&self, path: &str, content: &str) -> AppResult<String> {
        let mut final_path = vault_path::normalize(path);
        if !final_path.to_lowercase().ends_with(".md") {
            final_path.push_str(".md");
        }

        let full = self.resolve(&final_path)?;
        if fs::try_exists(&full).await.unwrap_or(false) {
            return Err(AppError::conflict(format!("File already exists: {final_path}")));
        }

        self.atomic_write(&full, content).await?;
        debug!(path = final_path, "Created file");
        Ok(final_path)
    }

    async fn create_folder(&self, path: &str) -> AppResult<()> {
        let full = self.resolve(path)?;
        if fs::try_exists(&full).await.unwrap_or(false) {
            return Err(AppError::conflict(format!("Folder already exists: {path}")));
        }

        fs::create_dir_all(&full).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create folder: {path}"),
                e,
            )
        })?;
        debug!(path, "Created folder");
        Ok(())
    }

    async fn rename_entry(&self, old_path: &str, new_path: &str) -> AppResult<()> {
        let old_full = self.resolve(old_path)?;
        let new_full = self.resolve(new_path)?;

        if !fs::try_exists(&old_full).await.unwrap_or(false) {
            return Err(AppError::not_found(format!(
                "Source file or folder not found: {old_path}"
            )));
        }

        self.ensure_parent(&new_full).await?;
        fs::rename(&old_full, &new_full).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to rename {old_path} -> {new_path}"),
                e,
            )
        })?;
        debug!(old_path, new_path, "Renamed entry");
        Ok(())
    }

    async fn move_entry(
        &self,
        source_path: &str,
        destination_parent_path: &str,
        new_name: &str,
    ) -> AppResult<()> {
        let source = vault_path::normalize(source_path);
        let dest_parent = vault_path::normalize(destination_parent_path);

        if vault_path::is_same_or_descendant(&source, &dest_parent) {
            return Err(AppError::conflict(format!(
                "Cannot move {source} into itself or its own subtree"
            )));
        }

        let destination = vault_path::join(&dest_parent, new_name);
        let dest_full = self.resolve(&destination)?;
        if fs::try_exists(&dest_full).await.unwrap_or(false) {
            return Err(AppError::conflict(format!(
                "Destination already exists: {destination}"
            )));
        }

        self.rename_entry(&source, &destination).await
    }

    async fn delete_entry(&self, path: &str) -> AppResult<()> {
        let full = self.resolve(path)?;

        let meta = fs::metadata(&full).await.map_err(|_| {
            AppError::not_found(format!("File or folder not found: {path}"))
        })?;

        if meta.is_dir() {
            fs::remove_dir_all(&full).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to delete folder: {path}"),
                    e,
                )
            })?;
        } else {
            fs::remove_file(&full).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to delete file: {path}"),
                    e,
                )
            })?;
        }
        debug!(path, "Deleted entry");
        Ok(())
    }

    async fn read_markdown(&self, path: &str) -> AppResult<String> {
        self.read_file(path).await
    }

    async fn render_preview(&self, path: &str) -> AppResult<String> {
        let md = self.read_file(path).await?;
        Ok(markdown::render_page(&md))
    }
}
