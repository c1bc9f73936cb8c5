//! Optimistic structural mutations reconciled against the provider.
//!
//! Every mutation follows one protocol: record a pre-image of the
//! affected cache listings, apply the local edit, call the provider, and
//! on rejection restore the pre-image. Accepted mutations then refresh
//! the authoritative listings they touched.

use std::sync::Arc;

use tracing::{debug, warn};

use notevault_core::error::AppError;
use notevault_core::path as vault_path;
use notevault_core::result::AppResult;
use notevault_core::traits::tree::TreeProvider;

use crate::sync::TreeSynchronizer;

/// Applies user-initiated structural changes to the tree.
#[derive(Debug, Clone)]
pub struct MutationCoordinator {
    sync: Arc<TreeSynchronizer>,
    provider: Arc<dyn TreeProvider>,
}

impl MutationCoordinator {
    /// Create a coordinator over the given synchronizer and provider.
    pub fn new(sync: Arc<TreeSynchronizer>, provider: Arc<dyn TreeProvider>) -> Self {
        Self { sync, provider }
    }

    /// Rename an entry, keeping its parent folder and file extension.
    ///
    /// The cache is updated optimistically and rolled back if the server
    /// rejects the rename. Returns the new path; when the renamed entry
    /// is the currently-open file, the caller re-navigates to it.
    pub async fn rename(&self, old_path: &str, new_name: &str) -> AppResult<String> {
        let old_path = vault_path::normalize(old_path);
        let parent = vault_path::parent(&old_path);

        let pre_image = self.sync.pre_image([parent.as_str(), "/"]).await;
        let new_path = self.sync.apply_rename(&old_path, new_name).await;

        match self.provider.rename_entry(&old_path, &new_path).await {
            Ok(()) => {
                debug!(old = old_path, new = new_path, "Renamed entry");
                Ok(new_path)
            }
            Err(err) => {
                warn!(old = old_path, error = %err, "Rename rejected, rolling back");
                self.sync.restore(pre_image).await;
                Err(err)
            }
        }
    }

    /// Move an entry under a new parent folder (drag-and-drop).
    ///
    /// A move into the source itself or one of its descendants is
    /// rejected locally, before any provider call. On acceptance both
    /// affected listings are refreshed; on rejection the optimistic edit
    /// is rolled back and the root listing refreshed to discard any
    /// inconsistent state.
    pub async fn move_entry(&self, source_path: &str, destination_parent: &str) -> AppResult<()> {
        let source = vault_path::normalize(source_path);
        let dest_parent = vault_path::normalize(destination_parent);

        if vault_path::is_same_or_descendant(&source, &dest_parent) {
            return Err(AppError::conflict(format!(
                "Cannot move {source} into itself or its own subtree"
            )));
        }

        let former_parent = vault_path::parent(&source);
        let new_name = vault_path::file_name(&source);

        let pre_image = self
            .sync
            .pre_image([former_parent.as_str(), dest_parent.as_str(), "/"])
            .await;
        self.sync.apply_move(&source, &dest_parent).await;

        match self
            .provider
            .move_entry(&source, &dest_parent, &new_name)
            .await
        {
            Ok(()) => {
                debug!(source, dest = dest_parent, "Moved entry");
                self.sync.refresh_path(&former_parent).await?;
                if dest_parent != former_parent {
                    self.sync.refresh_path(&dest_parent).await?;
                }
                Ok(())
            }
            Err(err) => {
                warn!(source, error = %err, "Move rejected, rolling back");
                self.sync.restore(pre_image).await;
                if let Err(refresh_err) = self.sync.refresh_path("/").await {
                    warn!(error = %refresh_err, "Root refresh after failed move failed");
                }
                Err(err)
            }
        }
    }

    /// Create a file inside a folder and refresh that folder so the
    /// entry appears with the authoritative path (the server may append
    /// an extension). Returns the final path.
    pub async fn create_file(
        &self,
        parent_path: &str,
        name: &str,
        content: &str,
    ) -> AppResult<String> {
        let target = vault_path::join(parent_path, name);
        let final_path = self.provider.create_file(&target, content).await?;

        self.sync.refresh_path(parent_path).await?;
        debug!(path = final_path, "Created file");
        Ok(final_path)
    }

    /// Create a folder and refresh its parent listing. Returns the new
    /// folder's path.
    pub async fn create_folder(&self, parent_path: &str, name: &str) -> AppResult<String> {
        let target = vault_path::join(parent_path, name);
        self.provider.create_folder(&target).await?;

        self.sync.refresh_path(parent_path).await?;
        debug!(path = target, "Created folder");
        Ok(target)
    }

    /// Delete an entry (recursively for folders) and refresh its parent
    /// listing.
    ///
    /// When the deleted path is the current selection or an ancestor of
    /// it, the path the caller must navigate to (the deleted entry's
    /// parent) is returned.
    pub async fn delete(&self, path: &str) -> AppResult<Option<String>> {
        let path = vault_path::normalize(path);
        self.provider.delete_entry(&path).await?;

        let parent = vault_path::parent(&path);
        self.sync.refresh_path(&parent).await?;
        debug!(path, "Deleted entry");

        let navigate_to = match self.sync.selected().await {
            Some(selected) if vault_path::is_same_or_descendant(&path, &selected) => {
                self.sync.clear_selection().await;
                Some(parent)
            }
            _ => None,
        };
        Ok(navigate_to)
    }
}
