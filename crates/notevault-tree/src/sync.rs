//! Fetch orchestration between the tree cache and the remote provider.
//!
//! Gates access to the provider so each folder's children are fetched at
//! most once unless explicitly refreshed, and tracks expansion and
//! selection state for the rendered tree.

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::{Mutex, Notify};
use tracing::{debug, warn};

use notevault_core::path as vault_path;
use notevault_core::result::AppResult;
use notevault_core::traits::tree::TreeProvider;
use notevault_entity::tree::TreeNode;

use crate::cache::{PreImage, TreeCache};

/// Hard ceiling for `expand_all`, so a pathological tree cannot loop
/// forever.
const MAX_EXPAND_DEPTH: u32 = 64;

#[derive(Debug, Default)]
struct SyncState {
    cache: TreeCache,
    expanded: HashSet<String>,
    selected: Option<String>,
}

/// Mediates between the [`TreeCache`] and a [`TreeProvider`].
///
/// State lives behind an async mutex held only across non-await critical
/// sections; fetches run unlocked. Different paths may therefore be in
/// flight concurrently, while the per-path loading state suppresses
/// duplicate fetches for the same folder.
#[derive(Debug)]
pub struct TreeSynchronizer {
    provider: Arc<dyn TreeProvider>,
    state: Mutex<SyncState>,
    /// Signalled whenever a fetch settles (success or failure).
    settled: Notify,
}

impl TreeSynchronizer {
    /// Create a synchronizer over the given provider with an empty cache.
    pub fn new(provider: Arc<dyn TreeProvider>) -> Self {
        Self {
            provider,
            state: Mutex::new(SyncState::default()),
            settled: Notify::new(),
        }
    }

    /// Ensure a folder's listing is cached.
    ///
    /// Returns immediately when the listing is already cached, and also
    /// when a fetch for the same path is already in flight (the earlier
    /// fetch satisfies this request; no second request is issued). Await
    /// [`TreeSynchronizer::wait_settled`] to observe settlement in that
    /// case.
    pub async fn ensure_loaded(&self, path: &str) -> AppResult<()> {
        let path = vault_path::normalize(path);

        {
            let mut state = self.state.lock().await;
            if state.cache.is_loaded(&path) || state.cache.is_loading(&path) {
                return Ok(());
            }
            state.cache.begin_loading(&path);
        }

        self.fetch_and_merge(&path).await
    }

    /// Unconditionally re-fetch a folder's listing (the root listing when
    /// `path` is the vault root).
    ///
    /// A refresh never races an in-flight load for the same path: it
    /// waits for that fetch to settle first and then issues its own.
    pub async fn refresh_path(&self, path: &str) -> AppResult<()> {
        let path = vault_path::normalize(path);

        loop {
            let notified = self.settled.notified();
            {
                let mut state = self.state.lock().await;
                if !state.cache.is_loading(&path) {
                    state.cache.begin_loading(&path);
                    break;
                }
            }
            notified.await;
        }

        self.fetch_and_merge(&path).await
    }

    /// Wait until no fetch for `path` is in flight.
    pub async fn wait_settled(&self, path: &str) {
        let path = vault_path::normalize(path);
        loop {
            let notified = self.settled.notified();
            {
                let state = self.state.lock().await;
                if !state.cache.is_loading(&path) {
                    return;
                }
            }
            notified.await;
        }
    }

    /// Perform the provider fetch for a path already marked loading, then
    /// settle the cache.
    async fn fetch_and_merge(&self, path: &str) -> AppResult<()> {
        let result = self.provider.list_folder(path, 1).await;

        let mut state = self.state.lock().await;
        let outcome = match result {
            Ok(entries) => {
                debug!(path, entries = entries.len(), "Merged folder listing");
                state.cache.merge(path, entries);
                Ok(())
            }
            Err(err) => {
                warn!(path, error = %err, "Folder fetch failed");
                state.cache.fail_loading(path);
                Err(err)
            }
        };
        drop(state);

        self.settled.notify_waiters();
        outcome
    }

    // ── Expansion & selection ────────────────────────────────────

    /// Mark a folder expanded or collapsed in the rendered tree.
    pub async fn set_expanded(&self, path: &str, expanded: bool) {
        let path = vault_path::normalize(path);
        let mut state = self.state.lock().await;
        if expanded {
            state.expanded.insert(path);
        } else {
            state.expanded.remove(&path);
        }
    }

    /// Whether a folder is currently expanded.
    pub async fn is_expanded(&self, path: &str) -> bool {
        let path = vault_path::normalize(path);
        self.state.lock().await.expanded.contains(&path)
    }

    /// Expanded folder paths, for rendering.
    pub async fn expanded_paths(&self) -> HashSet<String> {
        self.state.lock().await.expanded.clone()
    }

    /// Mark a node selected/focused.
    pub async fn select(&self, path: &str) {
        let mut state = self.state.lock().await;
        state.selected = Some(vault_path::normalize(path));
    }

    /// Clear the selection.
    pub async fn clear_selection(&self) {
        self.state.lock().await.selected = None;
    }

    /// The currently-selected path, if any.
    pub async fn selected(&self) -> Option<String> {
        self.state.lock().await.selected.clone()
    }

    /// A consistent, fully-sorted snapshot of the known tree.
    pub async fn snapshot(&self) -> Vec<TreeNode> {
        self.state.lock().await.cache.build_snapshot()
    }

    /// The cached listing for a folder, cloned, or `None` if never
    /// fetched.
    pub async fn children_of(&self, path: &str) -> Option<Vec<TreeNode>> {
        let state = self.state.lock().await;
        state.cache.get_children(path).map(|c| c.to_vec())
    }

    // ── Bulk expansion ───────────────────────────────────────────

    /// Collapse every folder.
    pub async fn collapse_all(&self) {
        self.state.lock().await.expanded.clear();
    }

    /// Collapse everything, then expand breadth-first down to `level`
    /// folder levels.
    ///
    /// Each level is handled synchronously: every visible folder at the
    /// current depth is loaded and the loads settle before any folder at
    /// that depth opens, so a child never renders inside a parent whose
    /// siblings are still loading.
    pub async fn expand_to_level(&self, level: u32) -> AppResult<()> {
        self.collapse_all().await;

        for depth in 0..level {
            let folders = self.folders_at_depth(depth).await;
            if folders.is_empty() {
                break;
            }

            for path in &folders {
                // A failed folder is skipped; its siblings still expand.
                if let Err(err) = self.ensure_loaded(path).await {
                    warn!(path, error = %err, "Skipping folder during bulk expand");
                }
            }
            for path in &folders {
                self.wait_settled(path).await;
            }
            for path in &folders {
                self.set_expanded(path, true).await;
            }
        }

        Ok(())
    }

    /// Expand every folder, level by level, until no deeper folders
    /// remain.
    pub async fn expand_all(&self) -> AppResult<()> {
        self.expand_to_level(MAX_EXPAND_DEPTH).await
    }

    /// Directory paths at the given depth of the current snapshot
    /// (depth 0 = top-level folders).
    async fn folders_at_depth(&self, depth: u32) -> Vec<String> {
        let snapshot = self.snapshot().await;
        let mut level: Vec<TreeNode> = snapshot;
        for _ in 0..depth {
            level = level
                .into_iter()
                .filter(|n| n.is_dir)
                .flat_map(|n| n.children.unwrap_or_default())
                .collect();
        }
        level
            .into_iter()
            .filter(|n| n.is_dir)
            .map(|n| n.path)
            .collect()
    }

    // ── Cache mutation hooks for the mutation coordinator ────────

    /// Snapshot listings for rollback; `/` denotes the root listing.
    pub async fn pre_image<I, S>(&self, paths: I) -> PreImage
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.state.lock().await.cache.pre_image(paths)
    }

    /// Restore listings captured by [`TreeSynchronizer::pre_image`].
    pub async fn restore(&self, pre_image: PreImage) {
        self.state.lock().await.cache.restore(pre_image);
    }

    /// Optimistically rename a node in the cache, returning the new path.
    pub async fn apply_rename(&self, old_path: &str, new_name: &str) -> String {
        self.state.lock().await.cache.rename_paths(old_path, new_name)
    }

    /// Optimistically move a node between cached listings.
    pub async fn apply_move(&self, source_path: &str, destination_parent: &str) {
        let source = vault_path::normalize(source_path);
        let dest_parent = vault_path::normalize(destination_parent);
        let new_path = vault_path::join(&dest_parent, &vault_path::file_name(&source));

        let mut state = self.state.lock().await;
        if let Some(mut node) = state.cache.remove_node(&source) {
            node.path = new_path.clone();
            node.id = new_path;
            state.cache.insert_node(&dest_parent, node);
        }
    }
}
