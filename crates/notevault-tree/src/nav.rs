//! Auto-expand-to-selection for deep links and search activation.

use std::sync::Arc;

use tracing::debug;

use notevault_core::path as vault_path;
use notevault_core::result::AppResult;

use crate::sync::TreeSynchronizer;

/// Drives the synchronizer to load and expand every ancestor of a target
/// path, then selects the target.
#[derive(Debug, Clone)]
pub struct NavigationController {
    sync: Arc<TreeSynchronizer>,
}

impl NavigationController {
    /// Create a controller over the given synchronizer.
    pub fn new(sync: Arc<TreeSynchronizer>) -> Self {
        Self { sync }
    }

    /// Load and expand every ancestor folder of `target` in
    /// root-to-leaf order, then mark the target selected.
    ///
    /// Already-loaded ancestors are not re-fetched. If an ancestor fails
    /// to load, navigation stops there: ancestors expanded so far stay
    /// expanded, the selection is untouched, and the error is returned.
    pub async fn reveal(&self, target: &str) -> AppResult<()> {
        let target = vault_path::normalize(target);
        let chain = vault_path::parent_paths(&target);

        // The chain includes the target itself; its ancestors are all
        // but the last element.
        for ancestor in chain.iter().take(chain.len().saturating_sub(1)) {
            self.sync.ensure_loaded(ancestor).await?;
            self.sync.wait_settled(ancestor).await;
            if !self.sync.is_expanded(ancestor).await {
                self.sync.set_expanded(ancestor, true).await;
            }
        }

        debug!(target, "Revealed path");
        self.sync.select(&target).await;
        Ok(())
    }
}
