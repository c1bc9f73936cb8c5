//! Path-keyed tree cache and merge logic.
//!
//! The cache holds only folders the user has expanded; everything else is
//! a stub. Listings are stored per-path rather than inline, so replacing
//! one folder's listing never disturbs the cached listings of its
//! descendants.

use std::collections::HashMap;

use notevault_core::path as vault_path;
use notevault_core::traits::tree::TreeEntry;
use notevault_entity::tree::TreeNode;

/// Load state of one folder's listing.
///
/// `NotLoaded` (never fetched) and `Loaded(vec![])` (confirmed empty)
/// are distinct states even though both render as empty children.
/// `Loading` carries the previously-loaded listing, if any, so a refresh
/// keeps showing the stale listing until the new one lands.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FolderState {
    /// Never fetched.
    #[default]
    NotLoaded,
    /// A fetch is in flight.
    Loading {
        /// The listing from before the refresh, shown until settlement.
        previous: Option<Vec<TreeNode>>,
    },
    /// Fetched; the folder's direct children.
    Loaded(Vec<TreeNode>),
}

impl FolderState {
    /// The visible listing, if any.
    fn children(&self) -> Option<&[TreeNode]> {
        match self {
            Self::NotLoaded => None,
            Self::Loading { previous } => previous.as_deref(),
            Self::Loaded(children) => Some(children),
        }
    }
}

/// Saved listings for rollback of an optimistic mutation.
#[derive(Debug, Clone)]
pub struct PreImage {
    /// `(path, state)` pairs; `/` denotes the root listing.
    entries: Vec<(String, FolderState)>,
}

/// In-memory, path-keyed partial mirror of the remote tree.
#[derive(Debug, Default)]
pub struct TreeCache {
    /// The top-level listing.
    root: FolderState,
    /// Per-folder listings, keyed by normalized folder path.
    folders: HashMap<String, FolderState>,
}

impl TreeCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self, path: &str) -> &FolderState {
        const NOT_LOADED: &FolderState = &FolderState::NotLoaded;
        if vault_path::is_root(path) {
            &self.root
        } else {
            self.folders.get(path).unwrap_or(NOT_LOADED)
        }
    }

    fn state_mut(&mut self, path: &str) -> &mut FolderState {
        if vault_path::is_root(path) {
            &mut self.root
        } else {
            self.folders.entry(path.to_string()).or_default()
        }
    }

    /// The cached listing for a folder, or `None` if never fetched.
    pub fn get_children(&self, path: &str) -> Option<&[TreeNode]> {
        self.state(&vault_path::normalize(path)).children()
    }

    /// Whether the folder has a settled listing.
    pub fn is_loaded(&self, path: &str) -> bool {
        matches!(self.state(&vault_path::normalize(path)), FolderState::Loaded(_))
    }

    /// Whether a fetch for the folder is in flight.
    pub fn is_loading(&self, path: &str) -> bool {
        matches!(
            self.state(&vault_path::normalize(path)),
            FolderState::Loading { .. }
        )
    }

    /// Mark a folder as having a fetch in flight, keeping any
    /// already-loaded listing visible until the fetch settles.
    pub fn begin_loading(&mut self, path: &str) {
        let state = self.state_mut(&vault_path::normalize(path));
        let previous = match std::mem::take(state) {
            FolderState::Loaded(children) => Some(children),
            FolderState::Loading { previous } => previous,
            FolderState::NotLoaded => None,
        };
        *state = FolderState::Loading { previous };
    }

    /// Settle a failed fetch: the loading flag is cleared and the prior
    /// state restored, so no partial or stale data is merged.
    pub fn fail_loading(&mut self, path: &str) {
        let state = self.state_mut(&vault_path::normalize(path));
        *state = match std::mem::take(state) {
            FolderState::Loading {
                previous: Some(children),
            } => FolderState::Loaded(children),
            _ => FolderState::NotLoaded,
        };
    }

    /// Merge a fetched listing into the cache as the listing for `path`.
    ///
    /// Entries become nodes (directories get stub children, files none).
    /// Any nested listings the fetch carried (depth > 1) are merged
    /// recursively under their own paths, so one request can warm several
    /// levels at once. Listings of folders the payload does not cover are
    /// left untouched.
    pub fn merge(&mut self, path: &str, entries: Vec<TreeEntry>) {
        let nodes: Vec<TreeNode> = entries.iter().map(TreeNode::from_entry).collect();
        *self.state_mut(&vault_path::normalize(path)) = FolderState::Loaded(nodes);

        for entry in entries {
            if let Some(nested) = entry.children {
                self.merge(&entry.path, nested);
            }
        }
    }

    /// Rename a node in place everywhere it occurs, returning the new
    /// path computed by the extension-preserving rename rule. Sibling
    /// ordering is not touched; the next snapshot re-sorts.
    pub fn rename_paths(&mut self, old_path: &str, new_name: &str) -> String {
        let old_path = vault_path::normalize(old_path);
        let new_path = vault_path::build_renamed_path(&old_path, new_name);
        let name = vault_path::file_name(&new_path);

        let mut update = |nodes: &mut Vec<TreeNode>| {
            for node in nodes {
                if node.path == old_path {
                    node.path = new_path.clone();
                    node.id = new_path.clone();
                    node.name = name.clone();
                }
            }
        };

        if let Some(nodes) = state_children_mut(&mut self.root) {
            update(nodes);
        }
        for state in self.folders.values_mut() {
            if let Some(nodes) = state_children_mut(state) {
                update(nodes);
            }
        }

        new_path
    }

    /// Remove a node from its parent's listing, if that listing is
    /// cached.
    pub fn remove_node(&mut self, path: &str) -> Option<TreeNode> {
        let path = vault_path::normalize(path);
        let parent = vault_path::parent(&path);
        let nodes = state_children_mut(self.state_mut(&parent))?;
        let idx = nodes.iter().position(|n| n.path == path)?;
        Some(nodes.remove(idx))
    }

    /// Insert a node into a folder's listing, if that listing is cached.
    pub fn insert_node(&mut self, folder: &str, node: TreeNode) {
        let folder = vault_path::normalize(folder);
        if let Some(nodes) = state_children_mut(self.state_mut(&folder)) {
            nodes.push(node);
        }
    }

    /// Snapshot the listings for the given paths (use `/` for the root)
    /// so a rejected mutation can be rolled back.
    pub fn pre_image<I, S>(&self, paths: I) -> PreImage
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = paths
            .into_iter()
            .map(|p| {
                let path = vault_path::normalize(p.as_ref());
                let state = self.state(&path).clone();
                (path, state)
            })
            .collect();
        PreImage { entries }
    }

    /// Restore listings captured by [`TreeCache::pre_image`].
    pub fn restore(&mut self, pre_image: PreImage) {
        for (path, state) in pre_image.entries {
            *self.state_mut(&path) = state;
        }
    }

    /// Build the full, recursively-sorted tree for rendering.
    ///
    /// Every directory whose path has a cached listing gets that listing
    /// (itself recursively resolved) as its children; directories without
    /// one render with empty children.
    pub fn build_snapshot(&self) -> Vec<TreeNode> {
        let roots = self.root.children().unwrap_or(&[]);
        self.resolve_level(roots)
    }

    fn resolve_level(&self, nodes: &[TreeNode]) -> Vec<TreeNode> {
        let mut resolved: Vec<TreeNode> = nodes
            .iter()
            .map(|node| {
                let children = if node.is_dir {
                    match self.state(&node.path).children() {
                        Some(listing) => Some(self.resolve_level(listing)),
                        None => Some(Vec::new()),
                    }
                } else {
                    None
                };
                TreeNode {
                    children,
                    ..node.clone()
                }
            })
            .collect();

        sort_nodes(&mut resolved);
        resolved
    }
}

fn state_children_mut(state: &mut FolderState) -> Option<&mut Vec<TreeNode>> {
    match state {
        FolderState::NotLoaded => None,
        FolderState::Loading { previous } => previous.as_mut(),
        FolderState::Loaded(children) => Some(children),
    }
}

/// Directories before files; within the same type, case-insensitive name
/// order.
fn sort_nodes(nodes: &mut [TreeNode]) {
    nodes.sort_by(|a, b| {
        b.is_dir
            .cmp(&a.is_dir)
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
            .then_with(|| a.name.cmp(&b.name))
    });
}
