//! Tree node structures for hierarchical vault display.

use serde::{Deserialize, Serialize};

use notevault_core::traits::tree::TreeEntry;

/// A node in the client-side tree cache.
///
/// Invariant: `id == path`. For a directory, `children` is always
/// `Some` (possibly empty) — never `None` — because the rendering layer
/// distinguishes leaf from folder solely by the presence of `children`.
/// A freshly-discovered, unexpanded folder is materialized with empty
/// children (the stub state).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeNode {
    /// Node identifier, always equal to `path`.
    pub id: String,
    /// Final path segment.
    pub name: String,
    /// Vault-relative path.
    pub path: String,
    /// Whether the node is a directory.
    pub is_dir: bool,
    /// Child nodes; `Some` for directories, `None` for files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<TreeNode>>,
}

impl TreeNode {
    /// Convert a wire entry into a cache node. Directories get an empty
    /// child list (the stub state); any nested listing the entry carries
    /// is merged separately by the cache.
    pub fn from_entry(entry: &TreeEntry) -> Self {
        Self {
            id: entry.path.clone(),
            name: entry.name.clone(),
            path: entry.path.clone(),
            is_dir: entry.is_dir,
            children: if entry.is_dir { Some(Vec::new()) } else { None },
        }
    }
}

/// A single item in a flat folder listing (`GET /api/folder`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderItem {
    /// Final path segment.
    pub name: String,
    /// Vault-relative path.
    pub path: String,
    /// Whether the item is a directory.
    pub is_dir: bool,
    /// `"folder"` or `"file"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// File extension including the dot, `None` for folders.
    pub extension: Option<String>,
}

/// A flat folder listing with its request path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderListing {
    /// The requested folder path.
    pub path: String,
    /// Direct children, folders first.
    pub items: Vec<FolderItem>,
}

/// One entry of the vault-wide Markdown file index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileIndexEntry {
    /// File name without the `.md` extension.
    pub file_name: String,
    /// Vault-relative path of the file.
    pub file_path: String,
}
