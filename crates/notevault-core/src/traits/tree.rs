//! Remote tree provider trait for pluggable vault backends.

use async_trait::async_trait;

use crate::result::AppResult;

/// A single entry in a folder listing, as returned by a provider.
///
/// `path` is vault-root-relative, `/`-prefixed, and is the entry's unique
/// identifier. `children` is populated only when the caller asked for a
/// listing deeper than one level; it is `None` (not empty) otherwise.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeEntry {
    /// Vault-relative path of the entry.
    pub path: String,
    /// Final path segment.
    pub name: String,
    /// Whether the entry is a directory.
    pub is_dir: bool,
    /// Nested listing, present only for depth > 1 requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<TreeEntry>>,
}

/// Trait for vault tree backends.
///
/// The filesystem store implements this directly; the HTTP client
/// implements it against the server API. The tree model depends only on
/// this trait. The [`TreeProvider`] trait is defined here in
/// `notevault-core` and implemented in `notevault-vault` and
/// `notevault-client`.
#[async_trait]
pub trait TreeProvider: Send + Sync + std::fmt::Debug + 'static {
    /// List the immediate children of `path`. With `depth > 1`, each
    /// directory entry additionally carries its own `children` populated
    /// to `depth - 1` further levels. `/` (or empty) denotes the vault
    /// root. A path escaping the vault root is rejected with
    /// `InvalidPath`.
    async fn list_folder(&self, path: &str, depth: u32) -> AppResult<Vec<TreeEntry>>;

    /// Read a file's content as UTF-8 text.
    async fn read_file(&self, path: &str) -> AppResult<String>;

    /// Write a file atomically (temp file + rename), creating parent
    /// folders as needed. A reader never observes a partial write.
    async fn write_file(&self, path: &str, content: &str) -> AppResult<()>;

    /// Create a new file, failing with `Conflict` if the target exists.
    /// The provider may normalize the path (e.g. append `.md`); the final
    /// path is returned.
    async fn create_file(&self, path: &str, content: &str) -> AppResult<String>;

    /// Create a new folder, failing with `Conflict` if the target exists.
    async fn create_folder(&self, path: &str) -> AppResult<()>;

    /// Rename (or move) a file or folder to a new full path.
    async fn rename_entry(&self, old_path: &str, new_path: &str) -> AppResult<()>;

    /// Move an entry under a new parent folder, keeping or changing its
    /// name.
    async fn move_entry(
        &self,
        source_path: &str,
        destination_parent_path: &str,
        new_name: &str,
    ) -> AppResult<()>;

    /// Delete a file, or a folder recursively.
    async fn delete_entry(&self, path: &str) -> AppResult<()>;

    /// Read a file's raw Markdown for client-side rendering.
    async fn read_markdown(&self, path: &str) -> AppResult<String>;

    /// Render a file's Markdown to an HTML fragment.
    async fn render_preview(&self, path: &str) -> AppResult<String>;
}
