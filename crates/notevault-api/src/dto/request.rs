//! Request DTOs with validation.
//!
//! Wire names are camelCase to match the web client.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Query parameters for tree and folder listings.
#[derive(Debug, Clone, Deserialize)]
pub struct TreeQuery {
    /// Folder path relative to the vault root; defaults to the root.
    pub path: Option<String>,
    /// Maximum listing depth (1 = only this folder). Values below 1 are
    /// clamped up.
    pub depth: Option<u32>,
}

/// Query parameter carrying a single vault path.
#[derive(Debug, Clone, Deserialize)]
pub struct PathQuery {
    /// Vault-relative path.
    pub path: String,
}

/// Query parameter for path-addressed search endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchQuery {
    /// Vault-relative path of the file to fetch.
    pub q: String,
}

/// Body for writing or creating a file.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FileWriteRequest {
    /// Target vault path.
    #[validate(length(min = 1, message = "Path is required"))]
    pub path: String,
    /// File content; missing means empty.
    #[serde(default)]
    pub content: Option<String>,
}

/// Body for renaming a file or folder.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RenameRequest {
    /// Current vault path.
    #[validate(length(min = 1, message = "oldPath is required"))]
    pub old_path: String,
    /// New full vault path.
    #[validate(length(min = 1, message = "newPath is required"))]
    pub new_path: String,
}

/// Body for moving an entry under a new parent (drag-and-drop).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MoveRequest {
    /// Entry being moved.
    #[validate(length(min = 1, message = "sourcePath is required"))]
    pub source_path: String,
    /// Folder receiving the entry.
    pub destination_parent_path: String,
    /// Name of the entry at its destination.
    #[validate(length(min = 1, message = "newName is required"))]
    pub new_name: String,
}

/// Body for creating a folder.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FolderCreateRequest {
    /// Full vault path of the new folder.
    #[validate(length(min = 1, message = "Path is required"))]
    pub path: String,
}

/// Body for toggling a task-list checkbox inside a note.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ToggleCheckboxRequest {
    /// Vault path of the note.
    #[validate(length(min = 1, message = "Path is required"))]
    pub path: String,
    /// Text of the task line to toggle.
    #[validate(length(min = 1, message = "checkboxText is required"))]
    pub checkbox_text: String,
}
