//! Safe resolution of vault paths to filesystem paths.

use std::path::{Path, PathBuf};

use notevault_core::error::AppError;
use notevault_core::result::AppResult;

/// Resolve a vault-relative path against the vault root.
///
/// Segments are normalized lexically; any `..` that would climb above the
/// vault root rejects the whole path with `InvalidPath` rather than being
/// clamped, so a client can never address anything outside the vault.
pub fn resolve(root: &Path, vault_path: &str) -> AppResult<PathBuf> {
    let mut segments: Vec<&str> = Vec::new();
    for segment in vault_path.split(['/', '\\']) {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.pop().is_none() {
                    return Err(AppError::invalid_path(format!(
                        "Path escapes the vault root: {vault_path}"
                    )));
                }
            }
            other => segments.push(other),
        }
    }

    let mut full = root.to_path_buf();
    for segment in segments {
        full.push(segment);
    }
    Ok(full)
}

/// Build the vault-relative path of a child inside a parent folder.
pub fn child_path(parent_vault_path: &str, name: &str) -> String {
    notevault_core::path::join(parent_vault_path, name)
}
