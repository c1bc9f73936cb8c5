//! Vault-path algebra.
//!
//! Every entry in a vault is addressed by a slash-separated path relative
//! to the vault root, always beginning with `/` (or being `/` itself).
//! The path is the entry's identity; there is no separate ID space. These
//! helpers are shared by the filesystem store, the tree model, and the
//! HTTP layer so that all three agree on normalization and derived paths.

/// Normalize a vault path to canonical form.
///
/// Ensures a single leading `/`, collapses repeated separators, resolves
/// `.` and `..` lexically (never rising above the root), and strips any
/// trailing separator. Empty input and `/` both normalize to `/`.
pub fn normalize(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }
    if segments.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", segments.join("/"))
    }
}

/// Returns true for the vault root (`/` or empty).
pub fn is_root(path: &str) -> bool {
    path.is_empty() || path == "/"
}

/// The parent folder of a path. The parent of a top-level entry (and of
/// the root itself) is `/`.
pub fn parent(path: &str) -> String {
    let normalized = normalize(path);
    match normalized.rfind('/') {
        Some(0) | None => "/".to_string(),
        Some(idx) => normalized[..idx].to_string(),
    }
}

/// The final segment of a path. The root has no name and yields `""`.
pub fn file_name(path: &str) -> String {
    let normalized = normalize(path);
    if normalized == "/" {
        return String::new();
    }
    normalized
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .to_string()
}

/// Join a folder path and a child name into a normalized child path.
pub fn join(parent: &str, name: &str) -> String {
    if is_root(parent) {
        normalize(&format!("/{name}"))
    } else {
        normalize(&format!("{parent}/{name}"))
    }
}

/// The extension of a path's final segment, including the leading dot
/// (`Some(".md")` for `/notes/todo.md`), or `None` when the segment has
/// no dot.
pub fn extension(path: &str) -> Option<String> {
    let name = file_name(path);
    name.rfind('.').map(|idx| name[idx..].to_string())
}

/// Compute the ordered chain of paths from the root down to `path`,
/// inclusive of `path` itself.
///
/// `parent_paths("/a/b/c.md")` is `["/a", "/a/b", "/a/b/c.md"]`. Callers
/// that only want folders drop the final element. The root yields an
/// empty chain.
pub fn parent_paths(path: &str) -> Vec<String> {
    let normalized = normalize(path);
    if normalized == "/" {
        return Vec::new();
    }

    let segments: Vec<&str> = normalized.split('/').filter(|s| !s.is_empty()).collect();
    let mut chain = Vec::with_capacity(segments.len());
    for i in 1..=segments.len() {
        chain.push(format!("/{}", segments[..i].join("/")));
    }
    chain
}

/// Build the path that results from renaming `old_path` to `new_name`.
///
/// The parent folder is kept, and the extension of the old final segment
/// (the substring from its last `.`, if any) is preserved. Only the
/// portion before the last `.` is the editable base name, so a `new_name`
/// that already carries the same extension is not doubled.
pub fn build_renamed_path(old_path: &str, new_name: &str) -> String {
    let folder = parent(old_path);
    let name = match extension(old_path) {
        Some(ext) if !new_name.ends_with(&ext) => format!("{new_name}{ext}"),
        _ => new_name.to_string(),
    };
    join(&folder, &name)
}

/// Whether `candidate` equals `source` or lies inside it. Used to reject
/// moves that would place a folder into itself or one of its own
/// descendants.
pub fn is_same_or_descendant(source: &str, candidate: &str) -> bool {
    let source = normalize(source);
    let candidate = normalize(candidate);
    candidate == source || candidate.starts_with(&format!("{source}/"))
}
