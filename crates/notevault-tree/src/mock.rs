//! Scripted in-memory [`TreeProvider`] for tests.
//!
//! Listings are scripted per path, failures are injectable, and every
//! call is recorded so tests can assert fetch counts and ordering. A
//! closable gate lets a test hold a fetch in flight.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::Notify;

use notevault_core::error::AppError;
use notevault_core::path as vault_path;
use notevault_core::result::AppResult;
use notevault_core::traits::tree::{TreeEntry, TreeProvider};

/// Scripted in-memory tree provider.
#[derive(Debug, Default)]
pub struct MockProvider {
    listings: Mutex<HashMap<String, Vec<TreeEntry>>>,
    files: Mutex<HashMap<String, String>>,
    list_failures: Mutex<HashSet<String>>,
    failing_ops: Mutex<HashSet<&'static str>>,
    list_log: Mutex<Vec<String>>,
    op_log: Mutex<Vec<String>>,
    gate_closed: Mutex<bool>,
    gate: Notify,
}

impl MockProvider {
    /// A provider with no scripted listings.
    pub fn new() -> Self {
        Self::default()
    }

    /// A file entry for scripted listings.
    pub fn file_entry(path: &str) -> TreeEntry {
        TreeEntry {
            path: path.to_string(),
            name: vault_path::file_name(path),
            is_dir: false,
            children: None,
        }
    }

    /// A directory entry for scripted listings.
    pub fn dir_entry(path: &str) -> TreeEntry {
        TreeEntry {
            path: path.to_string(),
            name: vault_path::file_name(path),
            is_dir: true,
            children: None,
        }
    }

    /// Script the listing returned for a folder.
    pub fn add_listing(&self, path: &str, entries: Vec<TreeEntry>) {
        self.listings
            .lock()
            .unwrap()
            .insert(vault_path::normalize(path), entries);
    }

    /// Make `list_folder` fail for a path.
    pub fn fail_listing(&self, path: &str) {
        self.list_failures
            .lock()
            .unwrap()
            .insert(vault_path::normalize(path));
    }

    /// Stop failing `list_folder` for a path.
    pub fn clear_failure(&self, path: &str) {
        self.list_failures
            .lock()
            .unwrap()
            .remove(&vault_path::normalize(path));
    }

    /// Make a mutation operation fail (`"rename"`, `"move"`, `"delete"`,
    /// `"create_file"`, `"create_folder"`).
    pub fn fail_op(&self, op: &'static str) {
        self.failing_ops.lock().unwrap().insert(op);
    }

    /// Paths passed to `list_folder`, in call order.
    pub fn list_calls(&self) -> Vec<String> {
        self.list_log.lock().unwrap().clone()
    }

    /// Recorded mutation operations, in call order.
    pub fn op_calls(&self) -> Vec<String> {
        self.op_log.lock().unwrap().clone()
    }

    /// Hold subsequent `list_folder` calls open until the gate reopens.
    pub fn close_gate(&self) {
        *self.gate_closed.lock().unwrap() = true;
    }

    /// Release held fetches.
    pub fn open_gate(&self) {
        *self.gate_closed.lock().unwrap() = false;
        self.gate.notify_waiters();
    }

    async fn pass_gate(&self) {
        loop {
            let notified = self.gate.notified();
            if !*self.gate_closed.lock().unwrap() {
                return;
            }
            notified.await;
        }
    }

    fn check_op(&self, op: &'static str) -> AppResult<()> {
        if self.failing_ops.lock().unwrap().contains(op) {
            Err(AppError::conflict(format!("Scripted failure for {op}")))
        } else {
            Ok(())
        }
    }

    fn assemble(&self, path: &str, depth: u32) -> Vec<TreeEntry> {
        let listings = self.listings.lock().unwrap();
        assemble_level(&listings, path, depth)
    }
}

fn assemble_level(
    listings: &HashMap<String, Vec<TreeEntry>>,
    path: &str,
    depth: u32,
) -> Vec<TreeEntry> {
    let Some(entries) = listings.get(path) else {
        return Vec::new();
    };
    entries
        .iter()
        .map(|entry| {
            let children = if entry.is_dir && depth > 1 {
                Some(assemble_level(listings, &entry.path, depth - 1))
            } else {
                entry.children.clone()
            };
            TreeEntry {
                children,
                ..entry.clone()
            }
        })
        .collect()
}

#[async_trait]
impl TreeProvider for MockProvider {
    async fn list_folder(&self, path: &str, depth: u32) -> AppResult<Vec<TreeEntry>> {
        let path = vault_path::normalize(path);
        self.list_log.lock().unwrap().push(path.clone());
        self.pass_gate().await;

        if self.list_failures.lock().unwrap().contains(&path) {
            return Err(AppError::storage(format!("Scripted failure for {path}")));
        }
        Ok(self.assemble(&path, depth))
    }

    async fn read_file(&self, path: &str) -> AppResult<String> {
        self.files
            .lock()
            .unwrap()
            .get(&vault_path::normalize(path))
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("File not found: {path}")))
    }

    async fn write_file(&self, path: &str, content: &str) -> AppResult<()> {
        self.files
            .lock()
            .unwrap()
            .insert(vault_path::normalize(path), content.to_string());
        Ok(())
    }

    async fn create_file(&self, path: &str, content: &str) -> AppResult<String> {
        self.check_op("create_file")?;
        let mut final_path = vault_path::normalize(path);
        if !final_path.to_lowercase().ends_with(".md") {
            final_path.push_str(".md");
        }
        self.op_log
            .lock()
            .unwrap()
            .push(format!("create_file:{final_path}"));
        self.files
            .lock()
            .unwrap()
            .insert(final_path.clone(), content.to_string());
        Ok(final_path)
    }

    async fn create_folder(&self, path: &str) -> AppResult<()> {
        self.check_op("create_folder")?;
        self.op_log
            .lock()
            .unwrap()
            .push(format!("create_folder:{}", vault_path::normalize(path)));
        Ok(())
    }

    async fn rename_entry(&self, old_path: &str, new_path: &str) -> AppResult<()> {
        self.check_op("rename")?;
        self.op_log
            .lock()
            .unwrap()
            .push(format!("rename:{old_path}->{new_path}"));
        Ok(())
    }

    async fn move_entry(
        &self,
        source_path: &str,
        destination_parent_path: &str,
        new_name: &str,
    ) -> AppResult<()> {
        self.check_op("move")?;
        self.op_log.lock().unwrap().push(format!(
            "move:{source_path}->{destination_parent_path}:{new_name}"
        ));
        Ok(())
    }

    async fn delete_entry(&self, path: &str) -> AppResult<()> {
        self.check_op("delete")?;
        self.op_log.lock().unwrap().push(format!("delete:{path}"));
        Ok(())
    }

    async fn read_markdown(&self, path: &str) -> AppResult<String> {
        self.read_file(path).await
    }

    async fn render_preview(&self, path: &str) -> AppResult<String> {
        let md = self.read_file(path).await?;
        Ok(format!("<div class=\"markdown-body\">{md}</div>"))
    }
}
