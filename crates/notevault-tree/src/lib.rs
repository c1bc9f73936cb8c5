//! # notevault-tree
//!
//! The client-side vault tree model: an in-memory, path-keyed partial
//! mirror of the remote directory tree, loaded lazily as folders are
//! expanded and kept consistent with the server through optimistic
//! mutations.
//!
//! ## Modules
//!
//! - `cache` — the path-keyed tree cache, merge logic, and snapshots
//! - `sync` — fetch orchestration against a [`TreeProvider`] and
//!   expansion state
//! - `nav` — auto-expand-to-selection for deep links
//! - `mutation` — optimistic rename/move/create/delete with rollback
//! - `mock` — a scripted provider for tests
//!
//! [`TreeProvider`]: notevault_core::traits::tree::TreeProvider

pub mod cache;
pub mod mock;
pub mod mutation;
pub mod nav;
pub mod sync;

pub use cache::{FolderState, TreeCache};
pub use mutation::MutationCoordinator;
pub use nav::NavigationController;
pub use sync::TreeSynchronizer;
