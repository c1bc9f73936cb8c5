//! # notevault-vault
//!
//! Filesystem-backed vault store. Implements the `TreeProvider` trait
//! over a root directory of Markdown files, with safe path resolution,
//! atomic writes, Markdown rendering, checkbox toggling, and a cached
//! vault-wide file index.

pub mod checkbox;
pub mod index;
pub mod markdown;
pub mod paths;
pub mod store;

pub use index::FileIndex;
pub use store::FsVault;
