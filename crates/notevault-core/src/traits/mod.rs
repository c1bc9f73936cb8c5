//! Core traits implemented by other NoteVault crates.

pub mod tree;

pub use tree::{TreeEntry, TreeProvider};
