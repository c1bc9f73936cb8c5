//! # notevault-entity
//!
//! Domain entity models for NoteVault. Every struct in this crate is a
//! wire-format or cache-resident value object. All entities derive
//! `Debug`, `Clone`, `Serialize`, and `Deserialize`.

pub mod settings;
pub mod tree;
pub mod vim;
