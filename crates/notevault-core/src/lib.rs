//! # notevault-core
//!
//! Core crate for NoteVault. Contains the `TreeProvider` trait,
//! configuration schemas, vault-path algebra, and the unified error
//! system.
//!
//! This crate has **no** internal dependencies on other NoteVault crates.

pub mod config;
pub mod error;
pub mod path;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
