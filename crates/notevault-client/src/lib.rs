//! # notevault-client
//!
//! Client-side plumbing for NoteVault frontends: an HTTP [`ApiClient`]
//! implementing the `TreeProvider` trait against the server API, and the
//! [`SettingsStore`] persistence port for ambient UI settings.

pub mod api;
pub mod settings;

pub use api::ApiClient;
pub use settings::{JsonFileSettings, MemorySettings, SettingsStore};
