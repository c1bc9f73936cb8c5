//! Client settings persistence port.
//!
//! The UI keeps its ambient state (theme, edit mode, last path) in one
//! [`ClientSettings`] struct and persists it through this port instead of
//! reaching for a storage mechanism directly.

use std::path::PathBuf;
use std::sync::Mutex;

use notevault_core::error::AppError;
use notevault_core::result::AppResult;
use notevault_entity::settings::ClientSettings;

/// Persistence port for [`ClientSettings`].
pub trait SettingsStore: Send + Sync + std::fmt::Debug {
    /// Load the persisted settings, or defaults when nothing is stored.
    fn load(&self) -> AppResult<ClientSettings>;

    /// Persist the settings.
    fn save(&self, settings: &ClientSettings) -> AppResult<()>;
}

/// JSON-file-backed settings store.
#[derive(Debug, Clone)]
pub struct JsonFileSettings {
    /// Path of the settings file.
    path: PathBuf,
}

impl JsonFileSettings {
    /// Create a store over the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SettingsStore for JsonFileSettings {
    fn load(&self) -> AppResult<ClientSettings> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Ok(ClientSettings::default())
            }
            Err(err) => Err(AppError::from(err)),
        }
    }

    fn save(&self, settings: &ClientSettings) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(settings)?;
        let mut tmp = self.path.as_os_str().to_owned();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

/// In-memory settings store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemorySettings {
    inner: Mutex<ClientSettings>,
}

impl SettingsStore for MemorySettings {
    fn load(&self) -> AppResult<ClientSettings> {
        Ok(self.inner.lock().expect("settings lock poisoned").clone())
    }

    fn save(&self, settings: &ClientSettings) -> AppResult<()> {
        *self.inner.lock().expect("settings lock poisoned") = settings.clone();
        Ok(())
    }
}
