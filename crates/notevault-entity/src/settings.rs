//! Client UI settings.

use serde::{Deserialize, Serialize};

/// Ambient client settings, held as one explicit struct rather than
/// scattered singletons. Persistence goes through the `SettingsStore`
/// port in `notevault-client`; the tree model never depends on this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSettings {
    /// UI theme name.
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Whether the editor opens in edit mode (vs. preview).
    #[serde(default)]
    pub edit_mode: bool,
    /// Last visited vault path, restored on next launch.
    #[serde(default)]
    pub last_visited_path: Option<String>,
    /// Default tree expansion depth for "expand to level".
    #[serde(default = "default_expand_level")]
    pub expand_level: u32,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            edit_mode: false,
            last_visited_path: None,
            expand_level: default_expand_level(),
        }
    }
}

fn default_theme() -> String {
    "dark".to_string()
}

fn default_expand_level() -> u32 {
    2
}
