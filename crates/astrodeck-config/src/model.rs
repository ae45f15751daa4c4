// SPDX-FileCopyrightText: 2026 Astrodeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Astrodeck plugin host.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level Astrodeck configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AstrodeckConfig {
    /// Host application identity and logging.
    #[serde(default)]
    pub app: AppConfig,

    /// Where plugin preferences are persisted.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Plugin discovery settings.
    #[serde(default)]
    pub plugins: PluginsConfig,
}

/// Host application settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Display name handed to plugins through the app handle.
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_app_name() -> String {
    "astrodeck".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Persistence settings for the plugin registry.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Directory holding one JSON document per storage key.
    #[serde(default = "default_state_dir")]
    pub state_dir: String,

    /// Key under which the registry state is stored.
    #[serde(default = "default_state_key")]
    pub state_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            state_dir: default_state_dir(),
            state_key: default_state_key(),
        }
    }
}

impl StorageConfig {
    pub fn state_dir_path(&self) -> PathBuf {
        PathBuf::from(&self.state_dir)
    }
}

fn default_state_dir() -> String {
    dirs::data_dir()
        .map(|p| p.join("astrodeck").join("state"))
        .unwrap_or_else(|| PathBuf::from(".astrodeck-state"))
        .to_string_lossy()
        .into_owned()
}

fn default_state_key() -> String {
    "plugin-store".to_string()
}

/// Plugin discovery settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PluginsConfig {
    /// Directory scanned for `<plugin>/plugin.json` descriptors.
    #[serde(default)]
    pub directory: Option<String>,

    /// Include the plugins compiled into the binary.
    #[serde(default = "default_builtin")]
    pub builtin: bool,
}

impl Default for PluginsConfig {
    fn default() -> Self {
        Self {
            directory: None,
            builtin: default_builtin(),
        }
    }
}

fn default_builtin() -> bool {
    true
}
