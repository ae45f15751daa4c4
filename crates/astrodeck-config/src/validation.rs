// SPDX-FileCopyrightText: 2026 Astrodeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.

use crate::diagnostic::ConfigError;
use crate::model::AstrodeckConfig;

/// Log levels accepted by `app.log_level`.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Collects every failure instead of stopping at the first one.
pub fn validate_config(config: &AstrodeckConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.app.name.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "app.name must not be empty".to_string(),
        });
    }

    let level = config.app.log_level.trim().to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "app.log_level `{}` is not one of: {}",
                config.app.log_level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    if config.storage.state_dir.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "storage.state_dir must not be empty".to_string(),
        });
    }

    let key = config.storage.state_key.trim();
    if key.is_empty() {
        errors.push(ConfigError::Validation {
            message: "storage.state_key must not be empty".to_string(),
        });
    } else if key.contains(['/', '\\']) || key.starts_with('.') {
        // The key becomes a file name inside state_dir.
        errors.push(ConfigError::Validation {
            message: format!("storage.state_key `{key}` must be a plain file name"),
        });
    }

    if let Some(dir) = &config.plugins.directory
        && dir.trim().is_empty()
    {
        errors.push(ConfigError::Validation {
            message: "plugins.directory must not be empty when set".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
