// SPDX-FileCopyrightText: 2026 Astrodeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Astrodeck plugin host.

use thiserror::Error;

/// The primary error type used across the plugin host traits and registry.
#[derive(Debug, Error)]
pub enum AstrodeckError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// A plugin descriptor could not be parsed or failed validation.
    #[error("invalid plugin descriptor: {0}")]
    Descriptor(String),

    /// State store errors (unreadable file, serialization failure).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Requested plugin is not known to the catalog or registry.
    #[error("plugin not found: {id}")]
    PluginNotFound { id: String },

    /// The host router already has a route mounted at this path.
    #[error("route already registered: {path}")]
    DuplicateRoute { path: String },

    /// A plugin's install step failed.
    #[error("install failed for plugin {plugin_id}: {message}")]
    Install { plugin_id: String, message: String },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AstrodeckError {
    /// Wraps any error as a storage failure.
    pub fn storage(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        AstrodeckError::Storage {
            source: source.into(),
        }
    }

    /// Shorthand for an install failure of `plugin_id`.
    pub fn install(plugin_id: impl Into<String>, message: impl Into<String>) -> Self {
        AstrodeckError::Install {
            plugin_id: plugin_id.into(),
            message: message.into(),
        }
    }
}
