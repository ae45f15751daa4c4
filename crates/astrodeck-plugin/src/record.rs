// SPDX-FileCopyrightText: 2026 Astrodeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Registry-owned plugin records and their persisted form.

use serde::{Deserialize, Serialize};

use crate::descriptor::PluginDescriptor;

/// The registry's runtime view of one discovered plugin.
///
/// Carries the descriptor fields as last discovered plus the user's
/// enablement and the assigned route slot. The descriptor's author-time
/// `enabled` hint is not part of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginRecord {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub default_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// User-controlled enablement.
    pub enabled: bool,
    /// Route slot (`/plugin<N>`). Stable once assigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugin_path: Option<String>,
}

impl PluginRecord {
    /// A record seen for the first time: enablement comes from the descriptor default.
    pub fn discovered(descriptor: &PluginDescriptor) -> Self {
        Self::with_state(descriptor, descriptor.default_enabled, None)
    }

    /// A record built from fresh descriptor fields and carried-over state.
    pub fn with_state(
        descriptor: &PluginDescriptor,
        enabled: bool,
        plugin_path: Option<String>,
    ) -> Self {
        Self {
            id: descriptor.id.clone(),
            name: descriptor.name.clone(),
            description: descriptor.description.clone(),
            version: descriptor.version.clone(),
            author: descriptor.author.clone(),
            default_enabled: descriptor.default_enabled,
            icon: descriptor.icon.clone(),
            enabled,
            plugin_path,
        }
    }

    /// Replaces the descriptor fields, keeping `enabled` and `plugin_path`.
    pub fn refresh(&mut self, descriptor: &PluginDescriptor) {
        *self = Self::with_state(descriptor, self.enabled, self.plugin_path.take());
    }
}

/// The document stored under the registry's storage key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    #[serde(default)]
    pub plugins: Vec<PluginRecord>,
    /// Written for compatibility; a fresh session always re-runs discovery.
    #[serde(default)]
    pub is_initialized: bool,
}

impl PersistedState {
    /// Parses a stored document one record at a time.
    ///
    /// Only `id` and `enabled` are required per record; descriptor fields
    /// are refreshed from the catalog on discovery anyway. A record that
    /// does not deserialize is logged and skipped. Fails only when the
    /// document itself has the wrong shape.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Document {
            #[serde(default)]
            plugins: Vec<serde_json::Value>,
            #[serde(default)]
            is_initialized: bool,
        }

        let document: Document = serde_json::from_str(raw)?;
        let plugins = document
            .plugins
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| {
                match serde_json::from_value::<PluginRecord>(value) {
                    Ok(record) => Some(record),
                    Err(e) => {
                        tracing::warn!(index, error = %e, "skipping malformed persisted plugin record");
                        None
                    }
                }
            })
            .collect();

        Ok(Self {
            plugins,
            is_initialized: document.is_initialized,
        })
    }
}
