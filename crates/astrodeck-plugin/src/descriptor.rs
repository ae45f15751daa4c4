// SPDX-FileCopyrightText: 2026 Astrodeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin descriptor parsing from `plugin.json` files.
//!
//! A descriptor is the static, author-supplied metadata of a plugin. It is
//! immutable at runtime; the registry combines it with per-user state to
//! form a [`PluginRecord`](crate::record::PluginRecord).

use astrodeck_core::AstrodeckError;
use serde::{Deserialize, Serialize};

/// File name of a plugin descriptor inside its plugin directory.
pub const DESCRIPTOR_FILE: &str = "plugin.json";

/// Parsed plugin descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginDescriptor {
    /// Globally unique id, stable across versions (e.g. "weather-station").
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Semantic version string.
    pub version: String,
    #[serde(default)]
    pub author: String,
    /// Enablement applied the first time this plugin is ever discovered.
    #[serde(default)]
    pub default_enabled: bool,
    /// Author-time visibility hint. Distinct from the user's per-session flag.
    #[serde(default = "default_enabled_hint")]
    pub enabled: bool,
    /// Icon name shown in the navigation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

fn default_enabled_hint() -> bool {
    true
}

impl PluginDescriptor {
    /// Minimal descriptor for plugins defined in code.
    pub fn new(id: impl Into<String>, name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            version: version.into(),
            author: String::new(),
            default_enabled: false,
            enabled: true,
            icon: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_default_enabled(mut self, default_enabled: bool) -> Self {
        self.default_enabled = default_enabled;
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Checks the fields every descriptor must carry.
    ///
    /// The id must be non-empty and free of whitespace and `/` because it
    /// keys persisted records. The version must be non-empty; whether it is
    /// semver is only reported by [`semver`](Self::semver).
    pub fn validate(&self) -> Result<(), AstrodeckError> {
        if self.id.is_empty() {
            return Err(AstrodeckError::Descriptor(
                "id must not be empty".to_string(),
            ));
        }

        if self.id.chars().any(|c| c.is_whitespace() || c == '/') {
            return Err(AstrodeckError::Descriptor(format!(
                "id '{}' must not contain whitespace or '/'",
                self.id
            )));
        }

        if self.name.trim().is_empty() {
            return Err(AstrodeckError::Descriptor(format!(
                "{}: name must not be empty",
                self.id
            )));
        }

        if self.version.trim().is_empty() {
            return Err(AstrodeckError::Descriptor(format!(
                "{}: version must not be empty",
                self.id
            )));
        }

        Ok(())
    }

    /// The version as semver, or `None` for free-form versions like `1.0`.
    pub fn semver(&self) -> Option<semver::Version> {
        semver::Version::parse(&self.version).ok()
    }
}

/// Parse and validate a plugin descriptor from JSON content.
pub fn parse_descriptor(json: &str) -> Result<PluginDescriptor, AstrodeckError> {
    let descriptor: PluginDescriptor = serde_json::from_str(json)
        .map_err(|e| AstrodeckError::Descriptor(format!("invalid plugin.json: {e}")))?;
    descriptor.validate()?;
    Ok(descriptor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_descriptor() {
        let json = r#"{
            "id": "weather-station",
            "name": "Weather Station",
            "description": "Shows the observatory weather sensors",
            "version": "1.2.0",
            "author": "Touch Observatory",
            "defaultEnabled": false,
            "enabled": true,
            "icon": "CloudIcon"
        }"#;
        let descriptor = parse_descriptor(json).unwrap();
        assert_eq!(descriptor.id, "weather-station");
        assert_eq!(descriptor.name, "Weather Station");
        assert_eq!(descriptor.version, "1.2.0");
        assert!(!descriptor.default_enabled);
        assert!(descriptor.enabled);
        assert_eq!(descriptor.icon.as_deref(), Some("CloudIcon"));
    }

    #[test]
    fn optional_fields_default() {
        let json = r#"{"id": "pins", "name": "Pins", "version": "0.1.0"}"#;
        let descriptor = parse_descriptor(json).unwrap();
        assert!(descriptor.description.is_empty());
        assert!(descriptor.author.is_empty());
        assert!(!descriptor.default_enabled);
        assert!(descriptor.enabled, "legacy hint defaults to visible");
        assert!(descriptor.icon.is_none());
    }

    #[test]
    fn malformed_json_rejected() {
        let err = parse_descriptor("{ not json").unwrap_err();
        assert!(err.to_string().contains("invalid plugin.json"));
    }

    #[test]
    fn missing_id_rejected() {
        let err = parse_descriptor(r#"{"name": "x", "version": "1.0.0"}"#).unwrap_err();
        assert!(err.to_string().contains("invalid plugin.json"));
    }

    #[test]
    fn empty_id_rejected() {
        let err = parse_descriptor(r#"{"id": "", "name": "x", "version": "1.0.0"}"#).unwrap_err();
        assert!(err.to_string().contains("id must not be empty"));
    }

    #[test]
    fn id_with_whitespace_rejected() {
        let err =
            parse_descriptor(r#"{"id": "log collector", "name": "x", "version": "1.0.0"}"#)
                .unwrap_err();
        assert!(err.to_string().contains("whitespace"));
    }

    #[test]
    fn empty_version_rejected() {
        let err = parse_descriptor(r#"{"id": "pins", "name": "Pins", "version": " "}"#)
            .unwrap_err();
        assert!(err.to_string().contains("version must not be empty"));
    }

    #[test]
    fn free_form_version_accepted() {
        let descriptor =
            parse_descriptor(r#"{"id": "pins", "name": "Pins", "version": "1.0"}"#).unwrap();
        assert_eq!(descriptor.version, "1.0");
        assert!(descriptor.semver().is_none());
        assert_eq!(
            PluginDescriptor::new("pins", "Pins", "2.1.0").semver(),
            Some(semver::Version::new(2, 1, 0))
        );
    }

    #[test]
    fn builder_produces_valid_descriptor() {
        let descriptor = PluginDescriptor::new("livestack", "Livestack", "1.0.0")
            .with_author("Astrodeck Contributors")
            .with_default_enabled(true)
            .with_icon("SparklesIcon");
        assert!(descriptor.validate().is_ok());
        assert!(descriptor.default_enabled);
    }
}
