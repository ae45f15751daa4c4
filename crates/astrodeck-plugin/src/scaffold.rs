// SPDX-FileCopyrightText: 2026 Astrodeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Generates the skeleton of a new on-disk plugin.

use std::path::{Path, PathBuf};

use astrodeck_core::AstrodeckError;

use crate::descriptor::{DESCRIPTOR_FILE, PluginDescriptor};

/// Version written into freshly scaffolded descriptors.
pub const SCAFFOLD_VERSION: &str = "1.0.0";

/// Derives a plugin id from a display name: lowercased, whitespace runs become `-`.
pub fn name_to_id(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Creates `<target_dir>/<id>/plugin.json` for a new plugin.
///
/// The plugin starts disabled on first discovery and visible in the
/// catalog. Refuses an empty name and an existing plugin directory.
/// Returns the path of the written descriptor.
pub fn scaffold_plugin(
    name: &str,
    description: &str,
    author: &str,
    target_dir: &Path,
) -> Result<PathBuf, AstrodeckError> {
    let id = name_to_id(name);
    if id.is_empty() {
        return Err(AstrodeckError::Descriptor(
            "plugin name must not be empty".into(),
        ));
    }

    let descriptor = PluginDescriptor::new(&id, name.trim(), SCAFFOLD_VERSION)
        .with_description(description)
        .with_author(author)
        .with_default_enabled(false);
    descriptor.validate()?;

    let plugin_dir = target_dir.join(&id);
    if plugin_dir.exists() {
        return Err(AstrodeckError::Descriptor(format!(
            "plugin directory already exists: {}",
            plugin_dir.display()
        )));
    }

    let json = serde_json::to_string_pretty(&descriptor)
        .map_err(|e| AstrodeckError::Internal(format!("failed to serialize descriptor: {e}")))?;

    std::fs::create_dir_all(&plugin_dir).map_err(AstrodeckError::storage)?;
    let path = plugin_dir.join(DESCRIPTOR_FILE);
    std::fs::write(&path, json).map_err(AstrodeckError::storage)?;

    tracing::info!(plugin_id = %id, path = %path.display(), "plugin scaffolded");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::parse_descriptor;

    #[test]
    fn name_to_id_collapses_whitespace() {
        assert_eq!(name_to_id("Sky  Quality\tMeter"), "sky-quality-meter");
        assert_eq!(name_to_id("  Pins "), "pins");
        assert_eq!(name_to_id("   "), "");
    }

    #[test]
    fn scaffold_writes_parsable_descriptor() {
        let tmp = tempfile::tempdir().unwrap();
        let path = scaffold_plugin("Sky Quality", "SQM readings", "Jo", tmp.path()).unwrap();

        assert_eq!(path, tmp.path().join("sky-quality").join(DESCRIPTOR_FILE));
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains('\n'), "descriptor is pretty-printed");

        let descriptor = parse_descriptor(&raw).unwrap();
        assert_eq!(descriptor.id, "sky-quality");
        assert_eq!(descriptor.name, "Sky Quality");
        assert_eq!(descriptor.version, SCAFFOLD_VERSION);
        assert_eq!(descriptor.author, "Jo");
        assert!(!descriptor.default_enabled);
        assert!(descriptor.enabled);
    }

    #[test]
    fn scaffold_refuses_existing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        scaffold_plugin("Pins", "", "", tmp.path()).unwrap();

        let err = scaffold_plugin("pins", "", "", tmp.path()).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn scaffold_refuses_empty_name() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(scaffold_plugin(" ", "", "", tmp.path()).is_err());
    }
}
