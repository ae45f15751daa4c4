// SPDX-FileCopyrightText: 2026 Astrodeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin catalog: every plugin known to this build.
//!
//! The catalog is the static list of `{id, descriptor, module}` entries the
//! registry discovers from. It never fails as a whole: an entry whose
//! descriptor does not parse, or whose id collides with an earlier entry,
//! is logged and skipped.

use std::path::Path;
use std::sync::Arc;

use astrodeck_core::AstrodeckError;

use crate::descriptor::{DESCRIPTOR_FILE, PluginDescriptor, parse_descriptor};
use crate::module::{PluginModule, StandardPlugin};

/// View rendered by plugins discovered on disk.
pub const GENERIC_VIEW: &str = "PluginView";

/// One catalog entry.
#[derive(Clone)]
pub struct CatalogEntry {
    pub id: String,
    pub descriptor: PluginDescriptor,
    pub module: Arc<dyn PluginModule>,
}

impl std::fmt::Debug for CatalogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogEntry")
            .field("id", &self.id)
            .field("descriptor", &self.descriptor)
            .finish_non_exhaustive()
    }
}

/// Ordered set of plugin modules, keyed by descriptor id.
#[derive(Debug, Clone, Default)]
pub struct PluginCatalog {
    entries: Vec<CatalogEntry>,
}

impl PluginCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a module. Its metadata must validate and its id must be new.
    ///
    /// A version that is not semver is accepted with a warning.
    pub fn register(&mut self, module: Arc<dyn PluginModule>) -> Result<(), AstrodeckError> {
        let descriptor = module.metadata().clone();
        descriptor.validate()?;
        if descriptor.semver().is_none() {
            tracing::warn!(
                plugin_id = %descriptor.id,
                version = %descriptor.version,
                "plugin version is not semver"
            );
        }

        if self.contains(&descriptor.id) {
            return Err(AstrodeckError::Descriptor(format!(
                "duplicate plugin id '{}'",
                descriptor.id
            )));
        }

        self.entries.push(CatalogEntry {
            id: descriptor.id.clone(),
            descriptor,
            module,
        });
        Ok(())
    }

    /// Parses `json` and registers a [`StandardPlugin`] rendering `view`.
    ///
    /// Failures are logged and the entry skipped. Returns whether it was added.
    pub fn register_json(&mut self, json: &str, view: &str, origin: &str) -> bool {
        let descriptor = match parse_descriptor(json) {
            Ok(descriptor) => descriptor,
            Err(e) => {
                tracing::warn!(%origin, error = %e, "skipping plugin with unreadable descriptor");
                return false;
            }
        };

        let id = descriptor.id.clone();
        match self.register(Arc::new(StandardPlugin::new(descriptor, view))) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(%origin, plugin_id = %id, error = %e, "skipping plugin");
                false
            }
        }
    }

    /// Discovers `<dir>/<plugin>/plugin.json` descriptors, in directory-name order.
    ///
    /// Returns the number of plugins added. An unreadable `dir` adds none.
    pub fn load_dir(&mut self, dir: &Path) -> usize {
        let read = match std::fs::read_dir(dir) {
            Ok(read) => read,
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "cannot read plugin directory");
                return 0;
            }
        };

        let mut candidates: Vec<_> = read
            .filter_map(Result::ok)
            .map(|entry| entry.path().join(DESCRIPTOR_FILE))
            .filter(|path| path.is_file())
            .collect();
        candidates.sort();

        let mut added = 0;
        for path in candidates {
            let origin = path.display().to_string();
            match std::fs::read_to_string(&path) {
                Ok(raw) => {
                    if self.register_json(&raw, GENERIC_VIEW, &origin) {
                        added += 1;
                    }
                }
                Err(e) => {
                    tracing::warn!(%origin, error = %e, "skipping unreadable descriptor file");
                }
            }
        }

        tracing::debug!(dir = %dir.display(), added, "plugin directory scanned");
        added
    }

    /// All entries in discovery order.
    pub fn list_plugins(&self) -> Vec<CatalogEntry> {
        self.entries.clone()
    }

    /// Descriptors in discovery order.
    pub fn descriptors(&self) -> Vec<PluginDescriptor> {
        self.entries.iter().map(|e| e.descriptor.clone()).collect()
    }

    /// The module for `id`, if the catalog has one.
    pub fn load_module(&self, id: &str) -> Option<Arc<dyn PluginModule>> {
        self.entries
            .iter()
            .find(|e| e.id == id)
            .map(|e| Arc::clone(&e.module))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Filters entries whose id, name or description contains `query`
    /// (case-insensitive). An empty query returns every entry.
    pub fn search(&self, query: &str) -> Vec<&CatalogEntry> {
        let query_lower = query.to_lowercase();
        self.entries
            .iter()
            .filter(|e| {
                query.is_empty()
                    || e.id.to_lowercase().contains(&query_lower)
                    || e.descriptor.name.to_lowercase().contains(&query_lower)
                    || e.descriptor.description.to_lowercase().contains(&query_lower)
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Descriptors and views of the plugins compiled into the binary.
const BUILTIN_PLUGINS: &[(&str, &str)] = &[
    (
        r#"{"id":"shortcuts","name":"Shortcuts","description":"One-tap actions for frequent equipment commands","version":"1.0.0","author":"Astrodeck Contributors","defaultEnabled":true,"icon":"BoltIcon"}"#,
        "ShortcutsView",
    ),
    (
        r#"{"id":"weather-station","name":"Weather Station","description":"Live readings from the observatory weather sensors","version":"1.0.0","author":"Astrodeck Contributors","defaultEnabled":false,"icon":"CloudIcon"}"#,
        "WeatherStationView",
    ),
    (
        r#"{"id":"hocusfocus","name":"HocusFocus","description":"Autofocus runs with HFR curve inspection","version":"1.1.0","author":"Astrodeck Contributors","defaultEnabled":false,"icon":"HocusFocusIcon"}"#,
        "HocusFocusView",
    ),
    (
        r#"{"id":"livestack","name":"Livestack","description":"Live stacking preview of incoming frames","version":"1.0.0","author":"Astrodeck Contributors","defaultEnabled":false,"icon":"SparklesIcon"}"#,
        "LivestackView",
    ),
    (
        r#"{"id":"webcam","name":"Webcam","description":"All-sky and dome camera streams","version":"1.0.0","author":"Astrodeck Contributors","defaultEnabled":false,"icon":"VideoCameraIcon"}"#,
        "WebcamView",
    ),
    (
        r#"{"id":"telescopius","name":"Telescopius","description":"Target lists imported from Telescopius","version":"1.0.0","author":"Astrodeck Contributors","defaultEnabled":false,"icon":"StarIcon"}"#,
        "TelescopiusView",
    ),
];

/// Returns the catalog of built-in plugins.
pub fn builtin_catalog() -> PluginCatalog {
    let mut catalog = PluginCatalog::new();
    for (json, view) in BUILTIN_PLUGINS {
        catalog.register_json(json, view, "builtin");
    }
    catalog
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn builtin_catalog_parses_every_entry() {
        let catalog = builtin_catalog();
        assert_eq!(catalog.len(), BUILTIN_PLUGINS.len());
        assert!(catalog.contains("weather-station"));
    }

    #[test]
    fn builtin_catalog_order_is_stable() {
        let ids: Vec<String> = builtin_catalog()
            .list_plugins()
            .into_iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids[0], "shortcuts");
        assert_eq!(ids[1], "weather-station");
    }

    #[test]
    fn load_module_returns_matching_metadata() {
        let catalog = builtin_catalog();
        let module = catalog.load_module("hocusfocus").unwrap();
        assert_eq!(module.metadata().id, "hocusfocus");
        assert!(catalog.load_module("missing").is_none());
    }

    #[test]
    fn search_is_case_insensitive() {
        let catalog = builtin_catalog();
        let results = catalog.search("WEATHER");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "weather-station");
    }

    #[test]
    fn search_matches_description() {
        let catalog = builtin_catalog();
        let results = catalog.search("stacking");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "livestack");
    }

    #[test]
    fn search_empty_returns_all() {
        let catalog = builtin_catalog();
        assert_eq!(catalog.search("").len(), catalog.len());
        assert!(catalog.search("xyz_nonexistent").is_empty());
    }

    #[test]
    fn bad_descriptor_is_skipped() {
        let mut catalog = PluginCatalog::new();
        assert!(!catalog.register_json("{broken", GENERIC_VIEW, "test"));
        assert!(catalog.register_json(
            r#"{"id":"pins","name":"Pins","version":"1.0.0"}"#,
            GENERIC_VIEW,
            "test"
        ));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let mut catalog = PluginCatalog::new();
        let descriptor = PluginDescriptor::new("pins", "Pins", "1.0.0");
        catalog
            .register(Arc::new(StandardPlugin::new(descriptor.clone(), "A")))
            .unwrap();

        let err = catalog
            .register(Arc::new(StandardPlugin::new(descriptor, "B")))
            .unwrap_err();
        assert!(err.to_string().contains("duplicate plugin id"));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn load_dir_discovers_sorted_and_skips_invalid() {
        let tmp = tempfile::tempdir().unwrap();
        let write = |dir: &str, body: &str| {
            let plugin_dir = tmp.path().join(dir);
            std::fs::create_dir_all(&plugin_dir).unwrap();
            std::fs::write(plugin_dir.join(DESCRIPTOR_FILE), body).unwrap();
        };
        write("b-pins", r#"{"id":"pins","name":"Pins","version":"1.0.0"}"#);
        write("a-logs", r#"{"id":"logfile-collector","name":"Logs","version":"0.3.0"}"#);
        write("c-bad", r#"{"id":"bad","version":"1.0.0"}"#);
        std::fs::create_dir_all(tmp.path().join("d-empty")).unwrap();

        let mut catalog = PluginCatalog::new();
        assert_eq!(catalog.load_dir(tmp.path()), 2);

        let ids: Vec<String> = catalog.list_plugins().into_iter().map(|e| e.id).collect();
        assert_eq!(ids, vec!["logfile-collector", "pins"]);
    }

    #[traced_test]
    #[test]
    fn free_form_version_is_kept_with_warning() {
        let mut catalog = PluginCatalog::new();
        assert!(catalog.register_json(
            r#"{"id":"pins","name":"Pins","version":"1.0"}"#,
            GENERIC_VIEW,
            "test"
        ));
        assert_eq!(catalog.load_module("pins").unwrap().metadata().version, "1.0");
        assert!(logs_contain("plugin version is not semver"));
    }

    #[test]
    fn load_dir_missing_directory_adds_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let mut catalog = PluginCatalog::new();
        assert_eq!(catalog.load_dir(&tmp.path().join("absent")), 0);
        assert!(catalog.is_empty());
    }
}
