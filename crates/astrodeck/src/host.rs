// SPDX-FileCopyrightText: 2026 Astrodeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Host startup shared by every plugin command.
//!
//! Builds the catalog from the configured sources, restores the registry
//! from the state directory, hands it the app and router, and installs
//! every enabled plugin.

use std::path::Path;
use std::sync::Arc;

use astrodeck_config::AstrodeckConfig;
use astrodeck_core::AppHandle;
use astrodeck_plugin::{
    InstallSummary, JsonFileStore, MemoryRouter, PluginCatalog, PluginRegistry, builtin_catalog,
};
use tracing::{info, warn};

/// A started host: the registry after installs, and the router it mounted into.
pub struct Host {
    pub registry: PluginRegistry,
    pub router: Arc<MemoryRouter>,
    pub summary: InstallSummary,
}

/// Assembles the catalog from the built-in plugins and the descriptor directory.
///
/// Built-ins come first so their ids win over on-disk descriptors.
pub fn build_catalog(config: &AstrodeckConfig) -> PluginCatalog {
    let mut catalog = if config.plugins.builtin {
        builtin_catalog()
    } else {
        PluginCatalog::new()
    };

    if let Some(dir) = &config.plugins.directory {
        let added = catalog.load_dir(Path::new(dir));
        info!(directory = %dir, added, "plugin directory loaded");
    }

    if catalog.is_empty() {
        warn!("plugin catalog is empty");
    }
    catalog
}

/// Starts the registry: reconcile, supply host handles, install enabled plugins.
pub async fn start(config: &AstrodeckConfig) -> Host {
    let catalog = Arc::new(build_catalog(config));
    let store = Arc::new(JsonFileStore::new(config.storage.state_dir_path()));

    let mut registry =
        PluginRegistry::with_state_key(catalog, store, config.storage.state_key.clone());
    registry.load_and_register_plugins();

    let router = Arc::new(MemoryRouter::new());
    let app = AppHandle::new(&config.app.name, env!("CARGO_PKG_VERSION"));
    registry.initialize_app_and_router(app, router.clone());

    let summary = registry.initialize_enabled_plugins().await;
    for (id, message) in &summary.failed {
        warn!(plugin_id = %id, error = %message, "plugin unavailable this session");
    }

    Host {
        registry,
        router,
        summary,
    }
}

/// Initializes the tracing subscriber with the given log level.
pub fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("astrodeck={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
