// SPDX-FileCopyrightText: 2026 Astrodeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin registry: the single source of truth for plugin state.
//!
//! The `PluginRegistry` owns the ordered record list, the navigation index
//! and the host handles. It restores records from its [`StateStore`] when
//! created, reconciles them with the catalog once per session, and writes
//! them back after every change to a persisted field.
//!
//! Installs run strictly one after another. The slot allocator relies on
//! this: each install sees every path assigned by the installs before it.

use std::sync::Arc;

use astrodeck_core::{AppHandle, NavigationItem, PluginState, Router, StateStore};

use crate::catalog::PluginCatalog;
use crate::descriptor::PluginDescriptor;
use crate::navigation::NavigationIndex;
use crate::reconcile;
use crate::record::{PersistedState, PluginRecord};
use crate::slots;

/// Storage key of the registry document unless configured otherwise.
pub const DEFAULT_STATE_KEY: &str = "plugin-store";

/// Result of one [`PluginRegistry::initialize_plugin`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// The module's install step completed.
    Installed,
    /// Preconditions were not met; nothing was attempted.
    Skipped(SkipReason),
    /// The module's install step returned an error.
    Failed(String),
}

/// Why an install was not attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// `initialize_app_and_router` has not been called.
    NoHost,
    /// No record with this id.
    UnknownPlugin,
    /// The record is disabled.
    Disabled,
    /// The record exists but the catalog has no module for it.
    NoModule,
}

/// Per-plugin results of [`PluginRegistry::initialize_enabled_plugins`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallSummary {
    pub installed: Vec<String>,
    pub skipped: Vec<(String, SkipReason)>,
    pub failed: Vec<(String, String)>,
}

struct HostHandles {
    app: AppHandle,
    router: Arc<dyn Router>,
}

/// Registry of discovered plugins and their navigation entries.
pub struct PluginRegistry {
    catalog: Arc<PluginCatalog>,
    store: Arc<dyn StateStore>,
    state_key: String,
    records: Vec<PluginRecord>,
    navigation: NavigationIndex,
    initialized: bool,
    host: Option<HostHandles>,
}

impl std::fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginRegistry")
            .field("state_key", &self.state_key)
            .field("records", &self.records)
            .field("navigation", &self.navigation)
            .field("initialized", &self.initialized)
            .field("host", &self.host.as_ref().map(|h| &h.app))
            .finish()
    }
}

impl PluginRegistry {
    /// Create a registry under the default storage key.
    pub fn new(catalog: Arc<PluginCatalog>, store: Arc<dyn StateStore>) -> Self {
        Self::with_state_key(catalog, store, DEFAULT_STATE_KEY)
    }

    /// Create a registry and restore records persisted under `state_key`.
    ///
    /// Unreadable or malformed state is treated as a first run.
    pub fn with_state_key(
        catalog: Arc<PluginCatalog>,
        store: Arc<dyn StateStore>,
        state_key: impl Into<String>,
    ) -> Self {
        let state_key = state_key.into();
        let restored = restore(store.as_ref(), &state_key);
        tracing::debug!(
            key = %state_key,
            records = restored.plugins.len(),
            "plugin state restored"
        );

        Self {
            catalog,
            store,
            state_key,
            records: restored.plugins,
            navigation: NavigationIndex::new(),
            initialized: false,
            host: None,
        }
    }

    /// Supplies the host application and router. Accepted once per registry.
    ///
    /// Returns false, leaving the first handles in place, on a repeated call.
    pub fn initialize_app_and_router(&mut self, app: AppHandle, router: Arc<dyn Router>) -> bool {
        if let Some(host) = &self.host {
            tracing::warn!(
                app = %host.app.name,
                "app and router already initialized, ignoring second call"
            );
            return false;
        }
        tracing::debug!(app = %app.name, "host handles set");
        self.host = Some(HostHandles { app, router });
        true
    }

    /// Reconciles the catalog with the restored records. Runs once per session.
    ///
    /// Descriptor fields come from the catalog; `enabled` and `plugin_path`
    /// carry over for known ids; new ids start at their `default_enabled`
    /// and take the smallest free slot; ids missing from the catalog are
    /// dropped.
    pub fn load_and_register_plugins(&mut self) {
        if self.initialized {
            tracing::debug!("plugins already loaded this session");
            return;
        }

        let fresh = self.catalog.descriptors();
        let merged = reconcile::merge(&self.records, &fresh);

        let dropped = self
            .records
            .iter()
            .filter(|old| !merged.iter().any(|r| r.id == old.id))
            .count();
        let added = merged
            .iter()
            .filter(|r| !self.records.iter().any(|old| old.id == r.id))
            .count();

        self.records = merged;
        self.initialized = true;
        self.persist();

        tracing::info!(
            total = self.records.len(),
            added,
            dropped,
            enabled = self.records.iter().filter(|r| r.enabled).count(),
            "plugins registered"
        );
    }

    /// Sets a plugin's enablement.
    ///
    /// Enabling installs the plugin. Disabling removes its navigation item;
    /// the route already mounted in the router stays mounted because the
    /// router has no removal primitive. Hosts should consult
    /// [`is_route_active`](Self::is_route_active) before navigating.
    pub async fn toggle_plugin(&mut self, id: &str, enabled: bool) {
        let Some(record) = self.records.iter_mut().find(|r| r.id == id) else {
            tracing::warn!(plugin_id = %id, "cannot toggle unknown plugin");
            return;
        };

        record.enabled = enabled;
        self.persist();
        tracing::info!(plugin_id = %id, enabled, "plugin toggled");

        if enabled {
            self.initialize_plugin(id).await;
        } else {
            self.navigation.remove(id);
        }
    }

    /// Inserts or updates a record for a self-registering plugin.
    ///
    /// An existing record keeps its `enabled` flag and slot. A new record is
    /// appended with its `default_enabled` and no slot yet; the slot is
    /// allocated on install.
    pub fn register_plugin(&mut self, descriptor: PluginDescriptor) {
        if let Err(e) = descriptor.validate() {
            tracing::warn!(plugin_id = %descriptor.id, error = %e, "rejecting plugin registration");
            return;
        }

        match self.records.iter_mut().find(|r| r.id == descriptor.id) {
            Some(record) => record.refresh(&descriptor),
            None => self.records.push(PluginRecord::discovered(&descriptor)),
        }
        self.persist();
    }

    /// Adds a navigation item, replacing any existing one for the same plugin.
    pub fn add_navigation_item(&mut self, item: NavigationItem) {
        if let Some(old) = self.navigation.upsert(item) {
            tracing::debug!(plugin_id = %old.plugin_id, old_path = %old.path, "navigation item replaced");
        }
    }

    /// Installs every enabled plugin, sequentially in record order.
    ///
    /// A failing plugin is logged and does not stop the others.
    pub async fn initialize_enabled_plugins(&mut self) -> InstallSummary {
        let enabled: Vec<String> = self
            .records
            .iter()
            .filter(|r| r.enabled)
            .map(|r| r.id.clone())
            .collect();

        let mut summary = InstallSummary::default();
        for id in enabled {
            match self.initialize_plugin(&id).await {
                InstallOutcome::Installed => summary.installed.push(id),
                InstallOutcome::Skipped(reason) => summary.skipped.push((id, reason)),
                InstallOutcome::Failed(message) => summary.failed.push((id, message)),
            }
        }

        tracing::info!(
            installed = summary.installed.len(),
            skipped = summary.skipped.len(),
            failed = summary.failed.len(),
            "enabled plugins initialized"
        );
        summary
    }

    /// Loads one plugin's module and awaits its install step.
    ///
    /// Does nothing (beyond logging) without host handles, for an unknown id,
    /// or for a disabled record. Install errors are logged and reported in
    /// the outcome; they never propagate.
    pub async fn initialize_plugin(&mut self, id: &str) -> InstallOutcome {
        let Some(host) = self.host.as_ref() else {
            tracing::warn!(plugin_id = %id, "cannot install plugin before app and router are initialized");
            return InstallOutcome::Skipped(SkipReason::NoHost);
        };
        let app = host.app.clone();
        let router = Arc::clone(&host.router);

        match self.record(id) {
            None => {
                tracing::warn!(plugin_id = %id, "cannot install unknown plugin");
                return InstallOutcome::Skipped(SkipReason::UnknownPlugin);
            }
            Some(record) if !record.enabled => {
                tracing::debug!(plugin_id = %id, "plugin disabled, not installing");
                return InstallOutcome::Skipped(SkipReason::Disabled);
            }
            Some(_) => {}
        }

        let Some(module) = self.catalog.load_module(id) else {
            tracing::warn!(plugin_id = %id, "no module available for plugin");
            return InstallOutcome::Skipped(SkipReason::NoModule);
        };

        match module.install(&app, router.as_ref(), self).await {
            Ok(()) => {
                tracing::info!(plugin_id = %id, path = ?self.plugin_path(id), "plugin installed");
                InstallOutcome::Installed
            }
            Err(e) => {
                tracing::error!(plugin_id = %id, error = %e, "plugin install failed");
                InstallOutcome::Failed(e.to_string())
            }
        }
    }

    /// Returns the plugin's slot, allocating the smallest free one if it has
    /// none or holds a path that is not a canonical slot.
    ///
    /// Returns `None` for an unknown id. Calling this for a record that
    /// already has a slot changes nothing.
    pub fn assign_plugin_path(&mut self, id: &str) -> Option<String> {
        let index = self.records.iter().position(|r| r.id == id)?;
        if let Some(path) = self.records[index]
            .plugin_path
            .as_ref()
            .filter(|p| slots::is_slot(p))
        {
            return Some(path.clone());
        }

        let path = slots::allocate(
            self.records
                .iter()
                .filter_map(|r| r.plugin_path.as_deref()),
        );
        tracing::debug!(plugin_id = %id, %path, "slot allocated");
        self.records[index].plugin_path = Some(path.clone());
        self.persist();
        Some(path)
    }

    /// All records in discovery order.
    pub fn records(&self) -> &[PluginRecord] {
        &self.records
    }

    pub fn record(&self, id: &str) -> Option<&PluginRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn plugin_path(&self, id: &str) -> Option<&str> {
        self.record(id).and_then(|r| r.plugin_path.as_deref())
    }

    pub fn enabled_plugins(&self) -> Vec<&PluginRecord> {
        self.records.iter().filter(|r| r.enabled).collect()
    }

    pub fn navigation_items(&self) -> &[NavigationItem] {
        self.navigation.items()
    }

    /// Lifecycle stage of `id` in this session.
    pub fn plugin_state(&self, id: &str) -> Option<PluginState> {
        let record = self.record(id)?;
        Some(if !record.enabled {
            PluginState::Disabled
        } else if self.navigation.get(id).is_some() {
            PluginState::Installed
        } else {
            PluginState::Pending
        })
    }

    /// Returns true if `path` belongs to an enabled plugin with a navigation item.
    ///
    /// A disabled plugin's route stays mounted for the rest of the session;
    /// this is the guard that keeps it unreachable.
    pub fn is_route_active(&self, path: &str) -> bool {
        self.navigation.links_to(path)
            && self
                .records
                .iter()
                .any(|r| r.enabled && r.plugin_path.as_deref() == Some(path))
    }

    /// True once `load_and_register_plugins` has run this session.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn catalog(&self) -> &PluginCatalog {
        &self.catalog
    }

    fn persist(&self) {
        let state = PersistedState {
            plugins: self.records.clone(),
            is_initialized: self.initialized,
        };

        let result = serde_json::to_string(&state)
            .map_err(astrodeck_core::AstrodeckError::storage)
            .and_then(|raw| self.store.save(&self.state_key, &raw));

        if let Err(e) = result {
            tracing::warn!(key = %self.state_key, error = %e, "failed to persist plugin state");
        }
    }
}

fn restore(store: &dyn StateStore, key: &str) -> PersistedState {
    let raw = match store.load(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return PersistedState::default(),
        Err(e) => {
            tracing::warn!(%key, error = %e, "cannot read plugin state, starting fresh");
            return PersistedState::default();
        }
    };

    match PersistedState::from_json(&raw) {
        Ok(state) => state,
        Err(e) => {
            tracing::warn!(%key, error = %e, "malformed plugin state, starting fresh");
            PersistedState::default()
        }
    }
}
