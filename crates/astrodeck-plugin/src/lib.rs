// SPDX-FileCopyrightText: 2026 Astrodeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin catalog, registry, and install lifecycle.
//!
//! Plugins are discovered from a [`PluginCatalog`], reconciled against the
//! records persisted by a previous session, and installed into the host
//! router one at a time. Each plugin gets a stable `/plugin<N>` route slot
//! from a single gap-filling allocator and, while enabled, one navigation
//! item.

pub mod catalog;
pub mod descriptor;
pub mod installer;
pub mod module;
pub mod navigation;
pub mod persistence;
pub mod reconcile;
pub mod record;
pub mod registry;
pub mod router;
pub mod scaffold;
pub mod slots;

pub use catalog::{CatalogEntry, PluginCatalog, builtin_catalog};
pub use descriptor::{DESCRIPTOR_FILE, PluginDescriptor, parse_descriptor};
pub use installer::{RouteSpec, install_standard_route};
pub use module::{PluginModule, StandardPlugin};
pub use navigation::{DEFAULT_ICON, NavigationIndex};
pub use persistence::{JsonFileStore, MemoryStore};
pub use record::{PersistedState, PluginRecord};
pub use registry::{DEFAULT_STATE_KEY, InstallOutcome, InstallSummary, PluginRegistry, SkipReason};
pub use router::MemoryRouter;
pub use scaffold::{name_to_id, scaffold_plugin};
