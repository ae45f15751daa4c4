// SPDX-FileCopyrightText: 2026 Astrodeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared by the registry, the router contract and plugins.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Opaque handle to the host application, supplied once at startup.
///
/// Plugins receive it during install. The registry never inspects it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppHandle {
    /// Display name of the host application.
    pub name: String,
    /// Version string of the host application.
    pub version: String,
}

impl AppHandle {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

/// Route metadata consumed by the host router's navigation guards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteMeta {
    /// The route may only be entered once the equipment connection is set up.
    pub requires_setup: bool,
}

/// A route handed to [`Router::add_route`](crate::Router::add_route).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDefinition {
    /// Mount path, e.g. `/plugin3`.
    pub path: String,
    /// Name of the view component rendered at this path.
    pub component: String,
    pub meta: RouteMeta,
}

impl RouteDefinition {
    /// A route that requires an established equipment setup.
    pub fn guarded(path: impl Into<String>, component: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            component: component.into(),
            meta: RouteMeta {
                requires_setup: true,
            },
        }
    }
}

/// A visible navigation entry for one enabled, installed plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationItem {
    pub plugin_id: String,
    pub path: String,
    pub icon: String,
    pub title: String,
}

/// Lifecycle stage of a plugin within the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "kebab-case")]
pub enum PluginState {
    /// Known to the registry but switched off by the user.
    Disabled,
    /// Enabled, but no navigation entry has been installed yet.
    Pending,
    /// Enabled and reachable through the navigation.
    Installed,
}
