// SPDX-FileCopyrightText: 2026 Astrodeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The standard install step shared by plugin modules.

use astrodeck_core::{AstrodeckError, NavigationItem, RouteDefinition, Router};

use crate::registry::PluginRegistry;

/// What a plugin contributes to the host.
#[derive(Debug, Clone, Copy)]
pub struct RouteSpec<'a> {
    pub plugin_id: &'a str,
    /// View component rendered at the plugin's slot.
    pub view: &'a str,
    pub icon: &'a str,
    /// Navigation title, usually the descriptor name.
    pub title: &'a str,
}

/// Mounts a plugin's route and, if its record is enabled, its navigation item.
///
/// 1. Reads the plugin's record from `registry`.
/// 2. Reuses the record's slot or allocates the smallest free one.
/// 3. Adds a setup-guarded route; a duplicate-path error is swallowed so
///    re-installing in the same session is harmless.
/// 4. Adds the navigation item when the record is enabled.
///
/// Returns the slot path the plugin is mounted at.
pub fn install_standard_route(
    registry: &mut PluginRegistry,
    router: &dyn Router,
    spec: RouteSpec<'_>,
) -> Result<String, AstrodeckError> {
    let path = registry
        .assign_plugin_path(spec.plugin_id)
        .ok_or_else(|| AstrodeckError::PluginNotFound {
            id: spec.plugin_id.to_string(),
        })?;

    match router.add_route(RouteDefinition::guarded(&path, spec.view)) {
        Ok(()) => {}
        Err(AstrodeckError::DuplicateRoute { .. }) => {
            tracing::debug!(plugin_id = spec.plugin_id, %path, "route already mounted");
        }
        Err(e) => return Err(e),
    }

    let enabled = registry
        .record(spec.plugin_id)
        .is_some_and(|record| record.enabled);
    if enabled {
        registry.add_navigation_item(NavigationItem {
            plugin_id: spec.plugin_id.to_string(),
            path: path.clone(),
            icon: spec.icon.to_string(),
            title: spec.title.to_string(),
        });
    }

    Ok(path)
}
