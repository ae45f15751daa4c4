// SPDX-FileCopyrightText: 2026 Astrodeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The capability interface every plugin module implements.

use astrodeck_core::{AppHandle, AstrodeckError, Router};
use async_trait::async_trait;

use crate::descriptor::PluginDescriptor;
use crate::installer;
use crate::navigation::DEFAULT_ICON;
use crate::registry::PluginRegistry;

/// A loadable plugin: static metadata plus an install step.
///
/// `install` receives the registry explicitly. It must only use the
/// registry's public operations (read its record, assign its path, add its
/// navigation item). The registry awaits each install before starting the
/// next, so an implementation may suspend freely.
#[async_trait]
pub trait PluginModule: Send + Sync {
    /// The descriptor this module was built from.
    fn metadata(&self) -> &PluginDescriptor;

    /// Mounts the plugin's route and, when enabled, its navigation item.
    async fn install(
        &self,
        app: &AppHandle,
        router: &dyn Router,
        registry: &mut PluginRegistry,
    ) -> Result<(), AstrodeckError>;
}

/// A plugin whose install step is the standard route + navigation wiring.
///
/// Used for descriptors discovered on disk and for the built-in plugins.
#[derive(Debug, Clone)]
pub struct StandardPlugin {
    metadata: PluginDescriptor,
    view: String,
    icon: String,
}

impl StandardPlugin {
    /// Builds a module rendering `view`. The icon comes from the descriptor,
    /// falling back to the default navigation icon.
    pub fn new(metadata: PluginDescriptor, view: impl Into<String>) -> Self {
        let icon = metadata
            .icon
            .clone()
            .unwrap_or_else(|| DEFAULT_ICON.to_string());
        Self {
            metadata,
            view: view.into(),
            icon,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn view(&self) -> &str {
        &self.view
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }
}

#[async_trait]
impl PluginModule for StandardPlugin {
    fn metadata(&self) -> &PluginDescriptor {
        &self.metadata
    }

    async fn install(
        &self,
        app: &AppHandle,
        router: &dyn Router,
        registry: &mut PluginRegistry,
    ) -> Result<(), AstrodeckError> {
        let path = installer::install_standard_route(
            registry,
            router,
            installer::RouteSpec {
                plugin_id: &self.metadata.id,
                view: &self.view,
                icon: &self.icon,
                title: &self.metadata.name,
            },
        )?;
        tracing::debug!(plugin_id = %self.metadata.id, %path, app = %app.name, "plugin installed");
        Ok(())
    }
}
