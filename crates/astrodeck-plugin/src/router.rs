// SPDX-FileCopyrightText: 2026 Astrodeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-process router used by the CLI host and by tests.

use std::sync::{Mutex, MutexGuard};

use astrodeck_core::{AstrodeckError, RouteDefinition, Router};

/// A router that records mounted routes in memory.
///
/// Like a browser router it has no removal primitive. Adding a path that is
/// already mounted fails with [`AstrodeckError::DuplicateRoute`].
#[derive(Debug, Default)]
pub struct MemoryRouter {
    routes: Mutex<Vec<RouteDefinition>>,
}

impl MemoryRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of mounted routes in mount order.
    pub fn routes(&self) -> Vec<RouteDefinition> {
        self.lock().clone()
    }

    pub fn route(&self, path: &str) -> Option<RouteDefinition> {
        self.lock().iter().find(|r| r.path == path).cloned()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<RouteDefinition>> {
        // Poisoning is ignored: every critical section is a single push or read.
        self.routes.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Router for MemoryRouter {
    fn add_route(&self, route: RouteDefinition) -> Result<(), AstrodeckError> {
        let mut routes = self.lock();
        if routes.iter().any(|r| r.path == route.path) {
            return Err(AstrodeckError::DuplicateRoute { path: route.path });
        }
        tracing::debug!(path = %route.path, component = %route.component, "route mounted");
        routes.push(route);
        Ok(())
    }

    fn has_route(&self, path: &str) -> bool {
        self.lock().iter().any(|r| r.path == path)
    }
}
