// SPDX-FileCopyrightText: 2026 Astrodeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Router contract consumed by plugin installers.

use crate::error::AstrodeckError;
use crate::types::RouteDefinition;

/// The host application's router.
///
/// Only route addition is part of the contract; there is no removal
/// primitive, so a mounted plugin route stays mounted for the session.
pub trait Router: Send + Sync {
    /// Mounts `route`.
    ///
    /// Implementations return [`AstrodeckError::DuplicateRoute`] when the path
    /// is already mounted. Callers treat that as success.
    fn add_route(&self, route: RouteDefinition) -> Result<(), AstrodeckError>;

    /// Returns true if a route is mounted at `path`.
    fn has_route(&self, path: &str) -> bool;
}
