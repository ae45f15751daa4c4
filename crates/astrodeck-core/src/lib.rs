// SPDX-FileCopyrightText: 2026 Astrodeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Astrodeck plugin host.
//!
//! This crate provides the error type, the shared route and navigation
//! types, and the traits through which the plugin registry reaches the host
//! application: the [`Router`] and the [`StateStore`].

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::AstrodeckError;
pub use traits::{Router, StateStore};
pub use types::{AppHandle, NavigationItem, PluginState, RouteDefinition, RouteMeta};
