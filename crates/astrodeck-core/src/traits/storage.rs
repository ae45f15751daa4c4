// SPDX-FileCopyrightText: 2026 Astrodeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Key/value persistence contract.

use crate::error::AstrodeckError;

/// A string key/value store that survives application restarts.
///
/// Values are opaque serialized documents; the registry owns their format.
pub trait StateStore: Send + Sync {
    /// Reads the value stored under `key`, or `None` if nothing was saved yet.
    fn load(&self, key: &str) -> Result<Option<String>, AstrodeckError>;

    /// Replaces the value stored under `key`.
    fn save(&self, key: &str, value: &str) -> Result<(), AstrodeckError>;
}
