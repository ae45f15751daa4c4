// SPDX-FileCopyrightText: 2026 Astrodeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Host-facing trait definitions.
//!
//! The registry only talks to the outside world through these seams: the
//! host router it mounts plugin routes into, and the key/value store that
//! keeps user preferences across sessions.

pub mod router;
pub mod storage;

pub use router::Router;
pub use storage::StateStore;
