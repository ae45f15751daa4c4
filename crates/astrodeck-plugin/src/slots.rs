// SPDX-FileCopyrightText: 2026 Astrodeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Route slot allocation.
//!
//! Every plugin is mounted at a short numeric slot (`/plugin1`, `/plugin2`,
//! ...). New plugins take the smallest free slot so that numbers freed by
//! removed plugins are reused instead of growing without bound. The same
//! allocator runs at discovery time and at install time.

use std::collections::BTreeSet;

/// Common prefix of every slot path.
pub const SLOT_PREFIX: &str = "/plugin";

/// Formats slot `n` as a route path.
pub fn slot_path(n: u32) -> String {
    format!("{SLOT_PREFIX}{n}")
}

/// Extracts `N` from a canonical slot path `/plugin<N>`, `N >= 1`.
///
/// Any other path (legacy named routes, empty strings, `/plugin` without
/// digits, `/plugin0`, leading zeros, signs or trailing segments) is not a
/// slot and yields `None`.
pub fn parse_slot(path: &str) -> Option<u32> {
    let digits = path.strip_prefix(SLOT_PREFIX)?;
    if digits.is_empty() || digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Returns true if `path` is a canonical slot path.
pub fn is_slot(path: &str) -> bool {
    parse_slot(path).is_some()
}

/// Returns the smallest positive slot number not used by any of `paths`.
pub fn next_free_slot<'a, I>(paths: I) -> u32
where
    I: IntoIterator<Item = &'a str>,
{
    let used: BTreeSet<u32> = paths.into_iter().filter_map(parse_slot).collect();

    let mut candidate = 1;
    for n in &used {
        if *n != candidate {
            break;
        }
        candidate += 1;
    }
    candidate
}

/// Allocates the next free slot path given the paths already assigned.
pub fn allocate<'a, I>(paths: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    slot_path(next_free_slot(paths))
}
