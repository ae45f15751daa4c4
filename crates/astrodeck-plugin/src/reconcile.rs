// SPDX-FileCopyrightText: 2026 Astrodeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reconciliation of persisted records with freshly discovered descriptors.

use std::collections::{HashMap, HashSet};

use crate::descriptor::PluginDescriptor;
use crate::record::PluginRecord;
use crate::slots;

/// Builds the record list for a new session.
///
/// The result follows the discovery order of `fresh`. For each descriptor:
/// - descriptor fields always come from `fresh`,
/// - `enabled` is carried over from `old` when the id was known, else it
///   is the descriptor's `default_enabled`,
/// - `plugin_path` is carried over when the id was known, else the
///   smallest free slot is allocated.
///
/// Ids present only in `old` are dropped. Carried paths are claimed before
/// any allocation, so a new plugin never takes the slot of a surviving one.
/// A carried path that is not a canonical `/plugin<N>` slot, or that an
/// earlier record already claimed, is reallocated.
pub fn merge(old: &[PluginRecord], fresh: &[PluginDescriptor]) -> Vec<PluginRecord> {
    let mut previous: HashMap<&str, &PluginRecord> = HashMap::with_capacity(old.len());
    for record in old {
        previous.entry(record.id.as_str()).or_insert(record);
    }

    let mut seen: HashSet<&str> = HashSet::with_capacity(fresh.len());
    let mut claimed: HashSet<String> = HashSet::new();
    let mut merged: Vec<PluginRecord> = Vec::with_capacity(fresh.len());

    for descriptor in fresh {
        if !seen.insert(descriptor.id.as_str()) {
            continue;
        }

        let record = match previous.get(descriptor.id.as_str()) {
            Some(prev) => {
                let path = prev
                    .plugin_path
                    .as_ref()
                    .filter(|p| slots::is_slot(p) && claimed.insert((*p).clone()))
                    .cloned();
                PluginRecord::with_state(descriptor, prev.enabled, path)
            }
            None => PluginRecord::discovered(descriptor),
        };
        merged.push(record);
    }

    for record in merged.iter_mut().filter(|r| r.plugin_path.is_none()) {
        let path = slots::allocate(claimed.iter().map(String::as_str));
        claimed.insert(path.clone());
        record.plugin_path = Some(path);
    }

    merged
}
