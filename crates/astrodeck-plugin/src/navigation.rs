// SPDX-FileCopyrightText: 2026 Astrodeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Navigation entries contributed by installed plugins.

use astrodeck_core::NavigationItem;

/// Icon used when neither the plugin nor its descriptor names one.
pub const DEFAULT_ICON: &str = "PuzzlePieceIcon";

/// Ordered navigation entries, at most one per plugin id.
///
/// Entries keep insertion order; re-adding a plugin moves it to the end,
/// matching the order in which plugins finished installing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationIndex {
    items: Vec<NavigationItem>,
}

impl NavigationIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `item`, replacing any entry for the same plugin id.
    ///
    /// Returns the replaced entry, if any.
    pub fn upsert(&mut self, item: NavigationItem) -> Option<NavigationItem> {
        let replaced = self.remove(&item.plugin_id);
        self.items.push(item);
        replaced
    }

    /// Removes the entry for `plugin_id`.
    pub fn remove(&mut self, plugin_id: &str) -> Option<NavigationItem> {
        let pos = self.items.iter().position(|i| i.plugin_id == plugin_id)?;
        Some(self.items.remove(pos))
    }

    pub fn get(&self, plugin_id: &str) -> Option<&NavigationItem> {
        self.items.iter().find(|i| i.plugin_id == plugin_id)
    }

    /// Returns true if some entry links to `path`.
    pub fn links_to(&self, path: &str) -> bool {
        self.items.iter().any(|i| i.path == path)
    }

    pub fn items(&self) -> &[NavigationItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
