//! In-memory item variation table.

use std::collections::HashMap;

use clue_core::{ItemId, VariationOracle};
use serde::{Deserialize, Serialize};

/// One variation group as stored in `variations.ron`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VariationEntry {
    /// Canonical item of the group.
    pub base: ItemId,
    #[serde(default)]
    pub name: String,
    /// Every interchangeable id, canonical id included.
    pub variants: Vec<ItemId>,
}

/// [`VariationOracle`] backed by a static table.
///
/// Ids without an entry have no known variants and resolve to themselves.
#[derive(Clone, Debug, Default)]
pub struct VariationTable {
    groups: HashMap<ItemId, Vec<ItemId>>,
    names: HashMap<ItemId, String>,
    canonical: HashMap<ItemId, ItemId>,
}

impl VariationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from entries; a later entry for the same base replaces
    /// an earlier one.
    pub fn from_entries(entries: impl IntoIterator<Item = VariationEntry>) -> Self {
        let mut table = Self::new();
        for entry in entries {
            table.add_entry(entry);
        }
        table
    }

    /// Add a variation group.
    pub fn add_entry(&mut self, entry: VariationEntry) {
        for variant in &entry.variants {
            self.canonical.insert(*variant, entry.base);
        }
        if !entry.name.is_empty() {
            self.names.insert(entry.base, entry.name);
        }
        self.groups.insert(entry.base, entry.variants);
    }

    /// Display name recorded for a canonical item.
    pub fn name(&self, base: ItemId) -> Option<&str> {
        self.names.get(&base).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl VariationOracle for VariationTable {
    fn variations(&self, canonical: ItemId) -> Vec<ItemId> {
        self.groups
            .get(&canonical)
            .cloned()
            .unwrap_or_else(|| vec![canonical])
    }

    fn canonical(&self, id: ItemId) -> Option<ItemId> {
        self.canonical.get(&id).copied()
    }
}
