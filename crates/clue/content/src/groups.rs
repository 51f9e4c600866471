//! Requirement group definitions.
//!
//! A [`GroupSpec`] is the configuration of one registry entry. Building it
//! against a [`VariationOracle`] follows the same steps for every group:
//!
//! 1. Resolve each source (variation set or literal ids), first-seen order
//! 2. Drop ids on the group's exclusion list
//! 3. Drop repeats of an id already taken
//! 4. Wrap the survivors as single-item requirements under an ANY collection
//!
//! An ALL group does this once per slot and wraps the slot collections.

use std::collections::HashSet;

use clue_core::{ItemId, VariationOracle};
use item_requirements::{ItemRequirement, all, any_of_items};
use serde::{Deserialize, Serialize};

use crate::registry::Finding;

/// Where a group draws item ids from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemSource {
    /// Every variant of a canonical item, as reported by the variation oracle.
    Variations(ItemId),
    /// One id, used as-is.
    Item(ItemId),
    /// Several ids, used as-is.
    Items(Vec<ItemId>),
}

impl ItemSource {
    pub fn resolve<V: VariationOracle + ?Sized>(&self, oracle: &V) -> Vec<ItemId> {
        match self {
            Self::Variations(canonical) => oracle.variations(*canonical),
            Self::Item(id) => vec![*id],
            Self::Items(ids) => ids.clone(),
        }
    }
}

/// Result of expanding a list of sources against an exclusion list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Expansion {
    /// Surviving ids, unique, in first-seen order.
    pub ids: Vec<ItemId>,
    /// Excluded ids that none of the sources produced.
    pub stale_exclusions: Vec<ItemId>,
}

impl Expansion {
    pub fn expand<V: VariationOracle + ?Sized>(
        sources: &[ItemSource],
        exclude: &[ItemId],
        oracle: &V,
    ) -> Self {
        let mut seen = HashSet::new();
        let mut ids = Vec::new();

        for id in sources.iter().flat_map(|source| source.resolve(oracle)) {
            if seen.insert(id) && !exclude.contains(&id) {
                ids.push(id);
            }
        }

        let stale_exclusions = exclude
            .iter()
            .filter(|id| !seen.contains(*id))
            .copied()
            .collect();

        Self {
            ids,
            stale_exclusions,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// One slot of an ALL group, built as an ANY collection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SlotSpec {
    #[serde(default)]
    pub name: String,
    pub sources: Vec<ItemSource>,
    #[serde(default)]
    pub exclude: Vec<ItemId>,
}

impl SlotSpec {
    pub fn new(name: impl Into<String>, sources: Vec<ItemSource>) -> Self {
        Self {
            name: name.into(),
            sources,
            exclude: Vec::new(),
        }
    }

    #[must_use]
    pub fn excluding(mut self, exclude: Vec<ItemId>) -> Self {
        self.exclude = exclude;
        self
    }
}

/// Shape of a group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub enum GroupKind {
    /// Satisfied by any one of the expanded ids.
    Any {
        sources: Vec<ItemSource>,
        #[serde(default)]
        exclude: Vec<ItemId>,
    },
    /// Satisfied when every slot is satisfied.
    All { slots: Vec<SlotSpec> },
}

/// Configuration of one named requirement group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroupSpec {
    /// Lookup key, e.g. `ANY_PICKAXE`.
    pub key: String,
    /// Display name, e.g. `Any Pickaxe`.
    pub name: String,
    pub kind: GroupKind,
}

impl GroupSpec {
    pub fn any(
        key: impl Into<String>,
        name: impl Into<String>,
        sources: Vec<ItemSource>,
        exclude: Vec<ItemId>,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            kind: GroupKind::Any { sources, exclude },
        }
    }

    pub fn all(key: impl Into<String>, name: impl Into<String>, slots: Vec<SlotSpec>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            kind: GroupKind::All { slots },
        }
    }

    /// Builds the requirement and reports anything questionable about the data.
    ///
    /// Findings never stop the build; the caller decides what to do with them.
    pub fn build<V: VariationOracle + ?Sized>(
        &self,
        oracle: &V,
    ) -> (ItemRequirement, Vec<Finding>) {
        let mut findings = Vec::new();

        let requirement = match &self.kind {
            GroupKind::Any { sources, exclude } => {
                let expansion = Expansion::expand(sources, exclude, oracle);
                self.collect_findings(None, &expansion, &mut findings);
                any_of_items(self.name.as_str(), expansion.ids)
            }
            GroupKind::All { slots } => {
                if slots.is_empty() {
                    findings.push(Finding::EmptyGroup {
                        group: self.key.clone(),
                        slot: None,
                    });
                }
                let members = slots
                    .iter()
                    .map(|slot| {
                        let expansion = Expansion::expand(&slot.sources, &slot.exclude, oracle);
                        self.collect_findings(Some(&slot.name), &expansion, &mut findings);
                        any_of_items(slot.name.as_str(), expansion.ids)
                    })
                    .collect();
                all(self.name.as_str(), members)
            }
        };

        (requirement, findings)
    }

    fn collect_findings(
        &self,
        slot: Option<&str>,
        expansion: &Expansion,
        findings: &mut Vec<Finding>,
    ) {
        let slot = slot.map(str::to_owned);
        for item in &expansion.stale_exclusions {
            findings.push(Finding::StaleExclusion {
                group: self.key.clone(),
                slot: slot.clone(),
                item: *item,
            });
        }
        if expansion.is_empty() {
            findings.push(Finding::EmptyGroup {
                group: self.key.clone(),
                slot,
            });
        }
    }
}
