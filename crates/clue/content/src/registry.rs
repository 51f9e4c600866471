//! Registry of named requirement groups.
//!
//! The registry is built once, explicitly, from group definitions and a
//! variation oracle. The result is immutable; consumers borrow it.
//!
//! # Findings
//!
//! Building never fails on questionable data on its own. Stale exclusions and
//! empty groups are turned into [`Finding`]s and handled according to the
//! [`ValidationConfig`]: ignored, logged, or rejected. Duplicate keys are
//! always rejected since lookups would be ambiguous.

use std::collections::HashMap;

use clue_core::{ItemId, PlayerItems, ValidationConfig, ValidationLevel, VariationOracle};
use item_requirements::ItemRequirement;
use tracing::{debug, info, warn};

use crate::error::RegistryError;
use crate::groups::GroupSpec;

/// Something questionable found in the group definitions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Finding {
    /// An excluded id that none of the group's sources produce.
    StaleExclusion {
        group: String,
        slot: Option<String>,
        item: ItemId,
    },
    /// A group or slot that expanded to no ids.
    EmptyGroup { group: String, slot: Option<String> },
    /// A key defined by more than one group.
    DuplicateGroup { group: String },
}

impl Finding {
    pub fn group(&self) -> &str {
        match self {
            Self::StaleExclusion { group, .. }
            | Self::EmptyGroup { group, .. }
            | Self::DuplicateGroup { group } => group,
        }
    }

    /// Policy that applies to this finding.
    pub fn level(&self, config: &ValidationConfig) -> ValidationLevel {
        match self {
            Self::StaleExclusion { .. } => config.stale_exclusions,
            Self::EmptyGroup { .. } => config.empty_groups,
            Self::DuplicateGroup { .. } => ValidationLevel::Deny,
        }
    }

    pub fn into_error(self) -> RegistryError {
        match self {
            Self::StaleExclusion { group, slot, item } => {
                RegistryError::StaleExclusion { group, slot, item }
            }
            Self::EmptyGroup { group, slot } => RegistryError::EmptyGroup { group, slot },
            Self::DuplicateGroup { group } => RegistryError::DuplicateGroup(group),
        }
    }
}

impl core::fmt::Display for Finding {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.clone().into_error())
    }
}

/// A built group and the key it is registered under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisteredGroup {
    pub key: String,
    pub requirement: ItemRequirement,
}

/// Immutable set of named requirement groups, in definition order.
#[derive(Clone, Debug, Default)]
pub struct RequirementRegistry {
    groups: Vec<RegisteredGroup>,
    index: HashMap<String, usize>,
}

impl RequirementRegistry {
    /// Builds every group in `specs` against `oracle`.
    ///
    /// # Errors
    ///
    /// Returns an error for a duplicate key, or for the first finding whose
    /// configured level is [`ValidationLevel::Deny`].
    pub fn build<V: VariationOracle + ?Sized>(
        specs: &[GroupSpec],
        oracle: &V,
        config: &ValidationConfig,
    ) -> Result<Self, RegistryError> {
        let mut groups = Vec::with_capacity(specs.len());
        let mut index = HashMap::with_capacity(specs.len());

        for spec in specs {
            if index.contains_key(&spec.key) {
                return Err(RegistryError::DuplicateGroup(spec.key.clone()));
            }

            let (requirement, findings) = spec.build(oracle);
            for finding in findings {
                apply_policy(finding, config)?;
            }

            debug!(
                target: "clue_content::registry",
                group = %spec.key,
                items = requirement.item_ids().len(),
                "Built requirement group"
            );

            index.insert(spec.key.clone(), groups.len());
            groups.push(RegisteredGroup {
                key: spec.key.clone(),
                requirement,
            });
        }

        info!(
            target: "clue_content::registry",
            groups = groups.len(),
            "Requirement registry ready"
        );

        Ok(Self { groups, index })
    }

    /// Reports every finding in `specs` without building a registry.
    pub fn validate<V: VariationOracle + ?Sized>(specs: &[GroupSpec], oracle: &V) -> Vec<Finding> {
        let mut seen = HashMap::new();
        let mut findings = Vec::new();

        for spec in specs {
            let count = seen.entry(spec.key.as_str()).or_insert(0usize);
            *count += 1;
            if *count == 2 {
                findings.push(Finding::DuplicateGroup {
                    group: spec.key.clone(),
                });
            }
            findings.extend(spec.build(oracle).1);
        }

        findings
    }

    pub fn get(&self, key: &str) -> Option<&ItemRequirement> {
        self.index
            .get(key)
            .map(|&position| &self.groups[position].requirement)
    }

    /// Looks up a group, failing with [`RegistryError::UnknownGroup`].
    pub fn require(&self, key: &str) -> Result<&ItemRequirement, RegistryError> {
        self.get(key)
            .ok_or_else(|| RegistryError::UnknownGroup(key.to_owned()))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Group keys in definition order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.groups.iter().map(|group| group.key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegisteredGroup> + '_ {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Keys of every group that `item_id` contributes to.
    pub fn matching_groups(&self, item_id: ItemId) -> Vec<&str> {
        self.groups
            .iter()
            .filter(|group| group.requirement.fulfilled_by_item(item_id))
            .map(|group| group.key.as_str())
            .collect()
    }

    /// Keys of every group that `items` satisfies.
    pub fn satisfied_groups(&self, items: &PlayerItems) -> Vec<&str> {
        let held = items.all_items();
        self.groups
            .iter()
            .filter(|group| group.requirement.fulfilled_by(&held))
            .map(|group| group.key.as_str())
            .collect()
    }
}

fn apply_policy(finding: Finding, config: &ValidationConfig) -> Result<(), RegistryError> {
    match finding.level(config) {
        ValidationLevel::Ignore => Ok(()),
        ValidationLevel::Warn => {
            warn!(
                target: "clue_content::registry",
                group = finding.group(),
                finding = %finding,
                "Questionable requirement group"
            );
            Ok(())
        }
        ValidationLevel::Deny => Err(finding.into_error()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::groups::{ItemSource, SlotSpec};
    use crate::{VariationEntry, VariationTable};
    use clue_core::{Item, ids};

    fn table() -> VariationTable {
        VariationTable::from_entries([VariationEntry {
            base: ids::DRAGON_DEFENDER,
            name: "Dragon defender".into(),
            variants: vec![
                ids::DRAGON_DEFENDER,
                ids::DRAGON_DEFENDER_T,
                ids::DRAGON_DEFENDER_BROKEN,
            ],
        }])
    }

    fn specs() -> Vec<GroupSpec> {
        vec![
            GroupSpec::any(
                "DEFENDER",
                "Dragon defender",
                vec![ItemSource::Variations(ids::DRAGON_DEFENDER)],
                vec![ids::DRAGON_DEFENDER_BROKEN],
            ),
            GroupSpec::any(
                "ANY_HAMMER",
                "Hammer",
                vec![ItemSource::Items(vec![ids::HAMMER, ids::IMCANDO_HAMMER])],
                Vec::new(),
            ),
            GroupSpec::all(
                "KIT",
                "Defender and hammer",
                vec![
                    SlotSpec::new("defender", vec![ItemSource::Item(ids::DRAGON_DEFENDER)]),
                    SlotSpec::new("hammer", vec![ItemSource::Item(ids::HAMMER)]),
                ],
            ),
        ]
    }

    #[test]
    fn build_keeps_definition_order() {
        let registry =
            RequirementRegistry::build(&specs(), &table(), &ValidationConfig::default())
                .expect("registry builds");

        assert_eq!(registry.len(), 3);
        assert_eq!(
            registry.keys().collect::<Vec<_>>(),
            vec!["DEFENDER", "ANY_HAMMER", "KIT"]
        );
        assert_eq!(
            registry.get("DEFENDER").map(ItemRequirement::item_ids),
            Some(vec![ids::DRAGON_DEFENDER, ids::DRAGON_DEFENDER_T])
        );
    }

    #[test]
    fn duplicate_key_is_rejected() {
        let mut specs = specs();
        specs.push(specs[1].clone());

        let err = RequirementRegistry::build(&specs, &table(), &ValidationConfig::default())
            .expect_err("duplicate key");
        assert_eq!(err, RegistryError::DuplicateGroup("ANY_HAMMER".into()));

        let findings = RequirementRegistry::validate(&specs, &table());
        assert_eq!(
            findings,
            vec![Finding::DuplicateGroup {
                group: "ANY_HAMMER".into()
            }]
        );
    }

    #[test]
    fn deny_policy_turns_stale_exclusion_into_error() {
        let specs = vec![GroupSpec::any(
            "ANY_HAMMER",
            "Hammer",
            vec![ItemSource::Item(ids::HAMMER)],
            vec![ids::DRAGON_DEFENDER_BROKEN],
        )];
        let deny = ValidationConfig {
            stale_exclusions: ValidationLevel::Deny,
            empty_groups: ValidationLevel::Warn,
        };

        let err = RequirementRegistry::build(&specs, &table(), &deny).expect_err("stale");
        assert!(matches!(err, RegistryError::StaleExclusion { item, .. } if item == ids::DRAGON_DEFENDER_BROKEN));

        let lenient = ValidationConfig::uniform(ValidationLevel::Ignore);
        assert!(RequirementRegistry::build(&specs, &table(), &lenient).is_ok());
    }

    #[test]
    fn empty_group_is_kept_unless_denied() {
        let specs = vec![GroupSpec::any("NONE", "Nothing", Vec::new(), Vec::new())];

        let registry =
            RequirementRegistry::build(&specs, &table(), &ValidationConfig::default())
                .expect("empty group tolerated");
        let group = registry.get("NONE").expect("registered");
        assert!(!group.fulfilled_by(&[Item::single(ids::HAMMER)]));

        let deny = ValidationConfig::uniform(ValidationLevel::Deny);
        assert!(matches!(
            RequirementRegistry::build(&specs, &table(), &deny),
            Err(RegistryError::EmptyGroup { .. })
        ));
    }

    #[test]
    fn matching_and_satisfied_groups() {
        let registry =
            RequirementRegistry::build(&specs(), &table(), &ValidationConfig::default())
                .expect("registry builds");

        assert_eq!(
            registry.matching_groups(ids::DRAGON_DEFENDER),
            vec!["DEFENDER", "KIT"]
        );
        assert!(registry.matching_groups(ids::DRAGON_DEFENDER_BROKEN).is_empty());

        let items = PlayerItems::new(
            vec![Item::single(ids::HAMMER)],
            vec![Item::single(ids::DRAGON_DEFENDER)],
        );
        assert_eq!(
            registry.satisfied_groups(&items),
            vec!["DEFENDER", "ANY_HAMMER", "KIT"]
        );
    }

    #[test]
    fn require_unknown_group_fails() {
        let registry = RequirementRegistry::default();
        assert_eq!(
            registry.require("ANY_PICKAXE"),
            Err(RegistryError::UnknownGroup("ANY_PICKAXE".into()))
        );
    }
}
