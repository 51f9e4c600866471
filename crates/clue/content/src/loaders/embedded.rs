//! Content shipped inside the crate.
//!
//! The data files under `data/` are embedded at compile time so the standard
//! registry can be built without a data directory on disk.

use clue_core::{ContentConfig, ValidationConfig};

use crate::clue::ClueStep;
use crate::groups::GroupSpec;
use crate::loaders::{ClueLoader, ConfigLoader, GroupLoader, LoadResult, VariationLoader};
use crate::registry::RequirementRegistry;
use crate::variations::VariationTable;

const VARIATIONS_RON: &str = include_str!("../../data/variations.ron");
const GROUPS_RON: &str = include_str!("../../data/groups.ron");
const CLUES_RON: &str = include_str!("../../data/clues.ron");
const CONFIG_TOML: &str = include_str!("../../data/config.toml");

/// The shipped item variation table.
pub fn variations() -> LoadResult<VariationTable> {
    VariationLoader::parse(VARIATIONS_RON)
}

/// The shipped requirement group definitions.
pub fn groups() -> LoadResult<Vec<GroupSpec>> {
    GroupLoader::parse(GROUPS_RON)
}

/// The shipped clue steps.
pub fn clues() -> LoadResult<Vec<ClueStep>> {
    ClueLoader::parse(CLUES_RON)
}

/// The shipped content configuration.
pub fn config() -> LoadResult<ContentConfig> {
    ConfigLoader::parse(CONFIG_TOML)
}

/// Builds the standard registry from the shipped groups and variation table.
pub fn standard_registry() -> LoadResult<RequirementRegistry> {
    standard_registry_with(&config()?.validation)
}

/// Builds the standard registry under an explicit validation policy.
pub fn standard_registry_with(validation: &ValidationConfig) -> LoadResult<RequirementRegistry> {
    let variations = variations()?;
    let groups = groups()?;
    Ok(RequirementRegistry::build(&groups, &variations, validation)?)
}
