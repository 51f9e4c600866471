//! Clue steps that reference registry groups.

use clue_core::{ClueKind, PlayerItems, WorldPoint};
use serde::{Deserialize, Serialize};

use crate::error::RegistryError;
use crate::registry::RequirementRegistry;

/// One clue step and the requirement groups it asks for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClueStep {
    pub text: String,
    pub kind: ClueKind,
    /// Registry keys of the required groups.
    #[serde(default)]
    pub requirements: Vec<String>,
}

/// Which of a step's groups the player's items satisfy.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepProgress {
    pub satisfied: Vec<String>,
    pub missing: Vec<String>,
}

impl StepProgress {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

impl ClueStep {
    pub fn location(&self) -> Option<WorldPoint> {
        self.kind.location()
    }

    /// Checks every referenced group against `items`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownGroup`] for a key the registry lacks.
    pub fn evaluate(
        &self,
        registry: &RequirementRegistry,
        items: &PlayerItems,
    ) -> Result<StepProgress, RegistryError> {
        let held = items.all_items();
        let mut progress = StepProgress::default();

        for key in &self.requirements {
            let requirement = registry.require(key)?;
            if requirement.fulfilled_by(&held) {
                progress.satisfied.push(key.clone());
            } else {
                progress.missing.push(key.clone());
            }
        }

        Ok(progress)
    }

    /// Display names of the unsatisfied parts of each required group.
    ///
    /// For a compound set this names the missing slots rather than the set.
    pub fn missing_names(
        &self,
        registry: &RequirementRegistry,
        items: &PlayerItems,
    ) -> Result<Vec<String>, RegistryError> {
        let held = items.all_items();
        let mut names = Vec::new();

        for key in &self.requirements {
            let requirement = registry.require(key)?;
            names.extend(
                requirement
                    .missing(&held)
                    .into_iter()
                    .map(|req| req.collective_name()),
            );
        }

        Ok(names)
    }
}
