//! Named requirement collections.
//!
//! Collections combine member requirements under a display name:
//! [`AnyRequirementCollection`] (OR logic) and [`AllRequirementsCollection`]
//! (AND logic). Members may themselves be collections, which is how a full
//! outfit is expressed as one ANY group per equipment slot under an ALL.
//!
//! # Empty collections
//!
//! Content normally gives every collection at least one member. When a source
//! expands to nothing the collection is still built, and an empty collection
//! of either kind is never satisfied.

use clue_core::{Item, ItemId};

use crate::ItemRequirement;

/// Satisfied when at least one member requirement is satisfied.
///
/// Evaluation short-circuits on the first satisfied member, analogous to a
/// logical OR (||). Member order never changes the result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnyRequirementCollection {
    name: String,
    requirements: Vec<ItemRequirement>,
}

impl AnyRequirementCollection {
    pub fn new(name: impl Into<String>, requirements: Vec<ItemRequirement>) -> Self {
        Self {
            name: name.into(),
            requirements,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn requirements(&self) -> &[ItemRequirement] {
        &self.requirements
    }

    pub fn len(&self) -> usize {
        self.requirements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }

    pub fn fulfilled_by_item(&self, item_id: ItemId) -> bool {
        self.requirements
            .iter()
            .any(|req| req.fulfilled_by_item(item_id))
    }

    pub fn fulfilled_by(&self, items: &[Item]) -> bool {
        self.requirements.iter().any(|req| req.fulfilled_by(items))
    }
}

/// Satisfied when every member requirement is satisfied.
///
/// Evaluation short-circuits on the first unsatisfied member, analogous to a
/// logical AND (&&).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AllRequirementsCollection {
    name: String,
    requirements: Vec<ItemRequirement>,
}

impl AllRequirementsCollection {
    pub fn new(name: impl Into<String>, requirements: Vec<ItemRequirement>) -> Self {
        Self {
            name: name.into(),
            requirements,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn requirements(&self) -> &[ItemRequirement] {
        &self.requirements
    }

    pub fn len(&self) -> usize {
        self.requirements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }

    /// Returns true if `item_id` contributes to any member.
    ///
    /// A single item can never complete a multi-slot set; this answers whether
    /// the item is part of it, which is what highlighting needs.
    pub fn fulfilled_by_item(&self, item_id: ItemId) -> bool {
        self.requirements
            .iter()
            .any(|req| req.fulfilled_by_item(item_id))
    }

    pub fn fulfilled_by(&self, items: &[Item]) -> bool {
        !self.requirements.is_empty() && self.requirements.iter().all(|req| req.fulfilled_by(items))
    }

    /// Members that `items` does not satisfy, in declaration order.
    pub fn missing<'a>(&'a self, items: &[Item]) -> Vec<&'a ItemRequirement> {
        self.requirements
            .iter()
            .filter(|req| !req.fulfilled_by(items))
            .collect()
    }
}
