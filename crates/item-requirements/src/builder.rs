//! Builder utilities for ergonomic requirement construction.
//!
//! Instead of writing `ItemRequirement::Any(AnyRequirementCollection::new(..))`
//! group definitions use the short forms `item`, `any` and `all`.

use clue_core::ItemId;

use crate::{
    AllRequirementsCollection, AnyRequirementCollection, ItemRequirement, SingleItemRequirement,
};

/// Creates a single-item requirement.
#[inline]
pub fn item(item_id: ItemId) -> ItemRequirement {
    ItemRequirement::Single(SingleItemRequirement::new(item_id))
}

/// Creates an any-of collection.
#[inline]
pub fn any(name: impl Into<String>, requirements: Vec<ItemRequirement>) -> ItemRequirement {
    ItemRequirement::Any(AnyRequirementCollection::new(name, requirements))
}

/// Creates an all-of collection.
#[inline]
pub fn all(name: impl Into<String>, requirements: Vec<ItemRequirement>) -> ItemRequirement {
    ItemRequirement::All(AllRequirementsCollection::new(name, requirements))
}

/// Creates an any-of collection with one single-item member per id.
pub fn any_of_items(
    name: impl Into<String>,
    item_ids: impl IntoIterator<Item = ItemId>,
) -> ItemRequirement {
    any(name, item_ids.into_iter().map(item).collect())
}
