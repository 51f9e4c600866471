//! The requirement node type.
//!
//! [`ItemRequirement`] is a closed set of node kinds, so evaluation is a plain
//! `match` rather than dynamic dispatch. Collections hold their members by
//! value; trees are built bottom-up and cannot contain cycles.

use clue_core::{Item, ItemId};

use crate::{AllRequirementsCollection, AnyRequirementCollection, SingleItemRequirement};

/// A requirement on the items a player holds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ItemRequirement {
    Single(SingleItemRequirement),
    Any(AnyRequirementCollection),
    All(AllRequirementsCollection),
}

impl ItemRequirement {
    /// Returns true if holding just `item_id` satisfies this requirement, or,
    /// for an ALL collection, if the item satisfies one of its members.
    pub fn fulfilled_by_item(&self, item_id: ItemId) -> bool {
        match self {
            Self::Single(req) => req.fulfilled_by_item(item_id),
            Self::Any(req) => req.fulfilled_by_item(item_id),
            Self::All(req) => req.fulfilled_by_item(item_id),
        }
    }

    /// Returns true if `items` satisfies this requirement.
    pub fn fulfilled_by(&self, items: &[Item]) -> bool {
        match self {
            Self::Single(req) => req.fulfilled_by(items),
            Self::Any(req) => req.fulfilled_by(items),
            Self::All(req) => req.fulfilled_by(items),
        }
    }

    /// Display name shown to the player.
    pub fn collective_name(&self) -> String {
        match self {
            Self::Single(req) => req.collective_name(),
            Self::Any(req) => req.name().to_owned(),
            Self::All(req) => req.name().to_owned(),
        }
    }

    /// Parts of this requirement that `items` leaves unsatisfied.
    ///
    /// An ALL collection reports its unsatisfied members; any other
    /// requirement reports itself when unsatisfied. Satisfied requirements
    /// report nothing.
    pub fn missing<'a>(&'a self, items: &[Item]) -> Vec<&'a ItemRequirement> {
        match self {
            Self::All(req) if !req.is_empty() => req.missing(items),
            _ if self.fulfilled_by(items) => Vec::new(),
            _ => vec![self],
        }
    }

    /// Every item id reachable from this requirement, depth first.
    pub fn item_ids(&self) -> Vec<ItemId> {
        let mut ids = Vec::new();
        self.collect_item_ids(&mut ids);
        ids
    }

    fn collect_item_ids(&self, out: &mut Vec<ItemId>) {
        match self {
            Self::Single(req) => out.push(req.item_id()),
            Self::Any(req) => req
                .requirements()
                .iter()
                .for_each(|member| member.collect_item_ids(out)),
            Self::All(req) => req
                .requirements()
                .iter()
                .for_each(|member| member.collect_item_ids(out)),
        }
    }

    /// Direct members of a collection; empty for a single item.
    pub fn members(&self) -> &[ItemRequirement] {
        match self {
            Self::Single(_) => &[],
            Self::Any(req) => req.requirements(),
            Self::All(req) => req.requirements(),
        }
    }
}

impl From<SingleItemRequirement> for ItemRequirement {
    fn from(req: SingleItemRequirement) -> Self {
        Self::Single(req)
    }
}

impl From<AnyRequirementCollection> for ItemRequirement {
    fn from(req: AnyRequirementCollection) -> Self {
        Self::Any(req)
    }
}

impl From<AllRequirementsCollection> for ItemRequirement {
    fn from(req: AllRequirementsCollection) -> Self {
        Self::All(req)
    }
}
