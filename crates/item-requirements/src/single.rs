//! Requirement on one concrete item.

use clue_core::{Item, ItemId};

/// Satisfied when the player holds the wrapped item id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SingleItemRequirement {
    item_id: ItemId,
}

impl SingleItemRequirement {
    pub const fn new(item_id: ItemId) -> Self {
        Self { item_id }
    }

    #[inline]
    pub const fn item_id(&self) -> ItemId {
        self.item_id
    }

    #[inline]
    pub fn fulfilled_by_item(&self, item_id: ItemId) -> bool {
        self.item_id == item_id
    }

    /// Returns true if any non-empty stack in `items` has the wrapped id.
    pub fn fulfilled_by(&self, items: &[Item]) -> bool {
        items
            .iter()
            .any(|item| item.id == self.item_id && item.quantity > 0)
    }

    pub fn collective_name(&self) -> String {
        format!("item {}", self.item_id)
    }
}
