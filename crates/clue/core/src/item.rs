//! Item identifiers and held-item state.
//!
//! - [`ItemId`]: key of one concrete item variant
//! - [`Item`]: a stack of one item held by the player
//! - [`PlayerItems`]: inventory and equipment containers tested by requirements

use core::fmt;

/// Identifier of one concrete item variant (a specific tier, charge state or
/// recolour of an item).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ItemId(pub u32);

impl ItemId {
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for ItemId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stack of items held in a container slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub id: ItemId,
    pub quantity: u32,
}

impl Item {
    pub const fn new(id: ItemId, quantity: u32) -> Self {
        Self { id, quantity }
    }

    /// A single item of the given id.
    pub const fn single(id: ItemId) -> Self {
        Self { id, quantity: 1 }
    }
}

/// Items the player currently holds.
///
/// Requirements are tested against inventory and equipment together, so
/// [`PlayerItems::all_items`] yields both containers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerItems {
    pub inventory: Vec<Item>,
    pub equipment: Vec<Item>,
}

impl PlayerItems {
    pub fn new(inventory: Vec<Item>, equipment: Vec<Item>) -> Self {
        Self {
            inventory,
            equipment,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a holder whose inventory contains one of each id.
    pub fn from_ids(ids: impl IntoIterator<Item = ItemId>) -> Self {
        Self {
            inventory: ids.into_iter().map(Item::single).collect(),
            equipment: Vec::new(),
        }
    }

    /// Inventory followed by equipment, skipping empty stacks.
    pub fn all_items(&self) -> Vec<Item> {
        self.inventory
            .iter()
            .chain(self.equipment.iter())
            .filter(|item| item.quantity > 0)
            .copied()
            .collect()
    }

    /// Returns true if any container holds at least one of `id`.
    pub fn contains(&self, id: ItemId) -> bool {
        self.inventory
            .iter()
            .chain(self.equipment.iter())
            .any(|item| item.id == id && item.quantity > 0)
    }
}
