//! Lookup of interchangeable item variants.

use crate::item::ItemId;

/// Read-only source of item variation groups.
///
/// A variation group maps a canonical item to every identifier that is
/// functionally interchangeable with it (charge states, recolours, broken and
/// repaired forms). The table is owned by the caller; registry construction
/// only reads it.
pub trait VariationOracle: Send + Sync {
    /// Returns the ordered variation set of `canonical`.
    ///
    /// Implementations may return an empty vector; groups built from it are
    /// never satisfied.
    fn variations(&self, canonical: ItemId) -> Vec<ItemId>;

    /// Returns the canonical item that `id` is a variant of, if known.
    fn canonical(&self, id: ItemId) -> Option<ItemId> {
        let _ = id;
        None
    }
}

impl<T: VariationOracle + ?Sized> VariationOracle for &T {
    #[inline]
    fn variations(&self, canonical: ItemId) -> Vec<ItemId> {
        (**self).variations(canonical)
    }

    #[inline]
    fn canonical(&self, id: ItemId) -> Option<ItemId> {
        (**self).canonical(id)
    }
}
