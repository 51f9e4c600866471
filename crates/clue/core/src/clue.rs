//! Clue step kinds.
//!
//! Clue steps differ mainly in whether they point at a place in the world.
//! [`ClueKind`] carries the location for the kinds that have one, and callers
//! switch on the variant instead of asking each step through a trait.

use crate::world::WorldPoint;

/// The kind of a clue step together with its location data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::EnumDiscriminants)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum_discriminants(name(ClueKindTag), derive(strum::Display, strum::EnumString))]
pub enum ClueKind {
    /// Perform an emote at a location while wearing the required items.
    Emote { location: WorldPoint },

    /// Dig at a coordinate.
    Coordinate { location: WorldPoint },

    /// Riddle that may or may not resolve to a fixed tile.
    Cryptic { location: Option<WorldPoint> },

    /// Holder for shared requirement collections; never has a location.
    Requirements,
}

impl ClueKind {
    /// Location of the step, if the kind carries one.
    pub const fn location(&self) -> Option<WorldPoint> {
        match self {
            Self::Emote { location } | Self::Coordinate { location } => Some(*location),
            Self::Cryptic { location } => *location,
            Self::Requirements => None,
        }
    }

    /// Returns true if this kind of step can point at a world location.
    pub const fn has_location(&self) -> bool {
        match self {
            Self::Emote { .. } | Self::Coordinate { .. } | Self::Cryptic { .. } => true,
            Self::Requirements => false,
        }
    }

    pub fn tag(&self) -> ClueKindTag {
        ClueKindTag::from(self)
    }
}
