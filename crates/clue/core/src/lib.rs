//! Shared types for clue scroll item requirements.
//!
//! `clue-core` defines the vocabulary used by the requirement combinators and
//! the content loaders: concrete item identifiers, the items a player holds,
//! world locations, the kinds of clue step, and the [`VariationOracle`] seam
//! through which interchangeable item variants are looked up.
//!
//! Nothing in this crate performs I/O. Data files are read by `clue-content`.
pub mod clue;
pub mod config;
pub mod error;
pub mod ids;
pub mod item;
pub mod variation;
pub mod world;

pub use clue::{ClueKind, ClueKindTag};
pub use config::{ContentConfig, ValidationConfig, ValidationLevel};
pub use error::{ClueError, ErrorSeverity};
pub use item::{Item, ItemId, PlayerItems};
pub use variation::VariationOracle;
pub use world::WorldPoint;
