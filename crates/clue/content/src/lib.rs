//! Data-driven item requirement content and loaders.
//!
//! This crate houses the shipped clue content and provides loaders for
//! RON/TOML data files:
//! - Item variation table (data-driven via RON)
//! - Requirement group definitions and exclusion lists (data-driven via RON)
//! - Clue steps referencing those groups (data-driven via RON)
//! - Content configuration (data-driven via TOML)
//!
//! The [`RequirementRegistry`] is built once from group definitions and a
//! [`clue_core::VariationOracle`], then borrowed by whatever evaluates clue
//! steps against the player's items.

pub mod clue;
pub mod error;
pub mod groups;
pub mod registry;
pub mod variations;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use clue::{ClueStep, StepProgress};
pub use error::RegistryError;
pub use groups::{Expansion, GroupKind, GroupSpec, ItemSource, SlotSpec};
pub use registry::{Finding, RegisteredGroup, RequirementRegistry};
pub use variations::{VariationEntry, VariationTable};

#[cfg(feature = "loaders")]
pub use loaders::{
    ClueLoader, ConfigLoader, ContentFactory, GroupLoader, VariationLoader, embedded,
};
