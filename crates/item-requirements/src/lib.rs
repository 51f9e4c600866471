//! Composable item requirements for clue steps.
//!
//! A requirement answers one question: does a set of held items satisfy it?
//!
//! - [`SingleItemRequirement`]: one concrete item id
//! - [`AnyRequirementCollection`]: satisfied when at least one member is (OR)
//! - [`AllRequirementsCollection`]: satisfied when every member is (AND)
//!
//! [`ItemRequirement`] wraps the three so collections can nest, and the
//! functions in [`builder`] keep group definitions short.
//!
//! Requirements are immutable once built and hold no interior state, so a
//! finished tree can be shared freely between readers.

pub mod builder;
pub mod collection;
pub mod requirement;
pub mod single;

pub use builder::{all, any, any_of_items, item};
pub use collection::{AllRequirementsCollection, AnyRequirementCollection};
pub use requirement::ItemRequirement;
pub use single::SingleItemRequirement;
