//! Content loaders for reading clue data from files.
//!
//! This module provides loaders that convert RON/TOML files into the types
//! consumed by [`crate::RequirementRegistry`].

pub mod clues;
pub mod config;
pub mod embedded;
pub mod factory;
pub mod groups;
pub mod variations;

pub use clues::ClueLoader;
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use groups::GroupLoader;
pub use variations::VariationLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
