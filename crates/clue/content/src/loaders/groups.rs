//! Requirement group definition loader.

use std::path::Path;

use crate::groups::GroupSpec;
use crate::loaders::{LoadResult, read_file};

/// Loader for requirement group definitions from RON files.
pub struct GroupLoader;

impl GroupLoader {
    /// Load group definitions from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing a list of `GroupSpec`
    pub fn load(path: &Path) -> LoadResult<Vec<GroupSpec>> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("{} (in {})", e, path.display()))
    }

    /// Parse group definitions from RON text.
    pub fn parse(content: &str) -> LoadResult<Vec<GroupSpec>> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse groups RON: {}", e))
    }
}
