//! Item variation table loader.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::variations::{VariationEntry, VariationTable};

/// Loader for the item variation table from RON files.
pub struct VariationLoader;

impl VariationLoader {
    /// Load a variation table from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing a list of `VariationEntry`
    pub fn load(path: &Path) -> LoadResult<VariationTable> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("{} (in {})", e, path.display()))
    }

    /// Parse a variation table from RON text.
    pub fn parse(content: &str) -> LoadResult<VariationTable> {
        let entries: Vec<VariationEntry> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse variations RON: {}", e))?;

        Ok(VariationTable::from_entries(entries))
    }
}
