//! Clue step loader.

use std::path::Path;

use crate::clue::ClueStep;
use crate::loaders::{LoadResult, read_file};

/// Loader for clue steps from RON files.
pub struct ClueLoader;

impl ClueLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<ClueStep>> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("{} (in {})", e, path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<Vec<ClueStep>> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse clues RON: {}", e))
    }
}
