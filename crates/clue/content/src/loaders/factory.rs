//! Content factory for building the registry from data files.

use std::path::{Path, PathBuf};

use clue_core::{ContentConfig, ValidationConfig};
use tracing::info;

use crate::clue::ClueStep;
use crate::groups::GroupSpec;
use crate::loaders::{ClueLoader, ConfigLoader, GroupLoader, LoadResult, VariationLoader};
use crate::registry::{Finding, RequirementRegistry};
use crate::variations::VariationTable;

/// Content factory that loads all clue content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── variations.ron
/// ├── groups.ron
/// └── clues.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Path to the directory containing data files
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load content configuration from `config.toml`.
    ///
    /// A missing file means the default configuration.
    pub fn load_config(&self) -> LoadResult<ContentConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            return Ok(ContentConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the item variation table from `variations.ron`.
    pub fn load_variations(&self) -> LoadResult<VariationTable> {
        let path = self.data_dir.join("variations.ron");
        VariationLoader::load(&path)
    }

    /// Load requirement group definitions from `groups.ron`.
    pub fn load_groups(&self) -> LoadResult<Vec<GroupSpec>> {
        let path = self.data_dir.join("groups.ron");
        GroupLoader::load(&path)
    }

    /// Load clue steps from `clues.ron`.
    pub fn load_clues(&self) -> LoadResult<Vec<ClueStep>> {
        let path = self.data_dir.join("clues.ron");
        ClueLoader::load(&path)
    }

    /// Load groups and variations and build the registry.
    ///
    /// # Arguments
    ///
    /// * `validation` - Policy override; `None` uses `config.toml`
    pub fn build_registry(
        &self,
        validation: Option<ValidationConfig>,
    ) -> LoadResult<RequirementRegistry> {
        let validation = match validation {
            Some(validation) => validation,
            None => self.load_config()?.validation,
        };
        let variations = self.load_variations()?;
        let groups = self.load_groups()?;

        info!(
            target: "clue_content::loaders",
            data_dir = %self.data_dir.display(),
            variations = variations.len(),
            groups = groups.len(),
            "Loaded clue content"
        );

        Ok(RequirementRegistry::build(&groups, &variations, &validation)?)
    }

    /// Load groups and variations and report every finding.
    pub fn validate(&self) -> LoadResult<Vec<Finding>> {
        let variations = self.load_variations()?;
        let groups = self.load_groups()?;
        Ok(RequirementRegistry::validate(&groups, &variations))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn missing_data_file_names_the_path() {
        let dir = tempfile::tempdir().expect("temp dir");
        let factory = ContentFactory::new(dir.path());

        let err = factory.load_groups().expect_err("no groups.ron");
        assert!(err.to_string().contains("groups.ron"));
        assert_eq!(
            factory.load_config().expect("default config"),
            ContentConfig::default()
        );
    }
}
