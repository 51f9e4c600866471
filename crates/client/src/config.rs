//! Client configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use clue_core::{ValidationConfig, ValidationLevel};
use tracing::warn;

/// Configuration required to load clue content.
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    /// Directory holding `variations.ron`, `groups.ron`, `clues.ron` and
    /// `config.toml`. `None` uses the content embedded in the binary.
    pub data_dir: Option<PathBuf>,
    /// Validation level applied to every finding. `None` defers to the
    /// content's own `config.toml`.
    pub validation: Option<ValidationLevel>,
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CONTENT_DATA_DIR` - Content data directory (default: embedded content)
    /// - `CLUE_VALIDATION` - `ignore`, `warn` or `deny` for every finding
    pub fn from_env() -> Self {
        Self {
            data_dir: env::var_os("CONTENT_DATA_DIR").map(PathBuf::from),
            validation: read_env::<ValidationLevel>("CLUE_VALIDATION"),
        }
    }

    /// Applies command-line overrides on top of the environment.
    #[must_use]
    pub fn with_overrides(
        mut self,
        data_dir: Option<PathBuf>,
        validation: Option<ValidationLevel>,
    ) -> Self {
        if data_dir.is_some() {
            self.data_dir = data_dir;
        }
        if validation.is_some() {
            self.validation = validation;
        }
        self
    }

    pub fn validation_config(&self) -> Option<ValidationConfig> {
        self.validation.map(ValidationConfig::uniform)
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    parse_env_value(key, &env::var(key).ok()?)
}

/// A set but unparsable value is logged and treated as unset.
fn parse_env_value<T>(key: &str, raw: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    let value = raw.trim().parse().ok();
    if value.is_none() {
        warn!(target: "clue_client", key, value = raw, "Ignoring unparsable environment variable");
    }
    value
}
