/// How a validation finding in the content data is handled.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ValidationLevel {
    /// Accept silently.
    Ignore,
    /// Accept and log a warning.
    #[default]
    Warn,
    /// Reject the content.
    Deny,
}

/// Policies applied to findings while building the requirement registry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ValidationConfig {
    /// An excluded id that appears in none of the group's sources.
    pub stale_exclusions: ValidationLevel,
    /// A group or slot that expands to no identifiers at all.
    pub empty_groups: ValidationLevel,
}

impl ValidationConfig {
    /// Applies `level` to every finding.
    pub const fn uniform(level: ValidationLevel) -> Self {
        Self {
            stale_exclusions: level,
            empty_groups: level,
        }
    }
}

/// Content configuration read from `config.toml`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ContentConfig {
    pub validation: ValidationConfig,
}
