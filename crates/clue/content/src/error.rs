//! Registry errors.

use clue_core::{ClueError, ErrorSeverity, ItemId};

/// Errors raised while building or querying the requirement registry.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// Two group definitions share one key.
    #[error("requirement group '{0}' is defined more than once")]
    DuplicateGroup(String),

    /// A key that no group definition provides.
    #[error("unknown requirement group '{0}'")]
    UnknownGroup(String),

    /// An excluded id that none of the group's sources produce.
    #[error("group '{group}'{} excludes item {item}, which none of its sources contain", slot_suffix(.slot))]
    StaleExclusion {
        group: String,
        slot: Option<String>,
        item: ItemId,
    },

    /// A group or slot that expanded to no ids.
    #[error("group '{group}'{} has no items and can never be satisfied", slot_suffix(.slot))]
    EmptyGroup { group: String, slot: Option<String> },
}

fn slot_suffix(slot: &Option<String>) -> String {
    match slot {
        Some(name) if !name.is_empty() => format!(" slot '{name}'"),
        _ => String::new(),
    }
}

impl ClueError for RegistryError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::DuplicateGroup(_) => ErrorSeverity::Fatal,
            Self::UnknownGroup(_) => ErrorSeverity::Lookup,
            Self::StaleExclusion { .. } | Self::EmptyGroup { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateGroup(_) => "DUPLICATE_GROUP",
            Self::UnknownGroup(_) => "UNKNOWN_GROUP",
            Self::StaleExclusion { .. } => "STALE_EXCLUSION",
            Self::EmptyGroup { .. } => "EMPTY_GROUP",
        }
    }
}
