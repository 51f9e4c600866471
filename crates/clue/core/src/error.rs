//! Common error infrastructure.
//!
//! Registry construction itself never fails: degenerate data yields groups
//! that can never be satisfied. Errors only come from the edges (content
//! validation, unknown group keys), and every error type classifies itself
//! through [`ClueError`].

/// Severity level of an error, used for categorization and reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Content is questionable but usable.
    ///
    /// Examples: exclusion that filters nothing, group with no members
    Validation,

    /// A caller referenced something that does not exist.
    ///
    /// Examples: unknown group key in a clue step
    Lookup,

    /// Content cannot be used as configured.
    ///
    /// Examples: two groups sharing one key
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Lookup => "lookup",
            Self::Fatal => "fatal",
        }
    }
}

/// Common trait for clue errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on whether the content stays usable
pub trait ClueError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
