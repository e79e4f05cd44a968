//! Common error infrastructure for range-core.
//!
//! Domain-specific errors (e.g., `ShootError`, `ReloadError`) are defined in
//! their respective modules alongside the operations they validate. This
//! module provides the shared severity classification used across all of them.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// Errors are classified by their recoverability and expected handling:
/// - **Recoverable**: Temporary conditions that may succeed on retry or with alternative actions
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Internal**: Unexpected state inconsistencies that require investigation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    /// Recoverable error - can retry with same or alternative input.
    ///
    /// Examples: magazine empty, selected box exhausted
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: box index out of range, cost oracle missing
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Examples: chamber lost a round mid-cycle
    /// These indicate bugs and should be investigated.
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}
