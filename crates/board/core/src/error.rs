//! Common error infrastructure for board-core.
//!
//! Concrete error enums live next to the data they validate (`SnapshotError`
//! in [`crate::board`], `TableError` in [`crate::risk`]). This module only
//! provides the shared classification used by every crate in the workspace.

/// Severity level of an error, used for categorization.
///
/// Every error the grid model and the search engine raise today is a
/// rejection of caller input; nothing in either crate can fail mid-search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: origin out of bounds, probability above 1.0
    Validation,
}

/// Common trait for all errors raised by the grid model and the search engine.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait DomainError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// This is useful for error categorization and testing.
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
