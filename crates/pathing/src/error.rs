//! Search errors.
//!
//! The engine only fails before any search work starts; an empty reach set is
//! a valid result, never an error.

use board_core::{DomainError, ErrorSeverity, Occupancy, SnapshotError, Square, TableError};

/// Errors returned by [`crate::PathFinder::search`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SearchError {
    #[error("invalid search input: {0}")]
    InvalidInput(#[from] InvalidInput),
}

/// Reasons a search request is rejected up front.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum InvalidInput {
    #[error("origin {origin} is outside the board")]
    OriginOutOfBounds { origin: Square },

    #[error("origin {origin} is occupied ({occupancy:?})")]
    OriginOccupied { origin: Square, occupancy: Occupancy },

    #[error("inconsistent board snapshot: {0}")]
    Snapshot(#[from] SnapshotError),

    #[error("invalid risk table: {0}")]
    Table(#[from] TableError),
}

impl DomainError for SearchError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            SearchError::InvalidInput(inner) => inner.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            SearchError::InvalidInput(inner) => inner.error_code(),
        }
    }
}

impl DomainError for InvalidInput {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use InvalidInput::*;
        match self {
            OriginOutOfBounds { .. } => "SEARCH_ORIGIN_OUT_OF_BOUNDS",
            OriginOccupied { .. } => "SEARCH_ORIGIN_OCCUPIED",
            Snapshot(inner) => inner.error_code(),
            Table(inner) => inner.error_code(),
        }
    }
}
