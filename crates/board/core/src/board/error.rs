//! Snapshot consistency errors.

use crate::error::{DomainError, ErrorSeverity};
use crate::square::Square;

/// Errors raised while building or validating a board snapshot.
///
/// All of them mean the caller handed over an inconsistent board; none are
/// worth retrying without changing the input.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SnapshotError {
    #[error("board has no squares")]
    EmptyBoard,

    #[error("board of {rows}x{cols} does not fit signed 32-bit coordinates")]
    DimensionsTooLarge { rows: u32, cols: u32 },

    #[error("square {square} is out of board bounds")]
    OutOfBounds { square: Square },

    #[error("square {square} is claimed by more than one occupant")]
    DuplicateOccupant { square: Square },

    #[error("square {square} has {count} threats, more than its neighbourhood allows")]
    ThreatCountTooHigh { square: Square, count: u8 },

    #[error("item at {square} lies on an occupied square")]
    ItemOnOccupiedSquare { square: Square },
}

impl DomainError for SnapshotError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use SnapshotError::*;
        match self {
            EmptyBoard => "SNAPSHOT_EMPTY_BOARD",
            DimensionsTooLarge { .. } => "SNAPSHOT_DIMENSIONS_TOO_LARGE",
            OutOfBounds { .. } => "SNAPSHOT_OUT_OF_BOUNDS",
            DuplicateOccupant { .. } => "SNAPSHOT_DUPLICATE_OCCUPANT",
            ThreatCountTooHigh { .. } => "SNAPSHOT_THREAT_COUNT_TOO_HIGH",
            ItemOnOccupiedSquare { .. } => "SNAPSHOT_ITEM_ON_OCCUPIED_SQUARE",
        }
    }
}
