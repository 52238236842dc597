use std::collections::BTreeMap;

use crate::board::view::{check_item, check_threat_count};
use crate::board::{BoardDimensions, BoardView, Occupancy, SnapshotError};
use crate::square::Square;

/// Immutable board state handed to a single search call.
///
/// Only non-empty squares and non-zero threat counts are stored. Build one
/// with [`crate::BoardBuilder`], which derives threat counts from enemy
/// placement and validates the result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardSnapshot {
    pub(super) dimensions: BoardDimensions,
    pub(super) occupants: BTreeMap<Square, Occupancy>,
    pub(super) threats: BTreeMap<Square, u8>,
    pub(super) item: Option<Square>,
}

impl BoardSnapshot {
    /// Occupied squares in row-major order.
    pub fn occupants(&self) -> impl Iterator<Item = (Square, Occupancy)> + '_ {
        self.occupants.iter().map(|(square, occupancy)| (*square, *occupancy))
    }

    /// Squares with at least one threat source, with their counts.
    pub fn threatened(&self) -> impl Iterator<Item = (Square, u8)> + '_ {
        self.threats.iter().map(|(square, count)| (*square, *count))
    }
}

impl BoardView for BoardSnapshot {
    fn dimensions(&self) -> BoardDimensions {
        self.dimensions
    }

    fn occupancy(&self, square: Square) -> Occupancy {
        self.occupants.get(&square).copied().unwrap_or_default()
    }

    fn threats(&self, square: Square) -> u8 {
        self.threats.get(&square).copied().unwrap_or(0)
    }

    fn item(&self) -> Option<Square> {
        self.item
    }

    /// Walks only the stored threat entries, so cost follows the number of
    /// threatened squares rather than the board area.
    fn validate(&self) -> Result<(), SnapshotError> {
        self.dimensions.validate()?;
        for (&square, &count) in &self.threats {
            if !self.dimensions.contains(square) {
                return Err(SnapshotError::OutOfBounds { square });
            }
            check_threat_count(square, count)?;
        }
        check_item(self)
    }
}
