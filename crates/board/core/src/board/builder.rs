use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crate::board::{BoardDimensions, BoardSnapshot, BoardView, Occupancy, SnapshotError};
use crate::square::{Adjacency, Square};

/// Builder assembling a validated [`BoardSnapshot`].
///
/// Threat counts are derived from enemy placement over the 8-neighbourhood
/// of every enemy. Explicit overrides replace the derived count of a square,
/// which lets rules layers express threat sources that do not occupy a square.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    dimensions: BoardDimensions,
    placements: Vec<(Square, Occupancy)>,
    threat_overrides: BTreeMap<Square, u8>,
    item: Option<Square>,
}

impl BoardBuilder {
    pub fn new(rows: u32, cols: u32) -> Self {
        Self {
            dimensions: BoardDimensions::new(rows, cols),
            placements: Vec::new(),
            threat_overrides: BTreeMap::new(),
            item: None,
        }
    }

    pub fn with_ally(mut self, square: impl Into<Square>) -> Self {
        self.placements.push((square.into(), Occupancy::Ally));
        self
    }

    pub fn with_enemy(mut self, square: impl Into<Square>) -> Self {
        self.placements.push((square.into(), Occupancy::Enemy));
        self
    }

    pub fn with_item(mut self, square: impl Into<Square>) -> Self {
        self.item = Some(square.into());
        self
    }

    /// Forces the threat count of `square`, replacing the derived value.
    pub fn with_threat(mut self, square: impl Into<Square>, count: u8) -> Self {
        self.threat_overrides.insert(square.into(), count);
        self
    }

    pub fn build(self) -> Result<BoardSnapshot, SnapshotError> {
        let dimensions = self.dimensions;
        dimensions.validate()?;

        let mut occupants = BTreeMap::new();
        for (square, occupancy) in self.placements {
            if !dimensions.contains(square) {
                return Err(SnapshotError::OutOfBounds { square });
            }
            match occupants.entry(square) {
                Entry::Vacant(slot) => {
                    slot.insert(occupancy);
                }
                Entry::Occupied(_) => return Err(SnapshotError::DuplicateOccupant { square }),
            }
        }

        let mut threats: BTreeMap<Square, u8> = BTreeMap::new();
        for (enemy, _) in occupants
            .iter()
            .filter(|(_, occupancy)| **occupancy == Occupancy::Enemy)
        {
            for neighbor in enemy.neighbors(Adjacency::Diagonal) {
                if dimensions.contains(neighbor) {
                    *threats.entry(neighbor).or_default() += 1;
                }
            }
        }

        for (square, count) in self.threat_overrides {
            if !dimensions.contains(square) {
                return Err(SnapshotError::OutOfBounds { square });
            }
            if count == 0 {
                threats.remove(&square);
            } else {
                threats.insert(square, count);
            }
        }

        let snapshot = BoardSnapshot {
            dimensions,
            occupants,
            threats,
            item: self.item,
        };
        snapshot.validate()?;
        Ok(snapshot)
    }
}
