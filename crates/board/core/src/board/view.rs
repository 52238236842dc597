use crate::board::{BoardDimensions, SnapshotError};
use crate::config::BoardConfig;
use crate::square::Square;

/// Occupancy state of a single square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Occupancy {
    #[default]
    Empty,
    Ally,
    Enemy,
}

impl Occupancy {
    pub fn is_occupied(self) -> bool {
        !matches!(self, Occupancy::Empty)
    }
}

/// Read-only board oracle consumed by the risk model and the search engine.
///
/// [`crate::BoardSnapshot`] is the canonical implementation; rules layers that
/// already own an occupancy index may implement this directly instead of
/// copying into a snapshot.
pub trait BoardView: Send + Sync {
    fn dimensions(&self) -> BoardDimensions;

    /// Occupancy of `square`. Out-of-bounds squares report [`Occupancy::Empty`];
    /// callers check [`BoardView::contains`] first.
    fn occupancy(&self, square: Square) -> Occupancy;

    /// Number of adjacent threat sources covering `square`.
    fn threats(&self, square: Square) -> u8;

    /// Square holding the loose item, if any.
    fn item(&self) -> Option<Square> {
        None
    }

    fn contains(&self, square: Square) -> bool {
        self.dimensions().contains(square)
    }

    /// Consistency check run once before every search.
    ///
    /// The default walks every square of the board, which costs time in the
    /// board area. Views that index their threatened squares should override
    /// it with a walk over that index, as [`crate::BoardSnapshot`] does.
    fn validate(&self) -> Result<(), SnapshotError> {
        self.dimensions().validate()?;
        for square in self.dimensions().squares() {
            check_threat_count(square, self.threats(square))?;
        }
        check_item(self)
    }
}

pub(crate) fn check_threat_count(square: Square, count: u8) -> Result<(), SnapshotError> {
    if count as usize > BoardConfig::MAX_THREATS {
        return Err(SnapshotError::ThreatCountTooHigh { square, count });
    }
    Ok(())
}

/// The item must lie on the board and on a free square.
pub(crate) fn check_item<B: BoardView + ?Sized>(view: &B) -> Result<(), SnapshotError> {
    let Some(square) = view.item() else {
        return Ok(());
    };
    if !view.contains(square) {
        return Err(SnapshotError::OutOfBounds { square });
    }
    if view.occupancy(square).is_occupied() {
        return Err(SnapshotError::ItemOnOccupiedSquare { square });
    }
    Ok(())
}
