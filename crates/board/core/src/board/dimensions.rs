use crate::board::SnapshotError;
use crate::square::Square;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardDimensions {
    pub rows: u32,
    pub cols: u32,
}

impl BoardDimensions {
    pub const fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }

    pub fn contains(&self, square: Square) -> bool {
        square.row >= 0
            && square.col >= 0
            && (square.row as i64) < self.rows as i64
            && (square.col as i64) < self.cols as i64
    }

    pub const fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Rejects boards with no squares and boards whose far edge does not fit
    /// a [`Square`] coordinate.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        if self.is_empty() {
            return Err(SnapshotError::EmptyBoard);
        }
        if self.rows > i32::MAX as u32 || self.cols > i32::MAX as u32 {
            return Err(SnapshotError::DimensionsTooLarge {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// Every square on the board in row-major order. Only meaningful once
    /// [`BoardDimensions::validate`] has passed.
    pub fn squares(&self) -> impl Iterator<Item = Square> {
        let cols = self.cols;
        (0..self.rows)
            .flat_map(move |row| (0..cols).map(move |col| Square::new(row as i32, col as i32)))
    }
}
