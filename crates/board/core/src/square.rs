use std::fmt;

use arrayvec::ArrayVec;

use crate::config::BoardConfig;

/// Fixed-capacity list of neighbouring squares in canonical direction order.
pub type Neighbors = ArrayVec<Square, { BoardConfig::MAX_NEIGHBORS }>;

/// Discrete board coordinate expressed as (row, column).
///
/// Ordering is row-major and doubles as the deterministic tie-break between
/// otherwise equal search candidates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Square {
    pub row: i32,
    pub col: i32,
}

impl Square {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Square reached by taking one step in `direction`.
    ///
    /// Saturates at the edge of the coordinate space, where the result is
    /// off any board and gets rejected by the bounds check.
    pub fn step(self, direction: Direction) -> Self {
        let (dr, dc) = direction.delta();
        Self::new(self.row.saturating_add(dr), self.col.saturating_add(dc))
    }

    pub fn manhattan_distance(self, other: Square) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    pub fn chebyshev_distance(self, other: Square) -> u32 {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }

    /// True when `other` touches this square, diagonals included.
    pub fn is_adjacent(self, other: Square) -> bool {
        self.chebyshev_distance(other) == 1
    }

    /// All neighbours under the given adjacency rule, bounds not checked.
    pub fn neighbors(self, adjacency: Adjacency) -> Neighbors {
        adjacency
            .directions()
            .iter()
            .map(|direction| self.step(*direction))
            .collect()
    }
}

impl From<(i32, i32)> for Square {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Compass direction of a single step; rows grow southwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Direction {
    pub const CARDINAL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    /// (row, column) offset of this direction.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
            Direction::NorthEast => (-1, 1),
            Direction::NorthWest => (-1, -1),
            Direction::SouthEast => (1, 1),
            Direction::SouthWest => (1, -1),
        }
    }
}

/// Movement adjacency rule of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Adjacency {
    /// Four neighbours: north, south, east, west.
    #[default]
    Orthogonal,
    /// Eight neighbours, diagonals included.
    Diagonal,
}

impl Adjacency {
    pub const fn directions(self) -> &'static [Direction] {
        match self {
            Adjacency::Orthogonal => &Direction::CARDINAL,
            Adjacency::Diagonal => &Direction::ALL,
        }
    }
}
