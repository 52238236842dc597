//! Board scenario loader.
//!
//! A scenario describes one search setup: the board, who stands where, and
//! the mover's origin and resources. Coordinates are `(row, col)` pairs.
//!
//! ```ron
//! (
//!     dimensions: (7, 7),
//!     origin: (3, 1),
//!     allies: [(2, 2)],
//!     enemies: [(3, 3), (1, 4)],
//!     item: Some((5, 5)),
//!     threats: [((0, 0), 2)],
//!     budget: (normal: 6, extended: 2, rerolls: 1),
//!     pickup: true,
//!     skills: "DODGE | SURE_FEET",
//! )
//! ```

use std::path::Path;

use board_core::{BoardBuilder, BoardSnapshot, BoardView, MovementBudget, Skills, Square};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Scenario structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ScenarioRon {
    dimensions: (u32, u32), // (rows, cols)
    origin: (i32, i32),
    #[serde(default)]
    allies: Vec<(i32, i32)>,
    #[serde(default)]
    enemies: Vec<(i32, i32)>,
    #[serde(default)]
    item: Option<(i32, i32)>,
    /// Explicit threat counts replacing the derived ones.
    #[serde(default)]
    threats: Vec<((i32, i32), u8)>,
    #[serde(default)]
    budget: MovementBudget,
    #[serde(default)]
    pickup: bool,
    #[serde(default)]
    skills: Skills,
}

/// A validated board together with the mover it was written for.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub board: BoardSnapshot,
    pub origin: Square,
    pub budget: MovementBudget,
    pub pickup_required: bool,
    pub skills: Skills,
}

/// Loader for board scenarios from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Load a scenario from a RON file.
    ///
    /// The board is built and validated; the origin is only checked to lie on
    /// the board, since whether it may be searched from is the engine's call.
    pub fn load(path: &Path) -> LoadResult<Scenario> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid scenario {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<Scenario> {
        let data: ScenarioRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))?;

        let (rows, cols) = data.dimensions;
        let mut builder = BoardBuilder::new(rows, cols);
        for ally in data.allies {
            builder = builder.with_ally(ally);
        }
        for enemy in data.enemies {
            builder = builder.with_enemy(enemy);
        }
        if let Some(item) = data.item {
            builder = builder.with_item(item);
        }
        for (square, count) in data.threats {
            builder = builder.with_threat(square, count);
        }
        let board = builder.build()?;

        let origin = Square::from(data.origin);
        if !board.contains(origin) {
            anyhow::bail!(
                "origin {} lies outside the {}x{} board",
                origin,
                rows,
                cols
            );
        }

        Ok(Scenario {
            board,
            origin,
            budget: data.budget,
            pickup_required: data.pickup,
            skills: data.skills,
        })
    }
}
