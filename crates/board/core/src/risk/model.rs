use crate::board::BoardView;
use crate::budget::MovementBudget;
use crate::config::{BoardConfig, EvadeRule};
use crate::risk::{CheckKind, Checks, Probability, RiskTable};
use crate::square::{Neighbors, Square};

/// Pure step oracle combining a board view, a risk table and the mover's budget.
///
/// Every answer is a function of its inputs only; the model borrows everything
/// immutably and may be shared between threads.
pub struct RiskModel<'a, B: BoardView + ?Sized> {
    board: &'a B,
    table: &'a RiskTable,
    config: BoardConfig,
    budget: MovementBudget,
    pickup_required: bool,
}

impl<'a, B: BoardView + ?Sized> RiskModel<'a, B> {
    pub fn new(
        board: &'a B,
        table: &'a RiskTable,
        config: BoardConfig,
        budget: MovementBudget,
        pickup_required: bool,
    ) -> Self {
        Self {
            board,
            table,
            config,
            budget,
            pickup_required,
        }
    }

    /// In bounds and not occupied by anybody.
    pub fn is_enterable(&self, square: Square) -> bool {
        self.board.contains(square) && !self.board.occupancy(square).is_occupied()
    }

    /// Enterable neighbours of `square` in canonical direction order.
    pub fn neighbors(&self, square: Square) -> Neighbors {
        square
            .neighbors(self.config.adjacency)
            .into_iter()
            .filter(|neighbor| self.is_enterable(*neighbor))
            .collect()
    }

    /// Checks demanded by stepping from `from` into `to` after `steps_taken`
    /// earlier steps, in resolution order.
    pub fn required_checks(&self, from: Square, to: Square, steps_taken: u16) -> Checks {
        let mut checks = Checks::new();

        if self.budget.is_risky_step(steps_taken + 1) {
            checks.push(CheckKind::RiskyStep);
        }

        let threatened = match self.config.evade_rule {
            EvadeRule::OnEnter => self.board.threats(to) > 0,
            EvadeRule::OnLeave => self.board.threats(from) > 0,
        };
        if threatened {
            checks.push(CheckKind::Evade);
        }

        if self.pickup_required && self.board.item() == Some(to) {
            checks.push(CheckKind::Pickup);
        }

        checks
    }

    /// Table probability of passing `kind` when the step ends on `to`.
    pub fn success_probability(&self, kind: CheckKind, to: Square) -> Probability {
        self.table.probability(kind, self.board.threats(to))
    }
}
