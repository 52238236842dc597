//! Label-correcting best-first search over stochastic steps.
//!
//! Each frontier entry is a label: the probability of a partial path plus the
//! resources it consumed (steps, pool rerolls, skills). Labels on the same
//! square are kept while they trade off against each other and dropped once a
//! committed label is at least as good in every dimension. Because the
//! frontier pops the most probable label first, the first label committed on a
//! square is that square's answer.

mod arena;
mod label;
mod reroll;

use std::collections::{BTreeMap, BinaryHeap};

use arrayvec::ArrayVec;
use board_core::{
    BoardConfig, BoardView, CheckKind, MovementBudget, Probability, RiskModel, RiskTable, Square,
};

use crate::error::{InvalidInput, SearchError};
use crate::request::SearchRequest;
use crate::result::{PathRecord, SearchResult, SearchStats, StepChecks};

use arena::{Node, NodeArena, NodeId};
use label::{FrontierEntry, Label, LabelSet};

/// Stateless entry point of the search engine.
///
/// A finder only borrows its inputs; it can be shared across threads and
/// reused for any number of requests.
pub struct PathFinder<'a, B: BoardView + ?Sized> {
    board: &'a B,
    table: &'a RiskTable,
    config: BoardConfig,
}

impl<'a, B: BoardView + ?Sized> PathFinder<'a, B> {
    pub fn new(board: &'a B, table: &'a RiskTable, config: BoardConfig) -> Self {
        Self {
            board,
            table,
            config,
        }
    }

    /// Computes the best route to every reachable square.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidInput`] when the origin is outside the
    /// board or occupied, the board is inconsistent, or the risk table is
    /// malformed. An origin with no reachable neighbours is not an error.
    pub fn search(&self, request: &SearchRequest) -> Result<SearchResult, SearchError> {
        self.validate(request)?;

        let model = RiskModel::new(
            self.board,
            self.table,
            self.config,
            request.budget,
            request.pickup_required,
        );

        tracing::debug!(
            "Path search from {} (normal {}, extended {}, rerolls {}, skills {:?})",
            request.origin,
            request.budget.normal,
            request.budget.extended,
            request.budget.rerolls,
            request.skills
        );

        let mut search = Search::new(&model, request);
        search.run();
        let result = search.finish();

        tracing::debug!(
            "Path search from {} reached {} squares (pushed {}, pruned {}, committed {})",
            request.origin,
            result.len(),
            result.stats().pushed,
            result.stats().pruned,
            result.stats().committed
        );

        Ok(result)
    }

    fn validate(&self, request: &SearchRequest) -> Result<(), InvalidInput> {
        self.board.validate()?;
        self.table.validate()?;

        let origin = request.origin;
        if !self.board.contains(origin) {
            return Err(InvalidInput::OriginOutOfBounds { origin });
        }

        let occupancy = self.board.occupancy(origin);
        if occupancy.is_occupied() {
            return Err(InvalidInput::OriginOccupied { origin, occupancy });
        }

        Ok(())
    }
}

/// Mutable state of one search call; never escapes [`PathFinder::search`].
struct Search<'m, 'a, B: BoardView + ?Sized> {
    model: &'m RiskModel<'a, B>,
    request: &'m SearchRequest,
    arena: NodeArena,
    frontier: BinaryHeap<FrontierEntry>,
    labels: BTreeMap<Square, LabelSet>,
    best: BTreeMap<Square, NodeId>,
    stats: SearchStats,
}

impl<'m, 'a, B: BoardView + ?Sized> Search<'m, 'a, B> {
    fn new(model: &'m RiskModel<'a, B>, request: &'m SearchRequest) -> Self {
        let mut search = Self {
            model,
            request,
            arena: NodeArena::default(),
            frontier: BinaryHeap::new(),
            labels: BTreeMap::new(),
            best: BTreeMap::new(),
            stats: SearchStats::default(),
        };

        search.enqueue(Node {
            square: request.origin,
            parent: None,
            label: Label::ORIGIN,
            checks: StepChecks::new(),
            step_probability: Probability::CERTAIN,
        });
        search
    }

    fn budget(&self) -> MovementBudget {
        self.request.budget
    }

    fn enqueue(&mut self, node: Node) {
        let entry_label = node.label;
        let square = node.square;
        let id = self.arena.push(node);
        self.frontier.push(FrontierEntry {
            label: entry_label,
            square,
            node: id,
        });
        self.stats.pushed += 1;
    }

    fn run(&mut self) {
        while let Some(entry) = self.frontier.pop() {
            self.stats.popped += 1;

            let committed = self.labels.entry(entry.square).or_default();
            if committed.is_dominated(&entry.label) {
                self.stats.pruned += 1;
                continue;
            }
            committed.commit(entry.label);
            let rank = committed.len();
            self.stats.committed += 1;
            self.best.entry(entry.square).or_insert(entry.node);

            tracing::trace!(
                "Committed label #{} on {}: p={} steps={} rerolls={}",
                rank,
                entry.square,
                entry.label.probability,
                entry.label.steps,
                entry.label.rerolls
            );

            if entry.label.steps < self.budget().max_steps() {
                self.expand(entry.node);
            }
        }
    }

    fn expand(&mut self, id: NodeId) {
        let (from, label) = {
            let node = self.arena.get(id);
            (node.square, node.label)
        };
        let rerolls_left = self.budget().rerolls.saturating_sub(label.rerolls);
        let skills_left = self.request.skills.difference(label.skills);

        for to in self.model.neighbors(from) {
            if self.arena.visits(id, to) {
                continue;
            }

            let priced: ArrayVec<(CheckKind, Probability), { BoardConfig::MAX_CHECKS_PER_STEP }> =
                self.model
                    .required_checks(from, to, label.steps)
                    .into_iter()
                    .map(|kind| (kind, self.model.success_probability(kind, to)))
                    .collect();

            for allocation in reroll::allocate(&priced, rerolls_left, skills_left) {
                let candidate = Label {
                    probability: label.probability * allocation.probability,
                    steps: label.steps + 1,
                    rerolls: label.rerolls + allocation.rerolls,
                    skills: label.skills | allocation.skills,
                };
                if candidate.probability.is_impossible() {
                    continue;
                }
                if self
                    .labels
                    .get(&to)
                    .is_some_and(|committed| committed.is_dominated(&candidate))
                {
                    self.stats.pruned += 1;
                    continue;
                }

                self.enqueue(Node {
                    square: to,
                    parent: Some(id),
                    label: candidate,
                    checks: allocation.checks,
                    step_probability: allocation.probability,
                });
            }
        }
    }

    fn finish(self) -> SearchResult {
        let records = self
            .best
            .iter()
            .map(|(square, id)| {
                let node = self.arena.get(*id);
                let record = if node.parent.is_none() {
                    PathRecord::origin()
                } else {
                    PathRecord {
                        probability: node.label.probability,
                        steps: self.arena.path(*id),
                        rerolls_used: node.label.rerolls,
                        skills_used: node.label.skills,
                    }
                };
                (*square, record)
            })
            .collect();

        tracing::trace!("Search arena held {} nodes", self.arena.len());

        SearchResult::new(self.request.origin, records, self.stats)
    }
}

#[cfg(test)]
mod tests {
    use board_core::{BoardBuilder, Skills};

    use super::*;

    fn search(
        board: &board_core::BoardSnapshot,
        table: &RiskTable,
        request: SearchRequest,
    ) -> SearchResult {
        PathFinder::new(board, table, BoardConfig::default())
            .search(&request)
            .unwrap()
    }

    #[test]
    fn origin_is_always_present() {
        let board = BoardBuilder::new(3, 3).build().unwrap();
        let table = RiskTable::default();
        let result = search(
            &board,
            &table,
            SearchRequest::new(Square::new(1, 1), MovementBudget::default()),
        );

        assert_eq!(result.len(), 1);
        let record = result.get(Square::new(1, 1)).unwrap();
        assert_eq!(record.probability, Probability::CERTAIN);
        assert!(record.is_empty());
        assert_eq!(record.rerolls_used, 0);
    }

    #[test]
    fn prefers_detour_over_threatened_shortcut() {
        // 3x3, threat override on (0,1); going around costs two extra steps
        let board = BoardBuilder::new(3, 3).with_threat((0, 1), 1).build().unwrap();
        let table = RiskTable::default();
        let result = search(
            &board,
            &table,
            SearchRequest::new(Square::new(0, 0), MovementBudget::new(4, 0, 0)),
        );

        let record = result.get(Square::new(0, 2)).unwrap();
        assert_eq!(record.probability, Probability::CERTAIN);
        assert_eq!(record.len(), 4);
        assert!(!record.squares().any(|square| square == Square::new(0, 1)));
    }

    #[test]
    fn rerolls_are_spent_only_where_needed() {
        let board = BoardBuilder::new(1, 3).with_threat((0, 2), 1).build().unwrap();
        let table = RiskTable::default();
        let result = search(
            &board,
            &table,
            SearchRequest::new(Square::new(0, 0), MovementBudget::new(2, 0, 1)),
        );

        assert_eq!(result.get(Square::new(0, 1)).unwrap().rerolls_used, 0);
        let record = result.get(Square::new(0, 2)).unwrap();
        assert_eq!(record.rerolls_used, 1);
        assert_eq!(record.probability.value(), 0.75);
    }

    #[test]
    fn skills_substitute_for_pool_rerolls() {
        let board = BoardBuilder::new(1, 2).with_threat((0, 1), 1).build().unwrap();
        let table = RiskTable::default();
        let request = SearchRequest::new(Square::new(0, 0), MovementBudget::new(1, 0, 0))
            .with_skills(Skills::DODGE);
        let result = search(&board, &table, request);

        let record = result.get(Square::new(0, 1)).unwrap();
        assert_eq!(record.probability.value(), 0.75);
        assert_eq!(record.rerolls_used, 0);
        assert_eq!(record.skills_used, Skills::DODGE);
    }

    #[test]
    fn stats_account_for_every_pop() {
        let board = BoardBuilder::new(4, 4).with_enemy((2, 2)).build().unwrap();
        let table = RiskTable::default();
        let result = search(
            &board,
            &table,
            SearchRequest::new(Square::new(0, 0), MovementBudget::new(3, 2, 2)),
        );

        let stats = result.stats();
        assert_eq!(stats.popped, stats.pushed);
        assert!(stats.committed >= result.len());
        assert!(stats.committed <= stats.popped);
    }
}
