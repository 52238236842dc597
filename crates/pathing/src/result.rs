use std::collections::BTreeMap;

use arrayvec::ArrayVec;
use board_core::{BoardConfig, CheckKind, Probability, Skills, Square};

/// Checks rolled during one step, in resolution order.
pub type StepChecks = ArrayVec<RolledCheck, { BoardConfig::MAX_CHECKS_PER_STEP }>;

/// What paid for the retry of a check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RerollSource {
    /// One reroll from the shared pool.
    Pool,
    /// The mover's skill for this check kind.
    Skill,
}

/// A single check on a step, with the reroll (if any) assigned to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RolledCheck {
    pub kind: CheckKind,
    /// Table probability of passing on the first attempt.
    pub probability: Probability,
    pub reroll: Option<RerollSource>,
}

impl RolledCheck {
    pub fn effective_probability(&self) -> Probability {
        match self.reroll {
            Some(_) => self.probability.rerolled(),
            None => self.probability,
        }
    }
}

/// One step of a path: the square entered and the checks it took.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathStep {
    pub square: Square,
    pub checks: StepChecks,
    /// Probability of completing this step, rerolls included.
    pub probability: Probability,
}

/// Best known route to one destination.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathRecord {
    pub probability: Probability,
    /// Steps from the origin (exclusive) to the destination (inclusive).
    pub steps: Vec<PathStep>,
    pub rerolls_used: u8,
    pub skills_used: Skills,
}

impl PathRecord {
    pub(crate) fn origin() -> Self {
        Self {
            probability: Probability::CERTAIN,
            steps: Vec::new(),
            rerolls_used: 0,
            skills_used: Skills::empty(),
        }
    }

    pub fn squares(&self) -> impl Iterator<Item = Square> + '_ {
        self.steps.iter().map(|step| step.square)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Total number of checks rolled along the path.
    pub fn check_count(&self) -> usize {
        self.steps.iter().map(|step| step.checks.len()).sum()
    }
}

/// Counters describing how much work a search performed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Labels pushed into the frontier, origin included.
    pub pushed: usize,
    pub popped: usize,
    /// Labels dropped because a committed label dominated them.
    pub pruned: usize,
    pub committed: usize,
}

/// Every reachable square mapped to its best route.
///
/// Squares missing from the map are unreachable under the given budget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    origin: Square,
    records: BTreeMap<Square, PathRecord>,
    stats: SearchStats,
}

impl SearchResult {
    pub(crate) fn new(
        origin: Square,
        records: BTreeMap<Square, PathRecord>,
        stats: SearchStats,
    ) -> Self {
        Self {
            origin,
            records,
            stats,
        }
    }

    pub fn origin(&self) -> Square {
        self.origin
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn get(&self, square: Square) -> Option<&PathRecord> {
        self.records.get(&square)
    }

    pub fn contains(&self, square: Square) -> bool {
        self.records.contains_key(&square)
    }

    pub fn probability(&self, square: Square) -> Option<Probability> {
        self.get(square).map(|record| record.probability)
    }

    /// Squares of the best route to `square`, origin excluded.
    pub fn path_to(&self, square: Square) -> Option<Vec<Square>> {
        self.get(square).map(|record| record.squares().collect())
    }

    /// Records in row-major square order.
    pub fn iter(&self) -> impl Iterator<Item = (Square, &PathRecord)> + '_ {
        self.records.iter().map(|(square, record)| (*square, record))
    }

    pub fn reachable(&self) -> impl Iterator<Item = Square> + '_ {
        self.records.keys().copied()
    }

    /// Squares reachable without any risk at all.
    pub fn safe_squares(&self) -> impl Iterator<Item = Square> + '_ {
        self.iter()
            .filter(|(_, record)| record.probability.is_certain())
            .map(|(square, _)| square)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Never true for a successful search: the origin is always reachable.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a SearchResult {
    type Item = (&'a Square, &'a PathRecord);
    type IntoIter = std::collections::btree_map::Iter<'a, Square, PathRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
