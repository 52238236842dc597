use std::cmp::Ordering;

use board_core::{Probability, Skills, Square};

use super::arena::NodeId;

/// Search state of one partial path ending on some square.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Label {
    pub probability: Probability,
    pub steps: u16,
    pub rerolls: u8,
    pub skills: Skills,
}

impl Label {
    pub const ORIGIN: Self = Self {
        probability: Probability::CERTAIN,
        steps: 0,
        rerolls: 0,
        skills: Skills::empty(),
    };

    /// `self` is at least as good as `other` in every dimension.
    pub fn dominates(&self, other: &Label) -> bool {
        self.probability >= other.probability
            && self.steps <= other.steps
            && self.rerolls <= other.rerolls
            && other.skills.contains(self.skills)
    }
}

/// Committed labels of one square. Every member is undominated by the others.
#[derive(Debug, Default)]
pub(crate) struct LabelSet {
    labels: Vec<Label>,
}

impl LabelSet {
    pub fn is_dominated(&self, candidate: &Label) -> bool {
        self.labels.iter().any(|label| label.dominates(candidate))
    }

    pub fn commit(&mut self, label: Label) {
        self.labels.push(label);
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }
}

/// Frontier key: better labels compare greater so `BinaryHeap` pops them first.
///
/// Order: higher probability, then fewer steps, fewer rerolls, fewer skills,
/// lower square, earlier insertion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct FrontierEntry {
    pub label: Label,
    pub square: Square,
    pub node: NodeId,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.label
            .probability
            .cmp(&other.label.probability)
            .then_with(|| other.label.steps.cmp(&self.label.steps))
            .then_with(|| other.label.rerolls.cmp(&self.label.rerolls))
            .then_with(|| {
                other
                    .label
                    .skills
                    .bits()
                    .count_ones()
                    .cmp(&self.label.skills.bits().count_ones())
            })
            .then_with(|| other.square.cmp(&self.square))
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
