use board_core::{Probability, Square};

use crate::result::{PathStep, StepChecks};

use super::label::Label;

/// Index of a node inside a [`NodeArena`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct NodeId(pub usize);

/// One explored partial path: its last square, its label and how it got there.
#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub square: Square,
    pub parent: Option<NodeId>,
    pub label: Label,
    pub checks: StepChecks,
    pub step_probability: Probability,
}

/// Append-only node storage; paths are rebuilt by following parent links.
#[derive(Debug, Default)]
pub(crate) struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    pub fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Walks from `id` back to the origin.
    pub fn ancestry(&self, id: NodeId) -> impl Iterator<Item = &Node> + '_ {
        std::iter::successors(Some(self.get(id)), |node| node.parent.map(|p| self.get(p)))
    }

    /// True when the path ending at `id` already visits `square`.
    pub fn visits(&self, id: NodeId, square: Square) -> bool {
        self.ancestry(id).any(|node| node.square == square)
    }

    /// Steps from the origin (exclusive) to `id` (inclusive).
    pub fn path(&self, id: NodeId) -> Vec<PathStep> {
        let mut steps: Vec<PathStep> = self
            .ancestry(id)
            .filter(|node| node.parent.is_some())
            .map(|node| PathStep {
                square: node.square,
                checks: node.checks.clone(),
                probability: node.step_probability,
            })
            .collect();
        steps.reverse();
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(square: Square, parent: Option<NodeId>, steps: u16) -> Node {
        Node {
            square,
            parent,
            label: Label {
                steps,
                ..Label::ORIGIN
            },
            checks: StepChecks::new(),
            step_probability: Probability::CERTAIN,
        }
    }

    #[test]
    fn rebuilds_paths_from_parent_links() {
        let mut arena = NodeArena::default();
        let origin = arena.push(node(Square::new(0, 0), None, 0));
        let first = arena.push(node(Square::new(0, 1), Some(origin), 1));
        let _sibling = arena.push(node(Square::new(1, 0), Some(origin), 1));
        let second = arena.push(node(Square::new(0, 2), Some(first), 2));

        let squares: Vec<Square> = arena.path(second).iter().map(|step| step.square).collect();
        assert_eq!(squares, vec![Square::new(0, 1), Square::new(0, 2)]);
        assert!(arena.path(origin).is_empty());
        assert_eq!(arena.len(), 4);
    }

    #[test]
    fn visits_checks_the_whole_ancestry() {
        let mut arena = NodeArena::default();
        let origin = arena.push(node(Square::new(0, 0), None, 0));
        let first = arena.push(node(Square::new(0, 1), Some(origin), 1));

        assert!(arena.visits(first, Square::new(0, 0)));
        assert!(arena.visits(first, Square::new(0, 1)));
        assert!(!arena.visits(first, Square::new(1, 1)));
    }
}
