use crate::square::Adjacency;

/// Rule configuration and compile-time capacity constants for the board model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BoardConfig {
    /// Which neighbouring squares a single step may reach.
    pub adjacency: Adjacency,
    /// When an evade check is demanded of a step.
    pub evade_rule: EvadeRule,
}

impl BoardConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of adjacent threat sources a square can have (8-neighbourhood).
    pub const MAX_THREATS: usize = 8;
    /// Maximum number of neighbours a square can expand to.
    pub const MAX_NEIGHBORS: usize = 8;
    /// Maximum number of checks a single step can require (risky step, evade, pickup).
    pub const MAX_CHECKS_PER_STEP: usize = 3;

    pub const fn new(adjacency: Adjacency, evade_rule: EvadeRule) -> Self {
        Self {
            adjacency,
            evade_rule,
        }
    }

    pub const fn with_adjacency(mut self, adjacency: Adjacency) -> Self {
        self.adjacency = adjacency;
        self
    }

    pub const fn with_evade_rule(mut self, evade_rule: EvadeRule) -> Self {
        self.evade_rule = evade_rule;
        self
    }
}

/// Decides which square's threat count triggers an evade check.
///
/// The probability is always looked up by the threat count of the destination
/// square; only the trigger differs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EvadeRule {
    /// Entering a threatened square requires an evade check.
    #[default]
    OnEnter,
    /// Leaving a threatened square requires an evade check (tabletop rule).
    OnLeave,
}
