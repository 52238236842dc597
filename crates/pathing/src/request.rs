use board_core::{MovementBudget, Skills, Square};

/// Parameters of a single search call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchRequest {
    pub origin: Square,
    pub budget: MovementBudget,
    /// Entering the item square demands a pickup check.
    pub pickup_required: bool,
    pub skills: Skills,
}

impl SearchRequest {
    pub fn new(origin: Square, budget: MovementBudget) -> Self {
        Self {
            origin,
            budget,
            pickup_required: false,
            skills: Skills::empty(),
        }
    }

    pub fn with_pickup(mut self, pickup_required: bool) -> Self {
        self.pickup_required = pickup_required;
        self
    }

    pub fn with_skills(mut self, skills: Skills) -> Self {
        self.skills = skills;
        self
    }
}
