/// Movement resources of the mover for one search.
///
/// Steps up to `normal` carry no intrinsic risk; the next `extended` steps are
/// go-for-it steps priced by the risky-step table entry. `rerolls` is a single
/// pool shared by every check along a path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MovementBudget {
    pub normal: u8,
    pub extended: u8,
    pub rerolls: u8,
}

impl MovementBudget {
    pub const fn new(normal: u8, extended: u8, rerolls: u8) -> Self {
        Self {
            normal,
            extended,
            rerolls,
        }
    }

    /// Longest path the budget allows.
    pub const fn max_steps(&self) -> u16 {
        self.normal as u16 + self.extended as u16
    }

    /// True when the `step`-th step (1-based) lies beyond the normal allowance.
    pub const fn is_risky_step(&self, step: u16) -> bool {
        step > self.normal as u16
    }

    pub const fn with_rerolls(mut self, rerolls: u8) -> Self {
        self.rerolls = rerolls;
        self
    }
}
