use arrayvec::ArrayVec;

use crate::config::BoardConfig;
use crate::risk::Skills;

/// Ordered list of checks a single step requires, in resolution order.
pub type Checks = ArrayVec<CheckKind, { BoardConfig::MAX_CHECKS_PER_STEP }>;

/// Stochastic check a step may demand.
///
/// Variants are declared in resolution order: a go-for-it roll comes before
/// the evade roll, which comes before picking up the item.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CheckKind {
    RiskyStep,
    Evade,
    Pickup,
}

impl CheckKind {
    /// Skill granting a free reroll of this check.
    pub const fn skill(self) -> Skills {
        match self {
            CheckKind::RiskyStep => Skills::SURE_FEET,
            CheckKind::Evade => Skills::DODGE,
            CheckKind::Pickup => Skills::SURE_HANDS,
        }
    }
}
