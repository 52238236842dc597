use std::cmp::Ordering;
use std::fmt;
use std::ops::Mul;

use crate::risk::TableError;

/// Success probability in `[0, 1]`.
///
/// Values are exact table constants multiplied together; the type provides a
/// total order so search frontiers can sort on it.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f64", into = "f64"))]
pub struct Probability(f64);

impl Probability {
    pub const CERTAIN: Self = Self(1.0);
    pub const IMPOSSIBLE: Self = Self(0.0);

    pub fn new(value: f64) -> Result<Self, TableError> {
        if value.is_finite() && (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(TableError::InvalidProbability { value })
        }
    }

    /// Chance of rolling `target` or better on a six-sided die.
    ///
    /// A natural 1 always fails and a natural 6 always succeeds, so targets are
    /// clamped to `2..=6`.
    pub fn d6(target: u8) -> Self {
        let target = target.clamp(2, 6);
        Self(f64::from(7 - target) / 6.0)
    }

    pub const fn value(self) -> f64 {
        self.0
    }

    /// Probability of succeeding on the first attempt or on a single retry.
    pub fn rerolled(self) -> Self {
        let miss = 1.0 - self.0;
        Self(1.0 - miss * miss)
    }

    pub fn is_impossible(self) -> bool {
        self.0 <= 0.0
    }

    pub fn is_certain(self) -> bool {
        self.0 >= 1.0
    }
}

impl Default for Probability {
    fn default() -> Self {
        Self::CERTAIN
    }
}

impl PartialEq for Probability {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Probability {}

impl PartialOrd for Probability {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Probability {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Mul for Probability {
    type Output = Probability;

    fn mul(self, rhs: Probability) -> Probability {
        Probability(self.0 * rhs.0)
    }
}

impl TryFrom<f64> for Probability {
    type Error = TableError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Probability> for f64 {
    fn from(probability: Probability) -> f64 {
        probability.0
    }
}

impl fmt::Display for Probability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}
