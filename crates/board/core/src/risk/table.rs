use crate::config::BoardConfig;
use crate::risk::{CheckKind, Probability, TableError};

const THREAT_SLOTS: usize = BoardConfig::MAX_THREATS + 1;

/// Success probability indexed by the number of adjacent threats.
///
/// Lookups past the last entry reuse the last entry, so a table only needs to
/// list counts up to the point where the probability stops changing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Probability>", into = "Vec<Probability>")
)]
pub struct ThreatTable {
    entries: [Probability; THREAT_SLOTS],
}

impl ThreatTable {
    /// Builds a table from explicit entries, padding with the last one.
    pub fn new(entries: &[Probability]) -> Result<Self, TableError> {
        let Some(last) = entries.last() else {
            return Err(TableError::InvalidLength {
                len: 0,
                max: THREAT_SLOTS,
            });
        };
        if entries.len() > THREAT_SLOTS {
            return Err(TableError::InvalidLength {
                len: entries.len(),
                max: THREAT_SLOTS,
            });
        }

        let mut padded = [*last; THREAT_SLOTS];
        padded[..entries.len()].copy_from_slice(entries);
        Ok(Self { entries: padded })
    }

    /// Six-sided die table: each threat raises the target by one.
    pub fn d6(base_target: u8) -> Self {
        let mut entries = [Probability::CERTAIN; THREAT_SLOTS];
        for (threats, entry) in entries.iter_mut().enumerate() {
            *entry = Probability::d6(base_target.saturating_add(threats as u8));
        }
        Self { entries }
    }

    pub fn get(&self, threats: u8) -> Probability {
        self.entries[(threats as usize).min(THREAT_SLOTS - 1)]
    }

    /// Returns the first threat count whose probability exceeds its predecessor.
    fn first_increase(&self) -> Option<u8> {
        self.entries
            .windows(2)
            .position(|pair| pair[1] > pair[0])
            .map(|index| index as u8 + 1)
    }
}

impl TryFrom<Vec<Probability>> for ThreatTable {
    type Error = TableError;

    fn try_from(entries: Vec<Probability>) -> Result<Self, Self::Error> {
        Self::new(&entries)
    }
}

impl From<ThreatTable> for Vec<Probability> {
    fn from(table: ThreatTable) -> Self {
        table.entries.to_vec()
    }
}

/// Probability constants for every check kind.
///
/// The default table prices an average mover: evade and pickup succeed on 3+
/// with nobody around and one pip harder per threat, go-for-it steps on 2+.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RiskTable {
    pub evade: ThreatTable,
    pub pickup: ThreatTable,
    pub risky_step: Probability,
}

impl RiskTable {
    pub const DEFAULT_EVADE_TARGET: u8 = 3;
    pub const DEFAULT_PICKUP_TARGET: u8 = 3;
    pub const DEFAULT_RISKY_STEP_TARGET: u8 = 2;

    pub fn new(evade: ThreatTable, pickup: ThreatTable, risky_step: Probability) -> Self {
        Self {
            evade,
            pickup,
            risky_step,
        }
    }

    pub fn with_evade(mut self, evade: ThreatTable) -> Self {
        self.evade = evade;
        self
    }

    pub fn with_pickup(mut self, pickup: ThreatTable) -> Self {
        self.pickup = pickup;
        self
    }

    pub fn with_risky_step(mut self, risky_step: Probability) -> Self {
        self.risky_step = risky_step;
        self
    }

    /// Table lookup for `kind` given the threat count of the relevant square.
    pub fn probability(&self, kind: CheckKind, threats: u8) -> Probability {
        match kind {
            CheckKind::Evade => self.evade.get(threats),
            CheckKind::Pickup => self.pickup.get(threats),
            CheckKind::RiskyStep => self.risky_step,
        }
    }

    /// Threat tables must never improve with more threats, and a go-for-it
    /// step must be strictly riskier than a normal one.
    pub fn validate(&self) -> Result<(), TableError> {
        for (kind, table) in [
            (CheckKind::Evade, &self.evade),
            (CheckKind::Pickup, &self.pickup),
        ] {
            if let Some(threats) = table.first_increase() {
                return Err(TableError::NotMonotone { kind, threats });
            }
        }

        if self.risky_step.is_certain() {
            return Err(TableError::RiskyStepNotRisky {
                value: self.risky_step.value(),
            });
        }

        Ok(())
    }
}

impl Default for RiskTable {
    fn default() -> Self {
        Self {
            evade: ThreatTable::d6(Self::DEFAULT_EVADE_TARGET),
            pickup: ThreatTable::d6(Self::DEFAULT_PICKUP_TARGET),
            risky_step: Probability::d6(Self::DEFAULT_RISKY_STEP_TARGET),
        }
    }
}
