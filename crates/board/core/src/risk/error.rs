use crate::error::{DomainError, ErrorSeverity};
use crate::risk::CheckKind;

/// Errors raised while building or validating a [`crate::RiskTable`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum TableError {
    #[error("probability {value} is outside [0, 1]")]
    InvalidProbability { value: f64 },

    #[error("threat table has {len} entries, expected 1..={max}")]
    InvalidLength { len: usize, max: usize },

    #[error("{kind} probability rises at {threats} threats")]
    NotMonotone { kind: CheckKind, threats: u8 },

    #[error("risky step probability {value} must be below 1")]
    RiskyStepNotRisky { value: f64 },
}

impl DomainError for TableError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use TableError::*;
        match self {
            InvalidProbability { .. } => "TABLE_INVALID_PROBABILITY",
            InvalidLength { .. } => "TABLE_INVALID_LENGTH",
            NotMonotone { .. } => "TABLE_NOT_MONOTONE",
            RiskyStepNotRisky { .. } => "TABLE_RISKY_STEP_NOT_RISKY",
        }
    }
}
