//! Grid and risk model shared by the path search engine and content tools.
//!
//! `board-core` describes a read-only snapshot of a tactical board (who stands
//! where, which squares are threatened, where the loose item lies) together with
//! the probability tables that price every stochastic check a mover may face.
//! Nothing in this crate mutates state; [`RiskModel`] answers pure questions
//! about a single step and the search engine composes those answers.
pub mod board;
pub mod budget;
pub mod config;
pub mod error;
pub mod risk;
pub mod square;

pub use board::{BoardBuilder, BoardDimensions, BoardSnapshot, BoardView, Occupancy, SnapshotError};
pub use budget::MovementBudget;
pub use config::{BoardConfig, EvadeRule};
pub use error::{DomainError, ErrorSeverity};
pub use risk::{
    CheckKind, Checks, Probability, RiskModel, RiskTable, Skills, TableError, ThreatTable,
};
pub use square::{Adjacency, Direction, Neighbors, Square};
