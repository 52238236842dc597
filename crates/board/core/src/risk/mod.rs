//! Stochastic check model: which checks a step requires and how likely each
//! one is to succeed.

mod check;
mod error;
mod model;
mod probability;
mod skills;
mod table;

pub use check::{CheckKind, Checks};
pub use error::TableError;
pub use model::RiskModel;
pub use probability::Probability;
pub use skills::Skills;
pub use table::{RiskTable, ThreatTable};
