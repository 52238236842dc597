//! Command implementations for xtask
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod reach;
mod tables;

pub use reach::Reach;
pub use tables::Tables;
