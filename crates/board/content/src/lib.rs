//! Data-driven board content and loaders.
//!
//! This crate reads the files a path search is configured from:
//! - Risk tables (data-driven via TOML)
//! - Board rule configuration (data-driven via TOML)
//! - Board scenarios: dimensions, placements, mover and budget (data-driven via RON)
//!
//! All loaders produce board-core types directly; snapshots are always built
//! through `BoardBuilder`, so a loaded scenario is validated like any other.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, Scenario, ScenarioLoader, TablesLoader};
