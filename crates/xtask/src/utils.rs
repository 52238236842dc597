//! Utility functions for xtask commands

use std::path::Path;

use anyhow::Result;
use board_content::{ConfigLoader, TablesLoader};
use board_core::{BoardConfig, Probability, RiskTable, Square};
use console::{StyledObject, style};

/// Load risk tables from `path`, or the defaults when no file was given.
pub fn load_tables(path: Option<&Path>) -> Result<RiskTable> {
    match path {
        Some(path) => TablesLoader::load(path),
        None => Ok(RiskTable::default()),
    }
}

/// Load board rules from `path`, or the defaults when no file was given.
pub fn load_config(path: Option<&Path>) -> Result<BoardConfig> {
    match path {
        Some(path) => ConfigLoader::load(path),
        None => Ok(BoardConfig::default()),
    }
}

/// Parse a `row,col` pair from the command line.
pub fn parse_square(value: &str) -> Result<Square, String> {
    let (row, col) = value
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got '{value}'"))?;
    let row = row
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("invalid row '{row}': {e}"))?;
    let col = col
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("invalid column '{col}': {e}"))?;
    Ok(Square::new(row, col))
}

/// Colour a probability by how risky it is.
pub fn styled_probability<D>(probability: Probability, text: D) -> StyledObject<D> {
    if probability.is_certain() {
        style(text).green()
    } else if probability.value() >= 0.5 {
        style(text).yellow()
    } else {
        style(text).red()
    }
}

/// Whole percent, rounded down so only certain squares show 100.
pub fn percent(probability: Probability) -> u32 {
    (probability.value() * 100.0).floor() as u32
}
