//! Search a board scenario and inspect the reachable squares
//!
//! Loads a RON scenario (plus optional tables and rules), runs one path
//! search from the scenario's origin and prints the result.

use std::path::PathBuf;

use anyhow::{Context, Result};
use board_content::{Scenario, ScenarioLoader};
use board_core::{BoardSnapshot, BoardView, Occupancy, Skills, Square};
use clap::Parser;
use console::style;
use pathing::{PathFinder, PathRecord, RerollSource, SearchRequest, SearchResult};

use crate::utils::{load_config, load_tables, parse_square, percent, styled_probability};

/// Search a scenario and show every reachable square
#[derive(Parser)]
pub struct Reach {
    /// Scenario file (RON)
    #[arg(value_name = "SCENARIO")]
    scenario: PathBuf,

    /// Risk tables (TOML); defaults apply when omitted
    #[arg(short, long, value_name = "FILE")]
    tables: Option<PathBuf>,

    /// Board rules (TOML); defaults apply when omitted
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Also print the best route to this square (e.g., 3,4)
    #[arg(long, value_name = "ROW,COL", value_parser = parse_square)]
    to: Option<Square>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "grid")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Board map with arrival chance (percent) on each reachable square
    Grid,
    /// One line per reachable square
    List,
    /// Pretty-printed debug format
    Debug,
}

impl Reach {
    pub fn execute(self) -> Result<()> {
        let scenario = ScenarioLoader::load(&self.scenario)?;
        let table = load_tables(self.tables.as_deref())?;
        let config = load_config(self.config.as_deref())?;

        let request = SearchRequest::new(scenario.origin, scenario.budget)
            .with_pickup(scenario.pickup_required)
            .with_skills(scenario.skills);
        let result = PathFinder::new(&scenario.board, &table, config)
            .search(&request)
            .with_context(|| format!("Search failed for {}", self.scenario.display()))?;

        print_header(&self.scenario, &scenario, &result);

        match self.format {
            OutputFormat::Grid => print_grid(&scenario.board, &result),
            OutputFormat::List => print_list(&result),
            OutputFormat::Debug => println!("{:#?}", result),
        }

        if let Some(target) = self.to {
            println!();
            match result.get(target) {
                Some(record) => print_route(result.origin(), target, record),
                None => println!(
                    "{} {} is not reachable",
                    style("Route:").bold().yellow(),
                    target
                ),
            }
        }

        Ok(())
    }
}

fn print_header(path: &std::path::Path, scenario: &Scenario, result: &SearchResult) {
    let dimensions = scenario.board.dimensions();
    let budget = scenario.budget;

    println!("{} {}", style("Scenario:").bold().cyan(), path.display());
    println!(
        "{} {}x{}",
        style("Board:").bold().cyan(),
        dimensions.rows,
        dimensions.cols
    );
    println!(
        "{} {} (normal {}, extended {}, rerolls {}, skills {})",
        style("Mover:").bold().cyan(),
        scenario.origin,
        budget.normal,
        budget.extended,
        budget.rerolls,
        skill_names(scenario.skills)
    );

    let stats = result.stats();
    println!(
        "{} {} squares ({} safe), {} labels pushed, {} pruned",
        style("Reach:").bold().cyan(),
        result.len(),
        result.safe_squares().count(),
        stats.pushed,
        stats.pruned
    );
    println!();
}

fn print_grid(board: &BoardSnapshot, result: &SearchResult) {
    let dimensions = board.dimensions();
    for row in 0..dimensions.rows as i32 {
        let mut line = String::new();
        for col in 0..dimensions.cols as i32 {
            let square = Square::new(row, col);
            let cell = match (board.occupancy(square), result.probability(square)) {
                (Occupancy::Ally, _) => style("  A ".to_string()).blue().to_string(),
                (Occupancy::Enemy, _) => style("  E ".to_string()).magenta().to_string(),
                _ if square == result.origin() => style("  @ ".to_string()).bold().to_string(),
                (Occupancy::Empty, Some(probability)) => {
                    let text = format!("{:>3}", percent(probability));
                    let marker = if board.item() == Some(square) { "*" } else { " " };
                    format!("{}{}", styled_probability(probability, text), marker)
                }
                (Occupancy::Empty, None) if board.item() == Some(square) => "  * ".to_string(),
                (Occupancy::Empty, None) => style("  . ".to_string()).dim().to_string(),
            };
            line.push_str(&cell);
        }
        println!("{}", line);
    }

    println!();
    println!(
        "{}",
        style("@ origin  A ally  E enemy  * item  . unreachable  N% arrival chance").dim()
    );
}

fn print_list(result: &SearchResult) {
    println!("{}", style("=== Reachable Squares ===").bold().green());
    for (square, record) in result.iter() {
        let probability = format!("{}", record.probability);
        println!(
            "  {:<8} p={}  steps={}  rerolls={}  skills={}",
            square.to_string(),
            styled_probability(record.probability, probability),
            record.len(),
            record.rerolls_used,
            skill_names(record.skills_used)
        );
    }
}

fn print_route(origin: Square, target: Square, record: &PathRecord) {
    println!(
        "{} {} -> {} (p={}, rerolls {}, skills {})",
        style("Route:").bold().yellow(),
        origin,
        target,
        record.probability,
        record.rerolls_used,
        skill_names(record.skills_used)
    );

    for (index, step) in record.steps.iter().enumerate() {
        let checks: Vec<String> = step
            .checks
            .iter()
            .map(|check| {
                let reroll = match check.reroll {
                    Some(RerollSource::Pool) => " +reroll",
                    Some(RerollSource::Skill) => " +skill",
                    None => "",
                };
                format!("{} {}{}", check.kind, check.probability, reroll)
            })
            .collect();
        let checks = if checks.is_empty() {
            "-".to_string()
        } else {
            checks.join(", ")
        };

        println!(
            "  {:>2}. {:<8} {}  => {}",
            index + 1,
            step.square.to_string(),
            checks,
            styled_probability(step.probability, step.probability)
        );
    }
}

fn skill_names(skills: Skills) -> String {
    if skills.is_empty() {
        return "none".to_string();
    }
    skills
        .iter_names()
        .map(|(name, _)| name.to_lowercase())
        .collect::<Vec<_>>()
        .join("+")
}
