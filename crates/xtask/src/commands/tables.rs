//! Show the effective risk tables
//!
//! Prints the per-threat probabilities every check kind is priced with, either
//! as a table or as TOML that the tables loader reads back.

use std::path::PathBuf;

use anyhow::Result;
use board_content::TablesLoader;
use board_core::{BoardConfig, CheckKind, RiskTable};
use clap::Parser;
use console::style;
use strum::IntoEnumIterator;

use crate::utils::{load_tables, styled_probability};

/// Show the effective risk tables
#[derive(Parser)]
pub struct Tables {
    /// Risk tables (TOML); defaults apply when omitted
    #[arg(short, long, value_name = "FILE")]
    tables: Option<PathBuf>,

    /// Print as TOML instead of a table
    #[arg(long)]
    toml: bool,
}

impl Tables {
    pub fn execute(self) -> Result<()> {
        let table = load_tables(self.tables.as_deref())?;

        if self.toml {
            print!("{}", TablesLoader::render(&table)?);
            return Ok(());
        }

        let source = match &self.tables {
            Some(path) => path.display().to_string(),
            None => "built-in defaults".to_string(),
        };
        println!("{} {}", style("Tables:").bold().cyan(), source);
        println!();
        print_table(&table);

        Ok(())
    }
}

fn print_table(table: &RiskTable) {
    let mut header = format!("  {:<12}", "threats");
    for threats in 0..=BoardConfig::MAX_THREATS {
        header.push_str(&format!("{:>7}", threats));
    }
    println!("{}", style(header).bold());

    for kind in CheckKind::iter() {
        let mut line = format!("  {:<12}", kind.as_ref());
        for threats in 0..=BoardConfig::MAX_THREATS as u8 {
            let probability = table.probability(kind, threats);
            let text = format!("{:>7}", probability.to_string());
            line.push_str(&styled_probability(probability, text).to_string());
        }
        println!("{}", line);
    }
}
