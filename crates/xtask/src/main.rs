//! Development tasks for the path search workspace
//!
//! This binary provides development utilities using the cargo-xtask pattern.
//! Run with: `cargo xtask <command>`

mod commands;
mod utils;

use anyhow::Result;
use clap::Parser;
use commands::{Reach, Tables};

/// Development tasks for the path search workspace
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tools for the path search engine", long_about = None)]
#[command(version)]
struct Cli {
    /// Log engine events at debug level (RUST_LOG directives still apply)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Search a scenario and show every reachable square
    Reach(Reach),

    /// Show the effective risk tables
    Tables(Tables),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Reach(cmd) => cmd.execute(),
        Command::Tables(cmd) => cmd.execute(),
    }
}
