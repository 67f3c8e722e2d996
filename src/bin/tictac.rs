//! tictac - Tic-tac-toe against uninformed search strategies
//!
//! Subcommands:
//! - Play against the computer on the console
//! - Solve a single position with one strategy
//! - Compare all strategies on a position
//! - Run repeated agent-vs-agent games

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::LevelFilter;

#[derive(Parser)]
#[command(name = "tictac")]
#[command(version, about = "Tic-tac-toe driven by uninformed search", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer
    Play(tictac_search::cli::commands::play::PlayArgs),

    /// Pick a move for one position
    Solve(tictac_search::cli::commands::solve::SolveArgs),

    /// Compare all strategies on one position
    Compare(tictac_search::cli::commands::compare::CompareArgs),

    /// Play repeated games between agents
    Arena(tictac_search::cli::commands::arena::ArenaArgs),
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Play(args) => tictac_search::cli::commands::play::execute(args),
        Commands::Solve(args) => tictac_search::cli::commands::solve::execute(args),
        Commands::Compare(args) => tictac_search::cli::commands::compare::execute(args),
        Commands::Arena(args) => tictac_search::cli::commands::arena::execute(args),
    }
}
