//! Solve command - Run one strategy on a position

use anyhow::Result;
use clap::Parser;

use super::{parse_board, parse_player, resolve_to_move};
use crate::{
    cli::output::{format_board, format_result, print_kv, print_section},
    config::{DEFAULT_LIMITED_DEPTH, SearchConfig},
    search::{self, SearchReport, Strategy},
    tictactoe::{GameState, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Pick a move for a position with one search strategy")]
pub struct SolveArgs {
    /// Board rows, e.g. "XX./OO./..." ('.' for empty, '/' between rows)
    #[arg(long, short = 'b')]
    pub board: String,

    /// Mark to move (inferred from the mark counts if omitted)
    #[arg(long, value_parser = parse_player)]
    pub to_move: Option<Player>,

    /// Mark the search tries to make win
    #[arg(long, short = 't', value_parser = parse_player)]
    pub target: Player,

    /// Search strategy
    #[arg(long, short = 's', value_enum, default_value_t = Strategy::BreadthFirst)]
    pub strategy: Strategy,

    #[command(flatten)]
    pub search: SearchArgs,
}

/// Depth settings shared by the commands that run searches
#[derive(clap::Args, Debug, Clone)]
pub struct SearchArgs {
    /// Depth limit for depth-first search (unbounded if omitted)
    #[arg(long)]
    pub depth_limit: Option<usize>,

    /// Limit used by depth-limited search
    #[arg(long, default_value_t = DEFAULT_LIMITED_DEPTH)]
    pub limited_depth: usize,

    /// Deepest limit iterative deepening tries (cell count if omitted)
    #[arg(long)]
    pub max_depth: Option<usize>,
}

impl Default for SearchArgs {
    fn default() -> Self {
        Self {
            depth_limit: None,
            limited_depth: DEFAULT_LIMITED_DEPTH,
            max_depth: None,
        }
    }
}

impl SearchArgs {
    pub fn to_config(&self) -> SearchConfig {
        SearchConfig {
            depth_limit: self.depth_limit,
            limited_depth: self.limited_depth,
            max_depth: self.max_depth,
        }
    }
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let board = parse_board(&args.board)?;
    let to_move = resolve_to_move(&board, args.to_move)?;
    let initial = GameState::root(board, to_move);

    let report = search::run(args.strategy, &initial, args.target, &args.search.to_config());
    print_solution(&initial, args.target, &report);
    Ok(())
}

fn print_solution(initial: &GameState, target: Player, report: &SearchReport) {
    print_section(report.strategy.name());
    print!("{}", format_board(initial.board()));
    print_kv("To move", &initial.player().to_string());
    print_kv("Target", &target.to_string());
    print_kv("Move", &format_result(report.result));
    print_kv("Expanded", &report.stats.expanded.to_string());
    print_kv("Generated", &report.stats.generated.to_string());
    print_kv("Peak frontier", &report.stats.peak_frontier.to_string());
    print_kv("Max depth", &report.stats.max_depth.to_string());
}
