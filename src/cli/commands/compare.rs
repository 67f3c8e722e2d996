//! Compare command - Run every strategy on the same position

use std::rc::Rc;

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use super::{parse_board, parse_player, resolve_to_move, solve::SearchArgs};
use crate::{
    cli::output::{format_board, print_kv, print_report_table, print_section},
    search::{self, SearchReport, SearchStats, Strategy},
    tictactoe::{GameState, Move, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Compare all search strategies on one position")]
pub struct CompareArgs {
    /// Board rows, e.g. "XX./OO./..." ('.' for empty, '/' between rows)
    #[arg(long, short = 'b')]
    pub board: String,

    /// Mark to move (inferred from the mark counts if omitted)
    #[arg(long, value_parser = parse_player)]
    pub to_move: Option<Player>,

    /// Mark the searches try to make win (defaults to the mark to move)
    #[arg(long, short = 't', value_parser = parse_player)]
    pub target: Option<Player>,

    /// Print the table as JSON instead
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub search: SearchArgs,
}

#[derive(Serialize)]
struct ReportRow {
    strategy: Strategy,
    result: Option<Move>,
    stats: SearchStats,
}

impl From<&SearchReport> for ReportRow {
    fn from(report: &SearchReport) -> Self {
        Self {
            strategy: report.strategy,
            result: report.result,
            stats: report.stats,
        }
    }
}

/// Run all strategies in menu order
pub fn compare_all(
    initial: &Rc<GameState>,
    target: Player,
    args: &SearchArgs,
) -> Vec<SearchReport> {
    let config = args.to_config();
    Strategy::ALL
        .iter()
        .map(|&strategy| search::run(strategy, initial, target, &config))
        .collect()
}

pub fn execute(args: CompareArgs) -> Result<()> {
    let board = parse_board(&args.board)?;
    let to_move = resolve_to_move(&board, args.to_move)?;
    let target = args.target.unwrap_or(to_move);
    let initial = GameState::root(board, to_move);

    let reports = compare_all(&initial, target, &args.search);

    if args.json {
        let rows: Vec<ReportRow> = reports.iter().map(ReportRow::from).collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    print_section("Strategy comparison");
    print!("{}", format_board(initial.board()));
    print_kv("To move", &to_move.to_string());
    print_kv("Target", &target.to_string());
    println!();
    print_report_table(&reports);
    Ok(())
}
