//! Output formatting and progress bars for CLI

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    search::{SearchReport, SearchResult},
    tictactoe::Board,
};

/// Create a progress bar for arena games
pub fn create_game_progress(total_games: u64) -> Result<ProgressBar> {
    let pb = ProgressBar::new(total_games);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")?
            .progress_chars("=>-"),
    );
    Ok(pb)
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Render a board with cell separators, one rule under each row
pub fn format_board(board: &Board) -> String {
    let rule = "-".repeat(board.size() * 2 + 1);
    let mut out = String::new();
    for row in board.rows() {
        let cells: Vec<String> = row.iter().map(|cell| cell.to_char().to_string()).collect();
        out.push('|');
        out.push_str(&cells.join("|"));
        out.push_str("|\n");
        out.push_str(&rule);
        out.push('\n');
    }
    out
}

pub fn format_result(result: SearchResult) -> String {
    result.map_or_else(|| "no move".to_string(), |mv| mv.to_string())
}

/// One table row per report
pub fn print_report_table(reports: &[SearchReport]) {
    println!(
        "  {:<28} {:>8} {:>10} {:>10} {:>10} {:>6}",
        "strategy", "move", "expanded", "generated", "frontier", "depth"
    );
    println!("  {}", "-".repeat(77));
    for report in reports {
        println!(
            "  {:<28} {:>8} {:>10} {:>10} {:>10} {:>6}",
            report.strategy.name(),
            format_result(report.result),
            report.stats.expanded,
            report.stats.generated,
            report.stats.peak_frontier,
            report.stats.max_depth
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Move;

    #[test]
    fn test_format_board() {
        let board = Board::from_string("XO./.../..X").unwrap();
        assert_eq!(
            format_board(&board),
            "|X|O|.|\n-------\n|.|.|.|\n-------\n|.|.|X|\n-------\n"
        );
    }

    #[test]
    fn test_format_result() {
        assert_eq!(format_result(Some(Move::new(1, 2))), "(1, 2)");
        assert_eq!(format_result(None), "no move");
    }
}
