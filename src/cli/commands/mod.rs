//! CLI subcommands

pub mod arena;
pub mod compare;
pub mod play;
pub mod solve;

use anyhow::{Context, Result};

use crate::tictactoe::{Board, Player};

/// Parse an `x`/`o` flag value
pub fn parse_player(value: &str) -> std::result::Result<Player, String> {
    value.parse::<Player>().map_err(|err| err.to_string())
}

/// Parse a `--board` value such as `XX./OO./...`
pub fn parse_board(value: &str) -> Result<Board> {
    Board::from_string(value).with_context(|| format!("invalid --board '{value}'"))
}

/// Mark to move: the explicit flag, else inferred from the mark counts
pub fn resolve_to_move(board: &Board, to_move: Option<Player>) -> Result<Player> {
    to_move
        .or_else(|| board.inferred_turn())
        .context("cannot infer whose turn it is from the mark counts; pass --to-move")
}
