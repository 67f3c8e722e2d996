//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::rc::Rc;

use rand::{Rng, rngs::StdRng};
use tictac_search::tictactoe::{Board, Game, GameState, Player};

/// Root search state for a board written as rows separated by '/'
pub fn root(board: &str, to_move: Player) -> Rc<GameState> {
    GameState::root(Board::from_string(board).expect("valid board"), to_move)
}

/// A non-terminal position reached by `plies` random moves from an empty
/// board, or `None` if the random game ended first.
pub fn random_position(rng: &mut StdRng, size: usize, plies: usize) -> Option<Game> {
    let first = if rng.random_bool(0.5) { Player::X } else { Player::O };
    let mut game = Game::new(size, first);
    for _ in 0..plies {
        let cells = game.board().empty_cells();
        let mv = cells[rng.random_range(0..cells.len())];
        game.play(mv).expect("empty cell is playable");
        if game.is_over() {
            return None;
        }
    }
    Some(game)
}

/// Up to `count` distinct non-terminal positions on a 3x3 board
pub fn sample_positions(rng: &mut StdRng, count: usize) -> Vec<Game> {
    let mut positions = Vec::new();
    while positions.len() < count {
        let plies = rng.random_range(0..=7);
        if let Some(game) = random_position(rng, 3, plies) {
            positions.push(game);
        }
    }
    positions
}
