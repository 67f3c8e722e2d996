//! High-level game management: the live board the orchestrator owns

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use super::{Board, GameState, Move, Player, lines::LineAnalyzer};

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

/// A move that was played, with the player who made it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayedMove {
    pub player: Player,
    pub mv: Move,
}

/// A game in progress with its history
#[derive(Debug, Clone, Serialize)]
pub struct Game {
    board: Board,
    to_move: Player,
    moves: Vec<PlayedMove>,
    outcome: Option<GameOutcome>,
}

impl Game {
    /// Create a new game on an empty `size` x `size` board
    pub fn new(size: usize, first: Player) -> Self {
        Self::from_position(Board::new(size), first)
    }

    /// Resume a game from an arbitrary position
    pub fn from_position(board: Board, to_move: Player) -> Self {
        let outcome = Self::outcome_of(&board);
        Game {
            board,
            to_move,
            moves: Vec::new(),
            outcome,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn moves(&self) -> &[PlayedMove] {
        &self.moves
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Build a fresh search root from the live board.
    ///
    /// The root owns a copy of the grid, so nothing a search does can reach
    /// back into the game.
    pub fn state(&self) -> Rc<GameState> {
        GameState::root(self.board.clone(), self.to_move)
    }

    /// Place the current player's mark at `mv`
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] once the game has an outcome, and
    /// [`crate::Error::InvalidMove`] or [`crate::Error::OutOfBounds`] when the
    /// cell cannot be played. The game is unchanged on error.
    pub fn play(&mut self, mv: Move) -> crate::Result<()> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        self.board.check_placement(mv)?;
        self.board.set(mv, self.to_move.to_cell());
        self.moves.push(PlayedMove {
            player: self.to_move,
            mv,
        });
        self.to_move = self.to_move.opponent();
        self.outcome = Self::outcome_of(&self.board);

        if let Some(outcome) = self.outcome {
            log::info!("game finished after {} moves: {outcome:?}", self.moves.len());
        }

        Ok(())
    }

    fn outcome_of(board: &Board) -> Option<GameOutcome> {
        if LineAnalyzer::has_won(board, Player::X) {
            Some(GameOutcome::Win(Player::X))
        } else if LineAnalyzer::has_won(board, Player::O) {
            Some(GameOutcome::Win(Player::O))
        } else if !board.has_empty() {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(3, Player::X)
    }
}
