//! Noughts and crosses on a square board of any size

pub mod board;
pub mod game;
pub mod lines;
pub mod state;

pub use board::{Board, Cell, Move, Player};
pub use game::{Game, GameOutcome, PlayedMove};
pub use lines::LineAnalyzer;
pub use state::GameState;
