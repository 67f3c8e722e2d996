//! Noughts and crosses with uninformed search move pickers
//!
//! This crate provides:
//! - An NxN tic-tac-toe board, search state and turn-taking game
//! - Six interchangeable graph searches that pick the computer's move
//! - Agents wrapping those searches, plus a random baseline
//! - A match runner and arena for agent-vs-agent games
//! - The `tictac` command-line front end
//!
//! ```
//! use tictac_search::{
//!     config::SearchConfig,
//!     search::{self, Strategy},
//!     tictactoe::{Board, GameState, Move, Player},
//! };
//!
//! let board = Board::from_string("XX./OO./...")?;
//! let initial = GameState::root(board, Player::O);
//! let report = search::run(Strategy::BreadthFirst, &initial, Player::O, &SearchConfig::default());
//! assert_eq!(report.result, Some(Move::new(1, 2)));
//! # Ok::<(), tictac_search::Error>(())
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod search;
pub mod tictactoe;

pub use adapters::{RandomAgent, SearchAgent};
pub use config::{GameConfig, SearchConfig};
pub use error::{Error, Result};
pub use ports::Agent;
pub use search::{SearchReport, SearchResult, SearchStats, Strategy};
pub use tictactoe::{Board, Game, GameOutcome, GameState, Move, Player};
