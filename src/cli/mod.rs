//! Command-line interface for the search-driven tic-tac-toe player
//!
//! Subcommands play against a human, solve a single position, compare the
//! strategies side-by-side and run agent-vs-agent arenas.

pub mod commands;
pub mod human;
pub mod output;
