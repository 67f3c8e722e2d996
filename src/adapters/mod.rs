//! Adapters implementing domain ports.
//!
//! Computer players live here; the interactive human player is part of the
//! CLI because it owns the console.

pub mod random_agent;
pub mod search_agent;

pub use random_agent::RandomAgent;
pub use search_agent::SearchAgent;
