//! Game-running pipelines
//!
//! This module drives agents through complete games:
//! - A single match between two agents
//! - Repeated matches with tallied results

pub mod arena;

pub use arena::{Arena, ArenaResult, play_match};

pub use crate::ports::Agent;
