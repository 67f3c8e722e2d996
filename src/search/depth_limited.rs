//! Depth-limited search: depth-first search with a preset limit

use std::rc::Rc;

use super::{SearchResult, SearchStats, depth_first};
use crate::{
    config::DEFAULT_LIMITED_DEPTH,
    tictactoe::{GameState, Player},
};

/// Depth-first search bounded at the default limit of three plies
pub fn search(initial: &Rc<GameState>, target: Player) -> SearchResult {
    search_with_stats(initial, target, DEFAULT_LIMITED_DEPTH).0
}

pub fn search_with_stats(
    initial: &Rc<GameState>,
    target: Player,
    limit: usize,
) -> (SearchResult, SearchStats) {
    depth_first::search_with_stats(initial, target, Some(limit))
}
