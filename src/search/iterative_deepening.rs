//! Iterative-deepening search

use std::rc::Rc;

use super::{SearchResult, SearchStats, depth_first, fallback};
use crate::tictactoe::{GameState, Player};

/// Run depth-first search with limits `0, 1, 2, ...` up to `max_depth` and
/// return the first move any of them finds.
///
/// `max_depth` defaults to the number of cells on the board and is capped
/// at one more than the number of empty cells. When every limit comes back
/// empty the first empty cell of `initial` is returned.
pub fn search(initial: &Rc<GameState>, target: Player, max_depth: Option<usize>) -> SearchResult {
    search_with_stats(initial, target, max_depth).0
}

/// Iterative deepening that also reports counters summed over all rounds
pub fn search_with_stats(
    initial: &Rc<GameState>,
    target: Player,
    max_depth: Option<usize>,
) -> (SearchResult, SearchStats) {
    let mut stats = SearchStats::default();
    if initial.is_terminal() {
        return (None, stats);
    }

    // Past one more than the empty-cell count a deeper limit sees nothing new
    let deepest = initial.empty_cells().len() + 1;
    let max_depth = max_depth
        .unwrap_or_else(|| initial.board().cell_count())
        .min(deepest);
    for limit in 0..=max_depth {
        let (result, round) = depth_first::search_with_stats(initial, target, Some(limit));
        stats.absorb(&round);
        if result.is_some() {
            log::trace!("iterative deepening succeeded at limit {limit}");
            return (result, stats);
        }
    }

    (fallback(initial), stats)
}
