//! Uniform-cost search with win/loss-biased path costs

use std::{
    cmp::Ordering,
    collections::{BinaryHeap, HashSet},
    rc::Rc,
};

use super::{Node, SearchResult, SearchStats, fallback, relative_depth};
use crate::tictactoe::{GameState, Player};

/// Cost of a state where the target has a full line
pub const WIN_COST: i64 = -1000;

/// Cost of a state where the opponent has a full line
pub const LOSS_COST: i64 = 1000;

/// Priority of a state: wins for `target` first, opponent wins last,
/// everything else by depth.
pub fn cost(state: &GameState, target: Player) -> i64 {
    if state.is_winner(target) {
        WIN_COST
    } else if state.is_winner(target.opponent()) {
        LOSS_COST
    } else {
        i64::try_from(state.depth()).unwrap_or(i64::MAX)
    }
}

/// Heap entry ordered by `(cost, sequence)`, smallest first.
///
/// The sequence number is handed out at push time, so equal costs pop in
/// insertion order and the ordering never has to compare states.
struct Entry {
    cost: i64,
    sequence: u64,
    node: Node,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.sequence == other.sequence
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap
        (other.cost, other.sequence).cmp(&(self.cost, self.sequence))
    }
}

/// Find the first move toward the cheapest reachable win for `target`.
pub fn search(initial: &Rc<GameState>, target: Player) -> SearchResult {
    search_with_stats(initial, target).0
}

/// Uniform-cost search that also reports traversal counters.
///
/// Entries carry the first move taken from the root. Visited bookkeeping
/// and the fallback move match breadth-first search.
pub fn search_with_stats(initial: &Rc<GameState>, target: Player) -> (SearchResult, SearchStats) {
    let mut stats = SearchStats::default();
    if initial.is_terminal() {
        return (None, stats);
    }

    let mut sequence = 0u64;
    let mut heap = BinaryHeap::from([Entry {
        cost: 0,
        sequence,
        node: Node::root(initial),
    }]);
    let mut visited = HashSet::new();

    while let Some(Entry { node, .. }) = heap.pop() {
        if !visited.insert(node.state.board().clone()) {
            continue;
        }

        if node.state.is_winner(target) {
            log::trace!("uniform-cost reached a {target} win via {:?}", node.state.path());
            return (node.first, stats);
        }

        stats.record_expansion(relative_depth(&node.state, initial));
        for (mv, child) in node.state.successors() {
            sequence += 1;
            heap.push(Entry {
                cost: cost(&child, target),
                sequence,
                node: node.child(mv, child),
            });
            stats.generated += 1;
        }
        stats.record_frontier(heap.len());
    }

    (fallback(initial), stats)
}
