//! Bidirectional search between the initial state and synthetic goal states.
//!
//! The forward side is a breadth-first frontier from the initial state. The
//! backward side is one breadth-first frontier per board row, each seeded
//! with a goal grid whose row is entirely the target mark and every other
//! cell empty. Column and diagonal goals are never built, so a win that
//! needs one of those lines is never met in the middle.
//!
//! Each outer iteration pops one forward entry and then one entry from
//! every backward queue that still has work. A forward pop that was already
//! visited ends the iteration early. The sides meet when a popped grid is
//! already in the other side's visited set.

use std::{
    collections::{HashMap, HashSet, VecDeque, hash_map::Entry},
    rc::Rc,
};

use super::{Node, SearchResult, SearchStats, fallback, relative_depth};
use crate::tictactoe::{Board, GameState, Move, Player};

/// A backward frontier grown from one goal state
struct Frontier {
    queue: VecDeque<Node>,
    visited: HashSet<Board>,
}

impl Frontier {
    fn new(goal: Rc<GameState>) -> Self {
        Self {
            queue: VecDeque::from([Node::root(&goal)]),
            visited: HashSet::new(),
        }
    }
}

/// One goal per row: row `i` full of `target`, all else empty, `target` to
/// move.
pub fn goal_states(size: usize, target: Player) -> Vec<Rc<GameState>> {
    (0..size)
        .map(|row| {
            let mut board = Board::new(size);
            for col in 0..size {
                board.set(Move::new(row, col), target.to_cell());
            }
            GameState::root(board, target)
        })
        .collect()
}

/// Find a move by meeting forward and backward frontiers.
pub fn search(initial: &Rc<GameState>, target: Player) -> SearchResult {
    search_with_stats(initial, target).0
}

/// Bidirectional search that also reports traversal counters.
///
/// Forward visited states remember the first move that reached them from
/// the initial state. Whichever side detects the meeting, the answer is the
/// forward first move of the shared grid, so it is always playable on the
/// initial board. Falls back to the first empty cell when either side runs
/// dry.
pub fn search_with_stats(initial: &Rc<GameState>, target: Player) -> (SearchResult, SearchStats) {
    let mut stats = SearchStats::default();
    if initial.is_terminal() {
        return (None, stats);
    }

    let mut forward = VecDeque::from([Node::root(initial)]);
    let mut forward_visited: HashMap<Board, Option<Move>> = HashMap::new();
    let mut backward: Vec<Frontier> = goal_states(initial.board().size(), target)
        .into_iter()
        .map(Frontier::new)
        .collect();

    while !forward.is_empty() && backward.iter().any(|frontier| !frontier.queue.is_empty()) {
        let Some(node) = forward.pop_front() else {
            break;
        };

        match forward_visited.entry(node.state.board().clone()) {
            Entry::Occupied(_) => continue,
            Entry::Vacant(slot) => {
                slot.insert(node.first);
            }
        }

        if backward
            .iter()
            .any(|frontier| frontier.visited.contains(node.state.board()))
        {
            log::trace!("bidirectional met on the forward side at {:?}", node.state.path());
            return (node.first, stats);
        }

        stats.record_expansion(relative_depth(&node.state, initial));
        for (mv, child) in node.state.successors() {
            forward.push_back(node.child(mv, child));
            stats.generated += 1;
        }

        for frontier in &mut backward {
            let Some(node) = frontier.queue.pop_front() else {
                continue;
            };
            if !frontier.visited.insert(node.state.board().clone()) {
                continue;
            }

            if let Some(&first) = forward_visited.get(node.state.board()) {
                log::trace!("bidirectional met on the backward side at depth {}", node.state.depth());
                return (first, stats);
            }

            stats.record_expansion(node.state.depth());
            for (mv, child) in node.state.successors() {
                frontier.queue.push_back(node.child(mv, child));
                stats.generated += 1;
            }
        }

        let pending = forward.len() + backward.iter().map(|f| f.queue.len()).sum::<usize>();
        stats.record_frontier(pending);
    }

    (fallback(initial), stats)
}
