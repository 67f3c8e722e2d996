//! Depth-first search with an optional depth limit.
//!
//! The traversal runs on an explicit stack of frames instead of recursion.
//! Each frame remembers its state, its depth relative to the search root and
//! the position of its move loop.
//!
//! The answer is the first-level move whose subtree contains a win for the
//! target, not the move that completes the line: a frame whose child reports
//! a win answers with its own loop move, so the value that reaches the top
//! is the root frame's current move. A state that is itself a win answers
//! with the move that produced it.

use std::rc::Rc;

use super::{SearchResult, SearchStats};
use crate::tictactoe::{GameState, Move, Player};

/// One level of the explicit traversal stack
struct Frame {
    state: Rc<GameState>,
    depth: usize,
    moves: Vec<Move>,
    next: usize,
}

impl Frame {
    /// The loop move currently being explored from this frame
    fn current(&self) -> Option<Move> {
        self.next.checked_sub(1).and_then(|i| self.moves.get(i)).copied()
    }
}

/// What entering a state produced
enum Visit {
    Win,
    Cutoff,
    Expand(Frame),
}

fn visit(
    state: Rc<GameState>,
    depth: usize,
    target: Player,
    limit: Option<usize>,
    stats: &mut SearchStats,
) -> Visit {
    if limit.is_some_and(|limit| depth >= limit) {
        return Visit::Cutoff;
    }
    if state.is_winner(target) {
        return Visit::Win;
    }

    stats.record_expansion(depth);
    let moves = state.empty_cells();
    Visit::Expand(Frame {
        state,
        depth,
        moves,
        next: 0,
    })
}

/// Depth-first search for a move toward a win for `target`.
///
/// With `limit = Some(l)`, any state at relative depth `l` or deeper is
/// treated as a dead end before its win test, so only states shallower than
/// `l` are expanded. There is no fallback move.
pub fn search(initial: &Rc<GameState>, target: Player, limit: Option<usize>) -> SearchResult {
    search_with_stats(initial, target, limit).0
}

/// Depth-first search that also reports traversal counters
pub fn search_with_stats(
    initial: &Rc<GameState>,
    target: Player,
    limit: Option<usize>,
) -> (SearchResult, SearchStats) {
    let mut stats = SearchStats::default();
    if initial.is_terminal() {
        return (None, stats);
    }

    let mut stack = match visit(Rc::clone(initial), 0, target, limit, &mut stats) {
        Visit::Win => return (initial.last_move(), stats),
        Visit::Cutoff => return (None, stats),
        Visit::Expand(frame) => vec![frame],
    };
    stats.record_frontier(stack.len());

    while let Some(frame) = stack.last_mut() {
        let Some(&mv) = frame.moves.get(frame.next) else {
            stack.pop();
            continue;
        };
        frame.next += 1;
        let depth = frame.depth + 1;
        let child = frame.state.successor(mv);
        stats.generated += 1;

        match visit(child, depth, target, limit, &mut stats) {
            Visit::Win => {
                // Unwind: every frame answers with its own loop move, the
                // last one popped is the root.
                let mut answer = None;
                while let Some(frame) = stack.pop() {
                    answer = frame.current();
                }
                return (answer, stats);
            }
            Visit::Cutoff => {}
            Visit::Expand(frame) => {
                stack.push(frame);
                stats.record_frontier(stack.len());
            }
        }
    }

    (None, stats)
}
