//! Breadth-first search over the cooperative game graph

use std::{
    collections::{HashSet, VecDeque},
    rc::Rc,
};

use super::{Node, SearchResult, SearchStats, fallback, relative_depth};
use crate::tictactoe::{GameState, Player};

/// Find the first move toward the shallowest reachable win for `target`.
pub fn search(initial: &Rc<GameState>, target: Player) -> SearchResult {
    search_with_stats(initial, target).0
}

/// Breadth-first search that also reports traversal counters.
///
/// States are marked visited when popped, not when pushed, so the same grid
/// may sit in the queue several times but is expanded once. Popping a win
/// for `target` returns the first move on the path that reached it. When the
/// queue empties the first empty cell of `initial` is returned instead.
pub fn search_with_stats(initial: &Rc<GameState>, target: Player) -> (SearchResult, SearchStats) {
    let mut stats = SearchStats::default();
    if initial.is_terminal() {
        return (None, stats);
    }

    let mut queue = VecDeque::from([Node::root(initial)]);
    let mut visited = HashSet::new();

    while let Some(node) = queue.pop_front() {
        if !visited.insert(node.state.board().clone()) {
            continue;
        }

        if node.state.is_winner(target) {
            log::trace!("breadth-first reached a {target} win via {:?}", node.state.path());
            return (node.first, stats);
        }

        stats.record_expansion(relative_depth(&node.state, initial));
        for (mv, child) in node.state.successors() {
            queue.push_back(node.child(mv, child));
            stats.generated += 1;
        }
        stats.record_frontier(queue.len());
    }

    (fallback(initial), stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::{Board, Move};

    fn root(s: &str, player: Player) -> Rc<GameState> {
        GameState::root(Board::from_string(s).unwrap(), player)
    }

    #[test]
    fn immediate_win_is_found_at_depth_one() {
        let state = root("XX./OO./...", Player::O);
        assert_eq!(search(&state, Player::O), Some(Move::new(1, 2)));
    }

    #[test]
    fn returns_first_move_of_a_deeper_path() {
        // O to move cannot win in one; the first winning path found starts
        // at the row-major-first empty cell that leads to one.
        let state = root("O../.X./..X", Player::O);
        let result = search(&state, Player::O);
        assert_eq!(result, Some(Move::new(0, 1)));
    }

    #[test]
    fn terminal_state_returns_none() {
        let won = root("OOO/XX./X..", Player::X);
        assert_eq!(search(&won, Player::O), None);
        assert_eq!(search(&won, Player::X), None);
    }

    #[test]
    fn falls_back_to_first_empty_cell_when_no_win_is_reachable() {
        // XOX
        // XOO
        // O..
        let state = root("XOX/XOO/O..", Player::X);
        let (result, stats) = search_with_stats(&state, Player::X);
        assert_eq!(result, Some(Move::new(2, 1)));
        // root, two single placements, two full boards
        assert_eq!(stats.expanded, 5);
        assert_eq!(stats.generated, 4);
        assert_eq!(stats.max_depth, 2);
    }
}
