//! Winning line analysis for square boards of any size

use super::{Board, Cell, Move, Player};

/// Utility for analyzing winning lines
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Every winning line on a `size` x `size` board: rows, then columns,
    /// then the main diagonal and the anti-diagonal.
    pub fn lines(size: usize) -> Vec<Vec<Move>> {
        let mut lines = Vec::with_capacity(2 * size + 2);
        for row in 0..size {
            lines.push((0..size).map(|col| Move::new(row, col)).collect());
        }
        for col in 0..size {
            lines.push((0..size).map(|row| Move::new(row, col)).collect());
        }
        lines.push((0..size).map(|i| Move::new(i, i)).collect());
        lines.push((0..size).map(|i| Move::new(i, size - 1 - i)).collect());
        lines
    }

    /// Check if a player fills a full row, column, or diagonal
    pub fn has_won(board: &Board, player: Player) -> bool {
        let size = board.size();
        if size == 0 {
            return false;
        }
        debug_assert_eq!(board.cell_count(), size * size, "board must be square");

        let target = player.to_cell();
        (0..size).any(|row| filled(board, target, (0..size).map(|col| Move::new(row, col))))
            || (0..size).any(|col| filled(board, target, (0..size).map(|row| Move::new(row, col))))
            || filled(board, target, (0..size).map(|i| Move::new(i, i)))
            || filled(board, target, (0..size).map(|i| Move::new(i, size - 1 - i)))
    }
}

fn filled(board: &Board, target: Cell, mut line: impl Iterator<Item = Move>) -> bool {
    line.all(|mv| board.get(mv) == target)
}
