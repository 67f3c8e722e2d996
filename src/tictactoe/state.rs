//! Search nodes: one game position plus the bookkeeping needed to walk back
//! to the root that seeded a search.

use std::{
    hash::{Hash, Hasher},
    rc::Rc,
};

use super::{Board, Move, Player, lines::LineAnalyzer};

/// One node in the search graph.
///
/// Every state owns its own copy of the grid, so building a successor never
/// touches the parent. Equality and hashing only look at the grid; turn,
/// depth and ancestry are ignored, which is what visited sets need.
///
/// Nodes are handed out behind [`Rc`] so children can keep a link to the
/// node they were generated from. The chain is dropped together with the
/// frontier that owns it when a search returns.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    player: Player,
    depth: usize,
    parent: Option<Rc<GameState>>,
    last_move: Option<Move>,
}

impl GameState {
    /// Create a root state from a live board and the player to move
    pub fn root(board: Board, player: Player) -> Rc<Self> {
        Rc::new(Self {
            board,
            player,
            depth: 0,
            parent: None,
            last_move: None,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whose mark would be placed next from this state
    pub fn player(&self) -> Player {
        self.player
    }

    /// Number of moves between the root and this state
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn parent(&self) -> Option<&Rc<GameState>> {
        self.parent.as_ref()
    }

    /// The move that produced this state from its parent
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Empty cells in row-major order. This order drives move generation in
    /// every strategy.
    pub fn empty_cells(&self) -> Vec<Move> {
        self.board.empty_cells()
    }

    /// Check if `mark` fills a row, column, or diagonal
    pub fn is_winner(&self, mark: Player) -> bool {
        LineAnalyzer::has_won(&self.board, mark)
    }

    /// Check if the position is over (either side won or the board is full)
    pub fn is_terminal(&self) -> bool {
        self.is_winner(Player::X) || self.is_winner(Player::O) || !self.board.has_empty()
    }

    /// Place `mark` at `mv` and return the resulting state.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidMove`] if the cell is occupied and
    /// [`crate::Error::OutOfBounds`] if it lies outside the grid.
    pub fn apply_move(self: &Rc<Self>, mv: Move, mark: Player) -> crate::Result<Rc<GameState>> {
        self.board.check_placement(mv)?;
        Ok(self.child(mv, mark))
    }

    /// All successors in row-major order, each placing the mark of the
    /// player to move.
    pub fn successors(self: &Rc<Self>) -> impl Iterator<Item = (Move, Rc<GameState>)> + '_ {
        self.empty_cells()
            .into_iter()
            .map(move |mv| (mv, self.successor(mv)))
    }

    /// Successor for a cell known to be empty, placing the mark of the
    /// player to move.
    pub(crate) fn successor(self: &Rc<Self>, mv: Move) -> Rc<GameState> {
        self.child(mv, self.player)
    }

    /// Moves leading from the root of this state's chain to this state
    pub fn path(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(self.depth);
        let mut current = Some(self);
        while let Some(state) = current {
            if let Some(mv) = state.last_move {
                moves.push(mv);
            }
            current = state.parent.as_deref();
        }
        moves.reverse();
        moves
    }

    fn child(self: &Rc<Self>, mv: Move, mark: Player) -> Rc<GameState> {
        Rc::new(GameState {
            board: self.board.with_cell(mv, mark.to_cell()),
            player: mark.opponent(),
            depth: self.depth + 1,
            parent: Some(Rc::clone(self)),
            last_move: Some(mv),
        })
    }
}

impl PartialEq for GameState {
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board
    }
}

impl Eq for GameState {}

impl Hash for GameState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.board.hash(state);
    }
}
