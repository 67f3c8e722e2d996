//! Board representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A player in the game, and the mark it places
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

impl FromStr for Player {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Ok(Player::X),
            "o" => Ok(Player::O),
            _ => Err(crate::Error::InvalidPlayerString {
                player: s.to_string(),
            }),
        }
    }
}

/// A (row, column) coordinate into the grid, 0-indexed
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Build a move from a row-major index on a board of the given size
    pub fn from_index(index: usize, size: usize) -> Self {
        Self {
            row: index / size,
            col: index % size,
        }
    }

    /// Row-major index of this move on a board of the given size
    pub fn index(self, size: usize) -> usize {
        self.row * size + self.col
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A square grid of cells stored in row-major order.
///
/// Boards are square by construction, so line checks never have to
/// re-validate the shape. Equality and hashing look only at the cell
/// contents, which makes a `Board` the canonical key for visited sets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

/// Unchecked wire form of a [`Board`]
#[derive(Deserialize)]
struct RawBoard {
    size: usize,
    cells: Vec<Cell>,
}

impl TryFrom<RawBoard> for Board {
    type Error = crate::Error;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        if raw.cells.len() != raw.size * raw.size {
            return Err(crate::Error::InvalidBoardLength {
                got: raw.cells.len(),
                context: format!("serialized {0}x{0} board", raw.size),
            });
        }
        Ok(Self {
            size: raw.size,
            cells: raw.cells,
        })
    }
}

impl Board {
    /// Create an empty board of `size` x `size` cells
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Create a board from explicit rows.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NonSquareBoard`] if any row length differs from
    /// the number of rows.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, crate::Error> {
        let size = rows.len();
        if let Some(bad) = rows.iter().find(|row| row.len() != size) {
            return Err(crate::Error::NonSquareBoard {
                rows: size,
                cols: bad.len(),
            });
        }

        Ok(Self {
            size,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Create a board from a row-major string such as `"XX./OO./..."`.
    ///
    /// Whitespace and `/` separators are ignored. The remaining character
    /// count must be a non-zero perfect square.
    ///
    /// # Errors
    ///
    /// Returns error if the cell count is not a perfect square or a character
    /// is not a valid cell.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .collect();

        let size = chars.len().isqrt();
        if size == 0 || size * size != chars.len() {
            return Err(crate::Error::InvalidBoardLength {
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let cells = chars
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                    character: c,
                    position: i,
                    context: s.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { size, cells })
    }

    /// Side length of the board
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Flattened row-major cell contents
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Check that a move lies inside the grid
    pub fn contains(&self, mv: Move) -> bool {
        mv.row < self.size && mv.col < self.size
    }

    /// Get the cell at a move. Panics when the move is out of bounds.
    pub fn get(&self, mv: Move) -> Cell {
        self.cells[mv.index(self.size)]
    }

    /// Check if a cell is empty
    pub fn is_empty(&self, mv: Move) -> bool {
        self.get(mv) == Cell::Empty
    }

    /// All empty cells in row-major order
    pub fn empty_cells(&self) -> Vec<Move> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| Move::from_index(i, self.size))
            .collect()
    }

    /// Check whether any cell is still empty
    pub fn has_empty(&self) -> bool {
        self.cells.contains(&Cell::Empty)
    }

    /// Count cells holding `cell`
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Infer whose turn it is from the piece counts, assuming X opened.
    ///
    /// Returns `None` when the counts cannot come from X-first play.
    pub fn inferred_turn(&self) -> Option<Player> {
        let x = self.count(Cell::X);
        let o = self.count(Cell::O);
        if x == o {
            Some(Player::X)
        } else if x == o + 1 {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Iterate over the rows of the board
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size.max(1))
    }

    /// Validated placement used at the mutation boundary.
    pub(crate) fn check_placement(&self, mv: Move) -> Result<(), crate::Error> {
        if !self.contains(mv) {
            return Err(crate::Error::OutOfBounds {
                row: mv.row,
                col: mv.col,
                size: self.size,
            });
        }
        if !self.is_empty(mv) {
            return Err(crate::Error::InvalidMove {
                row: mv.row,
                col: mv.col,
            });
        }
        Ok(())
    }

    /// Copy the board with one cell overwritten. The caller guarantees
    /// the move is in bounds.
    pub(crate) fn with_cell(&self, mv: Move, cell: Cell) -> Board {
        let mut next = self.clone();
        next.cells[mv.index(self.size)] = cell;
        next
    }

    /// Overwrite a cell in place. The caller guarantees the move is in bounds.
    pub(crate) fn set(&mut self, mv: Move, cell: Cell) {
        let index = mv.index(self.size);
        self.cells[index] = cell;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}
