//! Board cells, symbols and the fixed winning lines

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of cells on the board
pub const BOARD_SIZE: usize = 9;

/// Index triples that win when held by one symbol.
///
/// Rows first, then columns, then diagonals. When several lines match, the
/// first one in this order is reported.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A player's mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    X,
    O,
}

impl Symbol {
    /// The symbol that moves after this one
    pub fn other(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Symbol::X => "X",
            Symbol::O => "O",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contents of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        *self == Cell::Empty
    }

    /// Symbol occupying the cell, if any
    pub fn symbol(&self) -> Option<Symbol> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Symbol::X),
            Cell::O => Some(Symbol::O),
        }
    }

    /// Text shown on the cell button ("" when empty)
    pub fn as_str(&self) -> &'static str {
        self.symbol().map(|s| s.as_str()).unwrap_or("")
    }
}

impl From<Symbol> for Cell {
    fn from(symbol: Symbol) -> Self {
        match symbol {
            Symbol::X => Cell::X,
            Symbol::O => Cell::O,
        }
    }
}

/// The 3x3 grid, indexed row-major 0..9
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// An all-empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Cell at `index`, or `None` when off the board
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn cells(&self) -> &[Cell; BOARD_SIZE] {
        &self.cells
    }

    /// Place a symbol. Returns false (and leaves the board alone) when the
    /// index is off the board or the cell is taken.
    pub fn place(&mut self, index: usize, symbol: Symbol) -> bool {
        match self.cells.get_mut(index) {
            Some(cell) if cell.is_empty() => {
                *cell = symbol.into();
                true
            }
            _ => false,
        }
    }

    /// First winning line in `WINNING_LINES` order, with its owner
    pub fn winning_line(&self) -> Option<(Symbol, [usize; 3])> {
        WINNING_LINES.iter().find_map(|&line| {
            let [a, b, c] = line;
            let owner = self.cells[a].symbol()?;
            (self.cells[a] == self.cells[b] && self.cells[a] == self.cells[c])
                .then_some((owner, line))
        })
    }

    pub fn winner(&self) -> Option<Symbol> {
        self.winning_line().map(|(symbol, _)| symbol)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Number of cells holding `symbol`
    pub fn count(&self, symbol: Symbol) -> usize {
        let cell = Cell::from(symbol);
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }
}
