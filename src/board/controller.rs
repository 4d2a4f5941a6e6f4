//! Move handling and terminal-state evaluation

use std::fmt;

use serde::Serialize;

use super::state::{BOARD_SIZE, Board, Cell, Symbol};

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    InProgress,
    Won(Symbol),
    Draw,
}

/// Status line shown to the player after every accepted move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    Turn(Symbol),
    Won(Symbol),
    Draw,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Turn(symbol) => write!(f, "Player {symbol}'s turn"),
            Status::Won(symbol) => write!(f, "Player {symbol} wins!"),
            Status::Draw => f.write_str("Draw game."),
        }
    }
}

/// Tic-tac-toe controller owning the board, whose turn it is, and the result
#[derive(Debug, Clone, Serialize)]
pub struct TicTacToe {
    board: Board,
    current: Symbol,
    outcome: Outcome,
    winning_line: Option<[usize; 3]>,
    status: Status,
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToe {
    /// Fresh game: empty board, X to move
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current: Symbol::X,
            outcome: Outcome::InProgress,
            winning_line: None,
            status: Status::Turn(Symbol::X),
        }
    }

    /// Clear the board and hand the first move to X
    pub fn reset(&mut self) -> Status {
        *self = Self::new();
        log::info!("Tic-tac-toe reset");
        self.status
    }

    /// Play the current symbol at `index`.
    ///
    /// Taken cells, off-board indices and moves after the game has ended are
    /// ignored and return `None`. Otherwise the new status is returned.
    pub fn apply_move(&mut self, index: usize) -> Option<Status> {
        if self.is_game_over() {
            log::debug!("Ignoring move at {index}: game is over");
            return None;
        }
        if !self.board.place(index, self.current) {
            log::debug!("Ignoring move at {index}: cell unavailable");
            return None;
        }

        self.status = if let Some((winner, line)) = self.board.winning_line() {
            self.outcome = Outcome::Won(winner);
            self.winning_line = Some(line);
            log::info!("Player {winner} wins with line {line:?}");
            Status::Won(winner)
        } else if self.board.is_full() {
            self.outcome = Outcome::Draw;
            log::info!("Draw game");
            Status::Draw
        } else {
            self.current = self.current.other();
            Status::Turn(self.current)
        };

        Some(self.status)
    }

    /// Handle a click on `index` and return the status line to display.
    /// An ignored click leaves the previous status in place.
    pub fn click(&mut self, index: usize) -> Status {
        self.apply_move(index).unwrap_or(self.status)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Cell at `index` (`None` off the board)
    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.board.get(index)
    }

    /// Symbol whose turn it is (the last mover once the game has ended)
    pub fn current_player(&self) -> Symbol {
        self.current
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_game_over(&self) -> bool {
        self.outcome != Outcome::InProgress
    }

    pub fn winner(&self) -> Option<Symbol> {
        match self.outcome {
            Outcome::Won(symbol) => Some(symbol),
            _ => None,
        }
    }

    /// Line that ended the game, for highlighting
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        self.winning_line
    }

    /// Most recent status line
    pub fn status(&self) -> Status {
        self.status
    }

    /// Whether a click on `index` would be accepted
    pub fn is_cell_enabled(&self, index: usize) -> bool {
        !self.is_game_over() && self.board.get(index).is_some_and(|c| c.is_empty())
    }

    /// Accessible label for a cell ("Cell 1" .. "Cell 9")
    pub fn cell_label(index: usize) -> Option<String> {
        (index < BOARD_SIZE).then(|| format!("Cell {}", index + 1))
    }

    pub fn move_count(&self) -> usize {
        self.board.filled()
    }
}
