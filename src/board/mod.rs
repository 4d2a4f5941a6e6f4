//! Tic-tac-toe module
//!
//! Pure turn-based state machine. No rendering, no timers:
//! - A move either lands or is silently ignored
//! - Terminal states (win, draw) freeze the board until reset
//! - Every accepted move yields a status line for the host

pub mod controller;
pub mod state;

pub use controller::{Outcome, Status, TicTacToe};
pub use state::{BOARD_SIZE, Board, Cell, Symbol, WINNING_LINES};
