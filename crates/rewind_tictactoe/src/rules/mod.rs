//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board according to
//! tic-tac-toe rules. Rules are separated from board storage and from the
//! session history, so any snapshot can be evaluated on its own.

pub mod draw;
pub mod win;

use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

pub use draw::is_full;
pub use win::{LINES, check_winner, winning_line};

/// A winning triple: three positions forming a row, column or diagonal.
pub type Line = [Position; 3];

/// Evaluation of a single board.
///
/// A board is either still being played, won along a line, or drawn. The
/// variants make "winner and draw at once" unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinResult {
    /// No line is complete and at least one square is empty.
    InProgress,
    /// A line holds three identical marks.
    Won {
        /// The mark that completed the line.
        winner: Player,
        /// The first complete line in [`LINES`] order.
        line: Line,
    },
    /// Every square is occupied and no line is complete.
    Draw,
}

impl WinResult {
    /// Returns the winner, if the board is won.
    pub fn winner(&self) -> Option<Player> {
        match self {
            WinResult::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }

    /// Returns the winning line, if the board is won.
    pub fn winning_line(&self) -> Option<Line> {
        match self {
            WinResult::Won { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Returns true if the board is full without a winner.
    pub fn is_draw(&self) -> bool {
        matches!(self, WinResult::Draw)
    }

    /// Returns true if the position is part of the winning line.
    pub fn highlights(&self, pos: Position) -> bool {
        self.winning_line().is_some_and(|line| line.contains(&pos))
    }
}

/// Evaluates a board: winner and line, draw, or still in progress.
///
/// Lines are checked in [`LINES`] order and the first complete one wins.
#[instrument(skip(board), fields(occupied = board.occupied()))]
pub fn evaluate(board: &Board) -> WinResult {
    if let Some((winner, line)) = winning_line(board) {
        return WinResult::Won { winner, line };
    }
    if is_full(board) {
        WinResult::Draw
    } else {
        WinResult::InProgress
    }
}
