//! Tic-tac-toe with a branchable move history.
//!
//! The crate is split in two halves:
//!
//! - **Rules**: [`evaluate`] is a pure function from a [`Board`] to a
//!   [`WinResult`]. It knows nothing about turns or history.
//! - **Session**: [`GameState`] owns the [`History`] of board snapshots and a
//!   cursor into it. Moves are appended after truncating any future beyond
//!   the cursor, so jumping back and playing a different move overwrites the
//!   old branch.
//!
//! Invalid interactions (playing an occupied cell, playing after a win) are
//! silent no-ops, never errors.
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameState, Player, Position};
//!
//! let mut game = GameState::new();
//! for cell in [0, 4, 1, 5, 2] {
//!     game.apply_move(cell);
//! }
//!
//! let result = game.evaluate();
//! assert_eq!(result.winner(), Some(Player::X));
//! assert_eq!(
//!     result.winning_line(),
//!     Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
//! );
//!
//! // Review the game from move #2 and branch off.
//! assert!(game.jump_to(2));
//! assert_eq!(game.to_move(), Player::X);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod session;
mod types;

pub use action::{IgnoreReason, Move, MoveOutcome};
pub use history::{History, Snapshot};
pub use position::Position;
pub use rules::{WinResult, evaluate};
pub use session::{GameState, SessionError};
pub use types::{Board, Player, Square};
