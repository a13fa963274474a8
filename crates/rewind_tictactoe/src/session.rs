//! The game session: history plus a cursor into it.

use super::history::{History, Snapshot};
use super::invariants::{InvariantSet, InvariantViolation, SessionInvariants};
use super::rules::{self, WinResult};
use super::{Board, IgnoreReason, Move, MoveOutcome, Player, Position};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// A stored session that cannot be loaded.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum SessionError {
    /// The history has no snapshots, not even the empty board.
    #[display("history has no snapshots")]
    EmptyHistory,
    /// One or more session invariants fail.
    #[display("invalid session: {}", violations)]
    Invalid {
        /// Descriptions of the failing invariants, `; `-separated.
        violations: String,
    },
}

impl SessionError {
    fn invalid(violations: &[InvariantViolation]) -> Self {
        Self::Invalid {
            violations: describe(violations),
        }
    }
}

fn describe(violations: &[InvariantViolation]) -> String {
    violations
        .iter()
        .map(|v| v.description.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// A tic-tac-toe session with time travel.
///
/// `step` selects which snapshot is displayed. The player to move is
/// derived from its parity rather than stored, so jumping around the
/// history can never put the turn out of sync with the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    history: History,
    step: usize,
}

/// Wire form of [`GameState`], checked against [`SessionInvariants`].
#[derive(Deserialize)]
struct RawGameState {
    history: History,
    step: usize,
}

impl TryFrom<RawGameState> for GameState {
    type Error = SessionError;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let game = Self {
            history: raw.history,
            step: raw.step,
        };
        SessionInvariants::check_all(&game).map_err(|v| SessionError::invalid(&v))?;
        Ok(game)
    }
}

impl GameState {
    /// Creates a new game at the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: History::new(),
            step: 0,
        }
    }

    /// Plays each cell index in order, ignoring the ones that would be
    /// ignored interactively.
    #[instrument(skip(cells))]
    pub fn replay(cells: impl IntoIterator<Item = usize>) -> Self {
        let mut game = Self::new();
        for cell in cells {
            let _ = game.apply_move(cell);
        }
        game
    }

    /// The full history, including snapshots after the current step.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Index of the displayed snapshot.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Index of the most recent snapshot.
    pub fn latest_step(&self) -> usize {
        self.history.len() - 1
    }

    /// The displayed snapshot.
    pub fn current(&self) -> &Snapshot {
        self.history.get(self.step).unwrap_or_else(|| self.history.latest())
    }

    /// The displayed board.
    pub fn board(&self) -> &Board {
        self.current().board()
    }

    /// The player whose mark the next accepted move places.
    pub fn to_move(&self) -> Player {
        Player::for_step(self.step)
    }

    /// Evaluates the displayed board.
    pub fn evaluate(&self) -> WinResult {
        rules::evaluate(self.board())
    }

    /// Places the current player's mark at `cell` (0-8).
    ///
    /// The move is ignored, leaving the game unchanged, when the displayed
    /// board already has a winner, when the cell is occupied, or when the
    /// index is off the board. Otherwise every snapshot after the current
    /// step is discarded and the new board becomes the latest step.
    #[instrument(skip(self), fields(step = self.step, len = self.history.len()))]
    pub fn apply_move(&mut self, cell: usize) -> MoveOutcome {
        let Some(position) = Position::from_index(cell) else {
            debug!("Ignoring move off the board");
            return MoveOutcome::Ignored(IgnoreReason::OutOfRange(cell));
        };

        let current = self.current();
        if rules::check_winner(current.board()).is_some() {
            debug!(%position, "Ignoring move after win");
            return MoveOutcome::Ignored(IgnoreReason::GameOver);
        }
        if !current.board().is_empty(position) {
            debug!(%position, "Ignoring move on occupied square");
            return MoveOutcome::Ignored(IgnoreReason::Occupied(position));
        }

        let mv = Move::new(self.to_move(), position);
        let next = current.after(mv);
        self.step = self.history.branch(self.step, next);
        info!(%mv, step = self.step, "Move applied");

        self.debug_check_invariants();
        MoveOutcome::Applied(mv)
    }

    /// Displays the snapshot at `step`.
    ///
    /// Any step in the history is allowed, including finished positions.
    /// Returns false and changes nothing when `step` is out of range.
    #[instrument(skip(self), fields(from = self.step, len = self.history.len()))]
    pub fn jump_to(&mut self, step: usize) -> bool {
        if step >= self.history.len() {
            debug!("Ignoring jump past the end of history");
            return false;
        }
        self.step = step;
        debug!(to_move = %self.to_move(), "Jumped");
        self.debug_check_invariants();
        true
    }

    /// Moves one step back in history, if possible.
    pub fn step_back(&mut self) -> bool {
        match self.step.checked_sub(1) {
            Some(step) => self.jump_to(step),
            None => false,
        }
    }

    /// Moves one step forward in history, if possible.
    pub fn step_forward(&mut self) -> bool {
        self.jump_to(self.step + 1)
    }

    fn debug_check_invariants(&self) {
        if cfg!(debug_assertions) {
            if let Err(violations) = SessionInvariants::check_all(self) {
                panic!("Session invariant violated: {}", describe(&violations));
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    #[cfg(test)]
    pub(crate) fn set_step_unchecked(&mut self, step: usize) {
        self.step = step;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let game = GameState::new();
        assert_eq!(game.step(), 0);
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.to_move(), Player::X);
        assert_eq!(game.evaluate(), WinResult::InProgress);
    }

    #[test]
    fn test_apply_move_reports_move() {
        let mut game = GameState::new();
        assert_eq!(
            game.apply_move(4),
            MoveOutcome::Applied(Move::new(Player::X, Position::Center))
        );
        assert_eq!(game.step(), 1);
        assert_eq!(game.to_move(), Player::O);
    }

    #[test]
    fn test_out_of_range_cell_is_ignored() {
        let mut game = GameState::new();
        assert_eq!(
            game.apply_move(9),
            MoveOutcome::Ignored(IgnoreReason::OutOfRange(9))
        );
        assert_eq!(game, GameState::new());
    }

    #[test]
    fn test_out_of_range_jump_is_ignored() {
        let mut game = GameState::replay([0, 4]);
        assert!(!game.jump_to(3));
        assert_eq!(game.step(), 2);
    }

    #[test]
    fn test_step_back_and_forward() {
        let mut game = GameState::replay([0, 4, 8]);
        assert!(!game.step_forward());
        assert!(game.step_back());
        assert_eq!(game.step(), 2);
        assert!(game.step_forward());
        assert_eq!(game.step(), 3);

        assert!(game.jump_to(0));
        assert!(!game.step_back());
    }

    #[test]
    fn test_current_follows_step() {
        let mut game = GameState::replay([0, 4]);
        assert!(game.jump_to(1));
        assert_eq!(
            game.current().last_move(),
            Some(Move::new(Player::X, Position::TopLeft))
        );
        assert!(game.board().is_empty(Position::Center));
    }

    #[test]
    fn test_serde_round_trip_keeps_cursor() {
        let mut game = GameState::replay([0, 4, 1]);
        assert!(game.jump_to(1));

        let json = serde_json::to_string(&game).unwrap();
        let restored: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, game);
        assert_eq!(restored.to_move(), Player::O);
    }

    #[test]
    fn test_deserialize_rejects_empty_history() {
        let json = r#"{"history":{"snapshots":[]},"step":0}"#;
        assert!(serde_json::from_str::<GameState>(json).is_err());
    }

    #[test]
    fn test_deserialize_rejects_step_past_end() {
        let json = serde_json::to_string(&GameState::replay([0, 4])).unwrap();
        let edited = json.replace(r#""step":2"#, r#""step":7"#);
        assert_ne!(edited, json);

        let err = serde_json::from_str::<GameState>(&edited)
            .unwrap_err()
            .to_string();
        assert!(
            err.contains("Displayed step is within the history"),
            "unexpected error: {}",
            err
        );
    }

    #[test]
    fn test_deserialize_rejects_tampered_board() {
        let mut game = GameState::replay([0, 4]);
        let last = game.history().latest().clone();
        game.history_mut().snapshots_mut()[0] = last;
        let json = serde_json::to_string(&game).unwrap();

        assert!(serde_json::from_str::<GameState>(&json).is_err());
    }
}
