//! Starting snapshot invariant: history opens on the empty board.

use super::super::GameState;
use super::Invariant;

/// Invariant: Snapshot 0 is the empty board and was produced by no move.
pub struct StartsEmptyInvariant;

impl Invariant<GameState> for StartsEmptyInvariant {
    fn holds(game: &GameState) -> bool {
        game.history()
            .get(0)
            .is_some_and(|start| start.board().occupied() == 0 && start.last_move().is_none())
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}
