//! Single mark invariant: each snapshot adds exactly one mark.

use super::super::{GameState, Position, Square};
use super::Invariant;

/// Invariant: Consecutive snapshots differ in exactly one square.
///
/// That square goes from empty to the mark of the recorded move, at the
/// recorded position. Nothing is ever erased or overwritten.
pub struct SingleMarkDeltaInvariant;

impl Invariant<GameState> for SingleMarkDeltaInvariant {
    fn holds(game: &GameState) -> bool {
        game.history().snapshots().windows(2).all(|pair| {
            let (before, after) = (pair[0].board(), pair[1].board());
            let Some(mv) = pair[1].last_move() else {
                return false;
            };
            let changed: Vec<Position> = Position::ALL
                .into_iter()
                .filter(|pos| before.get(*pos) != after.get(*pos))
                .collect();

            changed == [mv.position]
                && before.get(mv.position) == Square::Empty
                && after.get(mv.position) == Square::Occupied(mv.player)
        })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to an empty square"
    }
}
