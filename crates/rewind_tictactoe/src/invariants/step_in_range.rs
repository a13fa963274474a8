//! Cursor invariant: the displayed step exists.

use super::super::GameState;
use super::Invariant;

/// Invariant: `step` indexes an existing snapshot.
pub struct StepInRangeInvariant;

impl Invariant<GameState> for StepInRangeInvariant {
    fn holds(game: &GameState) -> bool {
        game.step() < game.history().len()
    }

    fn description() -> &'static str {
        "Displayed step is within the history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jumps_hold() {
        let mut game = GameState::replay([0, 1, 2]);
        for step in (0..=3).rev() {
            assert!(game.jump_to(step));
            assert!(StepInRangeInvariant::holds(&game));
        }
    }

    #[test]
    fn test_cursor_past_end_violates() {
        let mut game = GameState::replay([0]);
        game.set_step_unchecked(2);
        assert!(!StepInRangeInvariant::holds(&game));
    }
}
