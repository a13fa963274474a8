//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: The move recorded at step `i` was made by X when `i` is odd
/// and by O when `i` is even.
///
/// First move is always X.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        game.history()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(step, snapshot)| {
                snapshot
                    .last_move()
                    .is_some_and(|mv| mv.player == Player::for_step(step - 1))
            })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let game = GameState::replay([0, 4, 2, 6, 8]);
        assert!(AlternatingTurnInvariant::holds(&game));
        assert_eq!(game.to_move(), Player::O);
    }

    #[test]
    fn test_branch_from_odd_step_holds() {
        let mut game = GameState::replay([0, 4, 2, 6]);
        assert!(game.jump_to(1));
        assert_eq!(game.to_move(), Player::O);
        assert!(game.apply_move(8).is_applied());
        assert!(AlternatingTurnInvariant::holds(&game));
    }
}
