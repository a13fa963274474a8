//! Headless replay through the public API.

use rewind::replay;
use rewind_tictactoe::{GameState, Player, WinResult};

#[test]
fn test_replay_draw_text() {
    let out = replay::run(&[0, 1, 2, 4, 3, 5, 7, 6, 8], None, false).unwrap();
    assert!(out.contains("Its a draw!"));
    assert!(out.contains("> Go to move #9"));
    assert_eq!(out.lines().filter(|l| l.contains("Go to")).count(), 10);
}

#[test]
fn test_replay_json_round_trips() {
    let out = replay::run(&[0, 4, 1, 5, 2], Some(3), true).unwrap();
    let game: GameState = serde_json::from_str(&out).unwrap();

    assert_eq!(game.step(), 3);
    assert_eq!(game.history().len(), 6);
    assert_eq!(game.to_move(), Player::O);
    assert_eq!(game.evaluate(), WinResult::InProgress);
}

#[test]
fn test_replay_moves_after_win_are_ignored() {
    let out = replay::run(&[0, 4, 1, 5, 2, 8], None, false).unwrap();
    assert!(out.contains("Winner: X"));
    assert!(!out.contains("Go to move #6"));
}

#[test]
fn test_render_text_at_start() {
    let out = replay::render_text(&GameState::new());
    assert!(out.starts_with("1|2|3"));
    assert!(out.contains("Next player: X"));
    assert!(out.contains("> Go to game start"));
}
