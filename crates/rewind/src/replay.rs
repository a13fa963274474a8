//! Headless replay: play a list of cells and print the result.

use crate::view;
use anyhow::Result;
use rewind_tictactoe::{GameState, MoveOutcome};
use tracing::{instrument, warn};

/// Plays `cells` in order, optionally jumps to `jump`, and renders the game.
///
/// Ignored moves and out-of-range jumps are logged and skipped, exactly as
/// they would be in the interactive client.
#[instrument]
pub fn run(cells: &[usize], jump: Option<usize>, json: bool) -> Result<String> {
    let mut game = GameState::new();
    for &cell in cells {
        if let MoveOutcome::Ignored(reason) = game.apply_move(cell) {
            warn!(cell, %reason, "Move ignored");
        }
    }
    if let Some(step) = jump {
        if !game.jump_to(step) {
            warn!(step, latest = game.latest_step(), "Jump ignored");
        }
    }

    if json {
        Ok(serde_json::to_string_pretty(&game)?)
    } else {
        Ok(render_text(&game))
    }
}

/// Board grid, status line and history list as plain text.
pub fn render_text(game: &GameState) -> String {
    let mut out = game.board().display();
    out.push_str("\n\n");
    out.push_str(&view::status_line(&game.evaluate(), game.to_move()));
    out.push_str("\n\n");

    for entry in view::history_entries(game) {
        let marker = if entry.current { "> " } else { "  " };
        out.push_str(marker);
        out.push_str(&entry.label);
        if let Some(mv) = entry.last_move {
            out.push_str(&format!(" ({})", mv));
        }
        out.push('\n');
    }
    out
}
