//! What the screen shows, independent of how it is drawn.
//!
//! Everything here is a pure function of the [`GameState`], so the
//! renderer and the headless replay agree on wording and highlighting.

use ratatui::style::Color;
use rewind_tictactoe::{GameState, Move, Player, Position, WinResult};

/// Status line for an evaluated board.
pub fn status_line(result: &WinResult, to_move: Player) -> String {
    match result {
        WinResult::Won { winner, .. } => format!("Winner: {}", winner),
        WinResult::Draw => "Its a draw!".to_string(),
        WinResult::InProgress => format!("Next player: {}", to_move),
    }
}

/// Label of a history entry.
pub fn history_label(step: usize) -> String {
    if step == 0 {
        "Go to game start".to_string()
    } else {
        format!("Go to move #{}", step)
    }
}

/// Highlight state of one cell.
///
/// A board is either won, drawn or neither, so the winning and draw tones
/// never appear together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellTone {
    /// No highlight.
    Default,
    /// Part of the winning line.
    Winning,
    /// Board ended in a draw.
    Draw,
}

/// Tone for the cell at `pos` given the board's evaluation.
pub fn cell_tone(result: &WinResult, pos: Position) -> CellTone {
    if result.highlights(pos) {
        CellTone::Winning
    } else if result.is_draw() {
        CellTone::Draw
    } else {
        CellTone::Default
    }
}

/// Background colours for each [`CellTone`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Winning line.
    pub win: Color,
    /// Every cell on a draw.
    pub draw: Color,
    /// Everything else.
    pub default: Color,
}

impl Palette {
    /// Colour for a tone.
    pub fn color(&self, tone: CellTone) -> Color {
        match tone {
            CellTone::Default => self.default,
            CellTone::Winning => self.win,
            CellTone::Draw => self.draw,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            win: Color::Rgb(0x06, 0xf9, 0x80),
            draw: Color::Rgb(0xf1, 0xa9, 0x07),
            default: Color::Rgb(0xff, 0xff, 0xff),
        }
    }
}

/// One row of the history list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Step this entry jumps to.
    pub step: usize,
    /// "Go to game start" or "Go to move #n".
    pub label: String,
    /// The move that produced the snapshot.
    pub last_move: Option<Move>,
    /// Whether this is the displayed step.
    pub current: bool,
}

/// All history entries, oldest first.
pub fn history_entries(game: &GameState) -> Vec<HistoryEntry> {
    game.history()
        .iter()
        .enumerate()
        .map(|(step, snapshot)| HistoryEntry {
            step,
            label: history_label(step),
            last_move: snapshot.last_move(),
            current: step == game.step(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(cells: &[usize]) -> GameState {
        GameState::replay(cells.iter().copied())
    }

    #[test]
    fn test_status_line_wording() {
        let game = play(&[0, 4]);
        assert_eq!(status_line(&game.evaluate(), game.to_move()), "Next player: X");

        let game = play(&[0, 4, 1, 5, 2]);
        assert_eq!(status_line(&game.evaluate(), game.to_move()), "Winner: X");

        let game = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(status_line(&game.evaluate(), game.to_move()), "Its a draw!");
    }

    #[test]
    fn test_status_line_after_jump() {
        let mut game = play(&[0, 4, 1, 5, 2]);
        assert!(game.jump_to(3));
        assert_eq!(status_line(&game.evaluate(), game.to_move()), "Next player: O");
    }

    #[test]
    fn test_history_labels() {
        assert_eq!(history_label(0), "Go to game start");
        assert_eq!(history_label(3), "Go to move #3");
    }

    #[test]
    fn test_history_entries_mark_current() {
        let mut game = play(&[0, 4, 8]);
        assert!(game.jump_to(1));

        let entries = history_entries(&game);
        assert_eq!(entries.len(), 4);
        assert_eq!(
            entries.iter().filter(|e| e.current).map(|e| e.step).collect::<Vec<_>>(),
            vec![1]
        );
        assert_eq!(entries[0].last_move, None);
        assert_eq!(
            entries[2].last_move,
            Some(Move::new(Player::O, Position::Center))
        );
    }

    #[test]
    fn test_tones_for_win() {
        let game = play(&[0, 4, 1, 5, 2]);
        let result = game.evaluate();
        for pos in Position::ALL {
            let expected = if pos.to_index() < 3 {
                CellTone::Winning
            } else {
                CellTone::Default
            };
            assert_eq!(cell_tone(&result, pos), expected, "{}", pos);
        }
    }

    #[test]
    fn test_tones_for_draw_and_in_progress() {
        let draw = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]).evaluate();
        assert!(Position::ALL.iter().all(|p| cell_tone(&draw, *p) == CellTone::Draw));

        let open = play(&[0, 1]).evaluate();
        assert!(Position::ALL.iter().all(|p| cell_tone(&open, *p) == CellTone::Default));
    }

    #[test]
    fn test_palette_maps_tones() {
        let palette = Palette::default();
        assert_eq!(palette.color(CellTone::Winning), Color::Rgb(0x06, 0xf9, 0x80));
        assert_eq!(palette.color(CellTone::Draw), Color::Rgb(0xf1, 0xa9, 0x07));
        assert_eq!(palette.color(CellTone::Default), Color::Rgb(0xff, 0xff, 0xff));
    }
}
