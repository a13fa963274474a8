//! Keyboard mapping.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rewind_tictactoe::Position;

/// Which panel receives arrow keys and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display)]
pub enum Focus {
    /// The 3x3 board.
    #[default]
    Board,
    /// The move history list.
    History,
}

impl Focus {
    /// The other panel.
    pub fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::History,
            Focus::History => Focus::Board,
        }
    }
}

/// Something the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the program.
    Quit,
    /// Switch between board and history.
    ToggleFocus,
    /// Move the board cursor.
    Cursor(KeyCode),
    /// Play the cell under the cursor.
    PlayCursor,
    /// Play a cell by index (0-8).
    Play(usize),
    /// Move the history selection up.
    SelectPrevious,
    /// Move the history selection down.
    SelectNext,
    /// Jump to the selected history entry.
    JumpSelected,
    /// Jump one step back.
    StepBack,
    /// Jump one step forward.
    StepForward,
    /// Jump to the empty board.
    JumpStart,
    /// Jump to the latest move.
    JumpLatest,
}

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Left => col.checked_sub(1).map(|col| (row, col)),
        KeyCode::Right => Some((row, col + 1)),
        KeyCode::Up => row.checked_sub(1).map(|row| (row, col)),
        KeyCode::Down => Some((row + 1, col)),
        _ => None,
    };
    target
        .and_then(|(row, col)| Position::from_row_col(row, col))
        .unwrap_or(cursor)
}

/// Maps a key press to an action for the focused panel.
pub fn action_for(key: KeyEvent, focus: Focus) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    let action = match (key.code, focus) {
        (KeyCode::Char('q') | KeyCode::Esc, _) => Action::Quit,
        (KeyCode::Tab | KeyCode::BackTab, _) => Action::ToggleFocus,
        (KeyCode::Char('['), _) => Action::StepBack,
        (KeyCode::Char(']'), _) => Action::StepForward,
        (KeyCode::Home, _) => Action::JumpStart,
        (KeyCode::End, _) => Action::JumpLatest,
        (KeyCode::Char(c @ '1'..='9'), _) => {
            Action::Play(c.to_digit(10)? as usize - 1)
        }

        (KeyCode::Up, Focus::History) => Action::SelectPrevious,
        (KeyCode::Down, Focus::History) => Action::SelectNext,
        (KeyCode::Enter | KeyCode::Char(' '), Focus::History) => Action::JumpSelected,

        (code @ (KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down), Focus::Board) => {
            Action::Cursor(code)
        }
        (KeyCode::Enter | KeyCode::Char(' '), Focus::Board) => Action::PlayCursor,

        _ => return None,
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_cursor_moves_within_board() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Down), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::BottomCenter, KeyCode::Right), Position::BottomRight);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::MiddleRight, KeyCode::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::Center, KeyCode::Char('x')), Position::Center);
    }

    #[test]
    fn test_digits_play_cells() {
        assert_eq!(action_for(press(KeyCode::Char('1')), Focus::Board), Some(Action::Play(0)));
        assert_eq!(action_for(press(KeyCode::Char('9')), Focus::History), Some(Action::Play(8)));
        assert_eq!(action_for(press(KeyCode::Char('0')), Focus::Board), None);
    }

    #[test]
    fn test_arrows_depend_on_focus() {
        assert_eq!(
            action_for(press(KeyCode::Up), Focus::Board),
            Some(Action::Cursor(KeyCode::Up))
        );
        assert_eq!(
            action_for(press(KeyCode::Up), Focus::History),
            Some(Action::SelectPrevious)
        );
        assert_eq!(
            action_for(press(KeyCode::Enter), Focus::Board),
            Some(Action::PlayCursor)
        );
        assert_eq!(
            action_for(press(KeyCode::Enter), Focus::History),
            Some(Action::JumpSelected)
        );
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(action_for(press(KeyCode::Char('q')), Focus::Board), Some(Action::Quit));
        assert_eq!(action_for(press(KeyCode::Esc), Focus::History), Some(Action::Quit));
        assert_eq!(
            action_for(
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                Focus::Board
            ),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        assert_eq!(action_for(key, Focus::Board), None);
    }
}
