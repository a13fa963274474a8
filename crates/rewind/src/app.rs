//! Application state and logic.

use crate::input::{self, Action, Focus};
use crate::ui::{HitMap, Target};
use crossterm::event::{Event, MouseButton, MouseEvent, MouseEventKind};
use rewind_tictactoe::{GameState, MoveOutcome, Position};
use tracing::{debug, info, instrument};

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: GameState,
    cursor: Position,
    focus: Focus,
    selected: usize,
    hits: HitMap,
    should_quit: bool,
}

impl App {
    /// Creates a new application at the empty board.
    pub fn new() -> Self {
        Self {
            game: GameState::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            hits: HitMap::default(),
            should_quit: false,
        }
    }

    /// The game session.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Board cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// History entry under the list selection.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Stores the click targets of the frame just drawn.
    pub fn set_hits(&mut self, hits: HitMap) {
        self.hits = hits;
    }

    /// Handles one terminal event.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => {
                if let Some(action) = input::action_for(key, self.focus) {
                    self.apply(action);
                }
            }
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    /// Handles a mouse event; only left clicks on cells or history entries
    /// do anything.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        match self.hits.hit(mouse.column, mouse.row) {
            Some(Target::Cell(pos)) => {
                self.cursor = pos;
                self.play(pos.to_index());
            }
            Some(Target::History(step)) => self.jump(step),
            None => {}
        }
    }

    /// Performs an action.
    #[instrument(skip(self), fields(focus = %self.focus, step = self.game.step()))]
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
            Action::ToggleFocus => {
                self.focus = self.focus.toggle();
                self.selected = self.game.step();
            }
            Action::Cursor(key) => self.cursor = input::move_cursor(self.cursor, key),
            Action::PlayCursor => self.play(self.cursor.to_index()),
            Action::Play(cell) => {
                if let Some(pos) = Position::from_index(cell) {
                    self.cursor = pos;
                }
                self.play(cell);
            }
            Action::SelectPrevious => self.selected = self.selected.saturating_sub(1),
            Action::SelectNext => {
                self.selected = (self.selected + 1).min(self.game.latest_step());
            }
            Action::JumpSelected => self.jump(self.selected),
            Action::StepBack => {
                self.game.step_back();
                self.selected = self.game.step();
            }
            Action::StepForward => {
                self.game.step_forward();
                self.selected = self.game.step();
            }
            Action::JumpStart => self.jump(0),
            Action::JumpLatest => self.jump(self.game.latest_step()),
        }
    }

    fn play(&mut self, cell: usize) {
        match self.game.apply_move(cell) {
            MoveOutcome::Applied(mv) => debug!(%mv, "Played"),
            MoveOutcome::Ignored(reason) => debug!(%reason, "Click ignored"),
        }
        self.selected = self.game.step();
    }

    fn jump(&mut self, step: usize) {
        if !self.game.jump_to(step) {
            debug!(step, "Jump ignored");
        }
        self.selected = self.game.step();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
