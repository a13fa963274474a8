//! Stateless UI rendering for the game screen.

mod board;
mod history;

use crate::app::App;
use crate::input::Focus;
use crate::view::{self, Palette};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use rewind_tictactoe::Position;

/// Something on screen that responds to a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// A board cell.
    Cell(Position),
    /// A history entry, by step.
    History(usize),
}

/// Screen areas of clickable things from the last draw.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitMap {
    targets: Vec<(Target, Rect)>,
}

impl HitMap {
    /// Records a clickable area.
    pub fn push(&mut self, target: Target, area: Rect) {
        self.targets.push((target, area));
    }

    /// Finds what lies under a terminal cell.
    pub fn hit(&self, column: u16, row: u16) -> Option<Target> {
        self.targets
            .iter()
            .find(|(_, area)| contains(*area, column, row))
            .map(|(target, _)| *target)
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

/// Draws the whole screen and returns where the clickable parts landed.
pub fn draw(frame: &mut Frame, app: &App, palette: &Palette) -> HitMap {
    let mut hits = HitMap::default();
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(12),   // Board and history
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Rewind - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(42), Constraint::Length(34)])
        .split(chunks[1]);

    let game = app.game();
    let result = game.evaluate();
    board::draw(frame, body[0], app, &result, palette, &mut hits);
    history::draw(frame, body[1], app, &mut hits);

    let status = Paragraph::new(view::status_line(&result, game.to_move()))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = match app.focus() {
        Focus::Board => "arrows move · enter/1-9 play · [ ] step · tab history · q quit",
        Focus::History => "up/down select · enter jump · [ ] step · tab board · q quit",
    };
    let help = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);

    hits
}

/// Centers a `width` x `height` rectangle inside `area`.
pub(crate) fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
