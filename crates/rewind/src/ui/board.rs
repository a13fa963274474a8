//! Tic-tac-toe board rendering.

use super::{HitMap, Target, center_rect};
use crate::app::App;
use crate::input::Focus;
use crate::view::{self, CellTone, Palette};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use rewind_tictactoe::{Player, Position, Square, WinResult};

const CELL_WIDTH: u16 = 12;
const CELL_HEIGHT: u16 = 3;

/// Renders the board panel, recording each cell as a click target.
pub fn draw(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    result: &WinResult,
    palette: &Palette,
    hits: &mut HitMap,
) {
    let block = Block::default()
        .title(format!(" Step {} ", app.game().step()))
        .borders(Borders::ALL)
        .border_style(focus_style(app.focus() == Focus::Board));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let board_area = center_rect(inner, CELL_WIDTH * 3 + 2, CELL_HEIGHT * 3 + 2);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board_area);

    for row in 0..3 {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
            ])
            .split(rows[row * 2]);

        for col in 0..3 {
            let Some(pos) = Position::from_row_col(row, col) else {
                continue;
            };
            let cell_area = cols[col * 2];
            draw_cell(frame, cell_area, app, result, palette, pos);
            hits.push(Target::Cell(pos), cell_area);
            if col < 2 {
                draw_separator_vertical(frame, cols[col * 2 + 1]);
            }
        }
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    result: &WinResult,
    palette: &Palette,
    pos: Position,
) {
    let tone = view::cell_tone(result, pos);
    let background = palette.color(tone);

    let (symbol, mut style) = match app.game().board().get(pos) {
        Square::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(player) => (
            player.to_string(),
            Style::default().fg(mark_color(player, tone)).add_modifier(Modifier::BOLD),
        ),
    };
    style = style.bg(background);
    if app.focus() == Focus::Board && pos == app.cursor() {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(symbol, style)),
        Line::from(""),
    ];
    let paragraph = Paragraph::new(lines)
        .style(Style::default().bg(background))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn mark_color(player: Player, tone: CellTone) -> Color {
    match (player, tone) {
        (_, CellTone::Winning | CellTone::Draw) => Color::Black,
        (Player::X, CellTone::Default) => Color::Blue,
        (Player::O, CellTone::Default) => Color::Red,
    }
}

pub(super) fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = (0..area.height).map(|_| Line::from("│")).collect();
    let sep = Paragraph::new(lines).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}
