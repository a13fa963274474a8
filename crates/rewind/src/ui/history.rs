//! Move history panel.

use super::board::focus_style;
use super::{HitMap, Target};
use crate::app::App;
use crate::input::Focus;
use crate::view;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Renders one line per snapshot and records each visible line as a click
/// target.
pub fn draw(frame: &mut Frame, area: Rect, app: &App, hits: &mut HitMap) {
    let focused = app.focus() == Focus::History;
    let block = Block::default()
        .title(" History ")
        .borders(Borders::ALL)
        .border_style(focus_style(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let entries = view::history_entries(app.game());
    let mut lines = Vec::with_capacity(entries.len());
    for (row, entry) in entries.iter().enumerate() {
        let marker = if entry.current { "▶ " } else { "  " };
        let mut label_style = if entry.current {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        if focused && entry.step == app.selected() {
            label_style = label_style.add_modifier(Modifier::REVERSED);
        }

        let mut spans = vec![
            Span::styled(marker, Style::default().fg(Color::Yellow)),
            Span::styled(entry.label.clone(), label_style),
        ];
        if let Some(mv) = entry.last_move {
            spans.push(Span::styled(
                format!("  {} {}", mv.player, mv.position.to_index() + 1),
                Style::default().fg(Color::DarkGray),
            ));
        }
        lines.push(Line::from(spans));

        if let Ok(offset) = u16::try_from(row) {
            if offset < inner.height {
                hits.push(
                    Target::History(entry.step),
                    Rect::new(inner.x, inner.y + offset, inner.width, 1),
                );
            }
        }
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
