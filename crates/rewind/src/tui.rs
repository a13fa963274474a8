//! Terminal setup and the event loop.

use crate::app::App;
use crate::ui;
use crate::view::Palette;
use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout, Write};
use std::sync::OnceLock;
use tracing::{error, info, instrument};

/// Runs the interactive game until the user quits.
///
/// The terminal is restored before returning, also when the loop fails
/// or a panic unwinds out of it.
#[instrument(skip_all)]
pub fn run(palette: Palette) -> Result<()> {
    info!("Starting rewind TUI");

    install_panic_hook();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, App::new(), &palette);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Draws, then blocks for exactly one event and applies it.
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App,
    palette: &Palette,
) -> Result<()> {
    loop {
        let mut hits = ui::HitMap::default();
        terminal.draw(|frame| hits = ui::draw(frame, &app, palette))?;
        app.set_hits(hits);

        app.handle_event(event::read()?);
        if app.should_quit() {
            info!(steps = app.game().history().len(), "Leaving game");
            return Ok(());
        }
    }
}

/// Restores the terminal before the default panic message is printed.
fn install_panic_hook() {
    static HOOK: OnceLock<()> = OnceLock::new();
    HOOK.get_or_init(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            restore_terminal();
            previous(info);
        }));
    });
}

fn restore_terminal() {
    let mut stdout = io::stdout();
    let _ = disable_raw_mode();
    let _ = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture, Show);
    let _ = stdout.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panic_hook_keeps_panics_propagating() {
        install_panic_hook();
        install_panic_hook();
        let result = std::panic::catch_unwind(|| panic!("invariant broken"));
        assert!(result.is_err());
    }
}
