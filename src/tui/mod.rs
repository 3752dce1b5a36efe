//! Terminal UI: the interactive renderer for the game.
//!
//! Input is read and handled one event at a time on the calling thread; each
//! event runs to completion before the next frame is drawn.

pub mod app;
pub mod input;
pub mod ui;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;
use tracing::{debug, error, info, instrument};

use crate::AppConfig;
use app::App;

/// Restores the terminal when dropped, whichever way setup or the loop exits.
struct TerminalGuard {
    alternate_screen: bool,
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut guard = Self {
            alternate_screen: false,
        };
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        guard.alternate_screen = true;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.alternate_screen {
            if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture) {
                error!(error = %e, "Failed to leave alternate screen");
            }
        }
        if let Err(e) = disable_raw_mode() {
            error!(error = %e, "Failed to disable raw mode");
        }
    }
}

/// Runs the interactive game until the user quits.
///
/// The caller is expected to have routed logging away from stdout.
#[instrument(skip(config))]
pub fn run_tui(config: &AppConfig) -> Result<()> {
    info!("Starting terminal UI");

    let guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(*config.sort_order(), *config.show_coordinates());
    let res = run_loop(&mut terminal, &mut app);

    drop(guard);
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(
        moves = app.controller().state().history().len() - 1,
        "Terminal UI closed"
    );
    res
}

fn run_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    while !app.should_quit() {
        terminal.draw(|f| ui::draw(f, app))?;

        match event::read()? {
            // Skip key release events (crossterm fires both press and release on some platforms).
            Event::Key(key) if key.kind != KeyEventKind::Release => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            Event::Resize(width, height) => debug!(width, height, "Terminal resized"),
            _ => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::terminal::is_raw_mode_enabled;

    #[test]
    fn test_terminal_guard_leaves_raw_mode_off() {
        // Without a tty `enter` fails part way; either way raw mode must end up off.
        if let Ok(guard) = TerminalGuard::enter() {
            drop(guard);
        }
        assert!(!is_raw_mode_enabled().unwrap_or(false));
    }
}
