//! Terminal UI for the game.

mod app;
mod input;
mod ui;

pub use app::{App, Control, Focus};
pub use input::{digit_position, move_cursor};
pub use ui::{ScreenLayout, draw};

use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout};
use std::time::Duration;
use timetoe_engine::SortOrder;
use tracing::{error, info, instrument};

/// Runs the interactive game until the player quits.
///
/// Once raw mode is on, the terminal is restored on every exit path.
#[instrument]
pub fn run_tui(order: SortOrder) -> Result<()> {
    info!("Starting timetoe TUI");

    enable_raw_mode()?;
    restore_after(|| run_session(order), restore_terminal)
}

/// Runs `session`, then `restore` whether or not `session` failed.
///
/// A session error takes precedence over a restore error.
fn restore_after(
    session: impl FnOnce() -> Result<()>,
    restore: impl FnOnce() -> Result<()>,
) -> Result<()> {
    let res = session();
    let restored = restore();
    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    if let Err(err) = &restored {
        error!(error = ?err, "Failed to restore terminal");
    }
    res.and(restored)
}

fn run_session(order: SortOrder) -> Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let mut app = App::new(order);
    let res = run_event_loop(&mut terminal, &mut app);
    info!(moves = app.history().len() - 1, "TUI closed");
    res
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture, Show)?;
    Ok(())
}

/// Draws, waits for one event, and applies it, until [`Control::Quit`].
fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut layout = ScreenLayout::new(Rect::default());
    loop {
        terminal.draw(|f| {
            layout = ScreenLayout::new(f.area());
            draw(f, app);
        })?;

        // Poll with a short timeout so resizes redraw promptly.
        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        match event::read()? {
            // Skip key release events (crossterm fires both press and release).
            Event::Key(key) if key.kind == KeyEventKind::Release => {}
            Event::Key(key) => {
                if app.handle_key(key) == Control::Quit {
                    info!("User quit");
                    return Ok(());
                }
            }
            Event::Mouse(mouse) => app.handle_mouse(mouse, &layout),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_restore_runs_after_failed_session() {
        let restored = Cell::new(false);
        let res = restore_after(
            || anyhow::bail!("alternate screen unavailable"),
            || {
                restored.set(true);
                Ok(())
            },
        );
        assert!(restored.get());
        assert_eq!(res.unwrap_err().to_string(), "alternate screen unavailable");
    }

    #[test]
    fn test_restore_error_surfaces_after_clean_session() {
        let res = restore_after(|| Ok(()), || anyhow::bail!("raw mode stuck"));
        assert_eq!(res.unwrap_err().to_string(), "raw mode stuck");
    }
}
