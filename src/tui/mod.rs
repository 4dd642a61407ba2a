//! Terminal User Interface (TUI) for pomo.
//!
//! Renders the timer widget and its controls. Built with ratatui and crossterm.

mod app;
mod event;
mod ui;

pub use app::App;
pub use event::{action_for_key, Action};

use std::io;
use std::time::Instant;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing::info;

use crate::error::PomoError;

/// Run the TUI application.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run(mut app: App) -> Result<(), PomoError> {
    // Setup terminal
    enable_raw_mode().map_err(|e| PomoError::terminal("Failed to enable raw mode", e))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| PomoError::terminal("Failed to setup terminal", e))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal =
        Terminal::new(backend).map_err(|e| PomoError::terminal("Failed to create terminal", e))?;

    info!("interactive timer opened");
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    info!("interactive timer closed");
    result
}

/// Run the main application loop.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), PomoError> {
    while !app.should_quit {
        // Draw UI
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| PomoError::terminal("Failed to draw", e))?;

        // Wait for input, but never past the next tick
        let timeout = app.poll_timeout(Instant::now());
        if let Some(action) = event::next_action(timeout)? {
            app.handle(action, Instant::now());
        }

        app.on_tick(Instant::now());
    }

    Ok(())
}
