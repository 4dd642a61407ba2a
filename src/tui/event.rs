//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::PomoError;

/// Action to take after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Start, pause or resume the timer.
    PlayPause,
    /// Stop the timer and reset durations.
    Stop,
    /// Lengthen the focus period.
    IncreaseFocus,
    /// Shorten the focus period.
    DecreaseFocus,
    /// Lengthen the break.
    IncreaseBreak,
    /// Shorten the break.
    DecreaseBreak,
    /// Show key bindings.
    Help,
}

/// Wait up to `timeout` for a terminal event.
///
/// Returns an action to take, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn next_action(timeout: Duration) -> Result<Option<Action>, PomoError> {
    if !event::poll(timeout).map_err(|e| PomoError::terminal("Event poll failed", e))? {
        return Ok(None);
    }

    match event::read().map_err(|e| PomoError::terminal("Event read failed", e))? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(action_for_key(key)),
        _ => Ok(None),
    }
}

/// Map a key press to an action.
#[must_use]
pub fn action_for_key(key: KeyEvent) -> Option<Action> {
    // Handle Ctrl+C
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(' ' | 'p') => Some(Action::PlayPause),
        KeyCode::Char('s') => Some(Action::Stop),

        // Durations - vim style
        KeyCode::Char('k') | KeyCode::Up => Some(Action::IncreaseFocus),
        KeyCode::Char('j') | KeyCode::Down => Some(Action::DecreaseFocus),
        KeyCode::Char('l') | KeyCode::Right => Some(Action::IncreaseBreak),
        KeyCode::Char('h') | KeyCode::Left => Some(Action::DecreaseBreak),

        KeyCode::Char('?') => Some(Action::Help),
        _ => None,
    }
}
