//! JSON output formatting for pomo.

use serde::Serialize;

use crate::error::PomoError;
use crate::pomodoro::Pomodoro;

/// Serialize any value as pretty JSON
///
/// # Errors
///
/// Returns `PomoError::Json` if serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, PomoError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Format the timer state as a single JSON line
///
/// One object per line keeps the stream readable by line-oriented tools.
///
/// # Errors
///
/// Returns `PomoError::Json` if serialization fails.
pub fn format_snapshot_json(pomodoro: &Pomodoro) -> Result<String, PomoError> {
    Ok(serde_json::to_string(&pomodoro.snapshot())?)
}
