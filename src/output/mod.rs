//! Output formatting for pomo.
//!
//! This module provides formatters for displaying timer state and
//! configuration in various formats.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::config::Config;
use crate::error::PomoError;
use crate::pomodoro::{Pomodoro, SessionLabel};

pub use json::*;
pub use pretty::*;

/// Format the effective configuration based on output format
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn format_config(config: &Config, format: OutputFormat) -> Result<String, PomoError> {
    match format {
        OutputFormat::Pretty => format_config_pretty(config),
        OutputFormat::Json => to_json(config),
    }
}

/// Format a session transition based on output format
///
/// # Errors
///
/// Returns `PomoError::Json` if JSON serialization fails.
pub fn format_transition(
    next: SessionLabel,
    pomodoro: &Pomodoro,
    format: OutputFormat,
) -> Result<String, PomoError> {
    match format {
        OutputFormat::Pretty => Ok(format_transition_pretty(next, pomodoro)),
        OutputFormat::Json => format_snapshot_json(pomodoro),
    }
}
