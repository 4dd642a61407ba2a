//! Error types for pomo.

use thiserror::Error;

/// Errors that can occur while running the timer.
#[derive(Debug, Error)]
pub enum PomoError {
    /// Configuration could not be loaded, parsed, or validated.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The terminal could not be set up, drawn to, or read from.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// An alert could not be delivered.
    #[error("Alert failed: {0}")]
    Alert(String),

    /// A command-line value was out of range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PomoError {
    /// Wrap a terminal backend failure with context.
    pub fn terminal(context: &str, err: impl std::fmt::Display) -> Self {
        Self::Terminal(format!("{context}: {err}"))
    }
}
