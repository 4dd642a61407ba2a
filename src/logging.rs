//! Tracing setup.
//!
//! The interactive timer owns the terminal, so it logs to a file; every
//! other command logs to stderr.

use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::PomoError;

/// Where log events are written.
#[derive(Debug, Clone, Copy)]
pub enum LogTarget<'a> {
    /// Append to a file.
    File(&'a Path),
    /// Write to stderr.
    Stderr,
}

fn filter(verbose: bool) -> EnvFilter {
    let default = if verbose { "pomo=debug" } else { "pomo=warn" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Install the global subscriber.
///
/// # Errors
///
/// Returns `PomoError::Io` if the log file cannot be opened.
pub fn init(target: LogTarget<'_>, verbose: bool) -> Result<(), PomoError> {
    let registry = tracing_subscriber::registry().with(filter(verbose));

    match target {
        LogTarget::File(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(false)
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .try_init()
                .ok();
        }
        LogTarget::Stderr => {
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(false)
                        .compact()
                        .with_writer(std::io::stderr),
                )
                .try_init()
                .ok();
        }
    }
    Ok(())
}
