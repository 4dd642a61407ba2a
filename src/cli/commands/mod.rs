//! Command implementations for pomo.

mod completions;
mod run;

pub use completions::generate_completions;
pub use run::{drive, resolve_durations, run};

use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::config::{Config, Paths};
use crate::error::PomoError;
use crate::output::{format_config, to_json};

/// Execute config subcommands.
///
/// # Errors
///
/// Returns an error if the home directory is unknown or output formatting fails.
pub fn config(
    cmd: ConfigCommands,
    config: &Config,
    paths: &Paths,
    format: OutputFormat,
) -> Result<String, PomoError> {
    match cmd {
        ConfigCommands::Show => format_config(config, format),
        ConfigCommands::Path => match format {
            OutputFormat::Json => to_json(&serde_json::json!({
                "config_file": paths.config_file,
                "exists": paths.config_file.exists(),
            })),
            OutputFormat::Pretty => Ok(paths.config_file.display().to_string()),
        },
    }
}
