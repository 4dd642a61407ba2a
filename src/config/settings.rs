//! Configuration settings for pomo.
//!
//! Settings are loaded from `~/.pomo/config.yaml`. The timer only reads this
//! file; adjusted durations are never written back.

use serde::{Deserialize, Serialize};

use crate::error::PomoError;
use crate::pomodoro::durations::{Durations, DEFAULT_BREAK_MINUTES, DEFAULT_FOCUS_MINUTES};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Timer defaults.
    pub timer: TimerConfig,
    /// Transition alerts.
    pub alert: AlertConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GeneralConfig {
    /// Color output setting.
    pub color: ColorSetting,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorSetting {
    /// Apply the setting to `colored`'s global override.
    pub fn apply(self) {
        match self {
            Self::Auto => colored::control::unset_override(),
            Self::Always => colored::control::set_override(true),
            Self::Never => colored::control::set_override(false),
        }
    }
}

/// Durations the timer starts with and resets to on stop.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    /// Focus length in minutes.
    #[serde(default = "default_focus_minutes")]
    pub focus_minutes: u32,
    /// Break length in minutes.
    #[serde(default = "default_break_minutes")]
    pub break_minutes: u32,
}

/// Which alerts fire at a session transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertConfig {
    /// Ring the terminal bell.
    #[serde(default = "default_true")]
    pub bell: bool,
    /// Show a desktop notification (requires the `desktop-notify` feature).
    #[serde(default)]
    pub notification: bool,
}

// Default value functions for serde
const fn default_focus_minutes() -> u32 {
    DEFAULT_FOCUS_MINUTES
}

const fn default_break_minutes() -> u32 {
    DEFAULT_BREAK_MINUTES
}

const fn default_true() -> bool {
    true
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            focus_minutes: default_focus_minutes(),
            break_minutes: default_break_minutes(),
        }
    }
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            bell: default_true(),
            notification: false,
        }
    }
}

impl TimerConfig {
    /// Validate the configured durations.
    ///
    /// # Errors
    ///
    /// Returns `PomoError::Config` if a duration is outside its range.
    pub fn durations(&self) -> Result<Durations, PomoError> {
        Durations::new(self.focus_minutes, self.break_minutes)
            .map_err(|e| PomoError::Config(format!("timer: {e}")))
    }
}

impl Config {
    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed or
    /// its durations are out of range.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, PomoError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            PomoError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        let config: Self = serde_yaml::from_str(&contents).map_err(|e| {
            PomoError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })?;
        config.timer.durations()?;
        Ok(config)
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), PomoError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| PomoError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, contents).map_err(|e| {
            PomoError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Render the configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String, PomoError> {
        serde_yaml::to_string(self)
            .map_err(|e| PomoError::Config(format!("Failed to serialize config: {e}")))
    }
}
