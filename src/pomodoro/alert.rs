//! Audible alerts at session transitions.

use std::io::Write;

use tracing::warn;

use crate::config::AlertConfig;
use crate::error::PomoError;

use super::session::SessionLabel;

/// Something that can signal a session transition.
#[cfg_attr(test, mockall::automock)]
pub trait Alert {
    /// Signal that a session with label `next` has just begun.
    ///
    /// # Errors
    ///
    /// Returns `PomoError::Alert` if the signal could not be delivered.
    fn notify(&self, next: SessionLabel) -> Result<(), PomoError>;
}

/// Rings the terminal bell.
///
/// The bell goes to stderr; stdout carries command output and must stay
/// parseable.
#[derive(Debug, Default)]
pub struct TerminalBell;

impl TerminalBell {
    fn ring<W: Write>(out: &mut W) -> Result<(), PomoError> {
        out.write_all(b"\x07")
            .and_then(|()| out.flush())
            .map_err(|e| PomoError::Alert(format!("terminal bell: {e}")))
    }
}

impl Alert for TerminalBell {
    fn notify(&self, _next: SessionLabel) -> Result<(), PomoError> {
        Self::ring(&mut std::io::stderr())
    }
}

/// Shows a desktop notification.
#[cfg(feature = "desktop-notify")]
#[derive(Debug, Default)]
pub struct DesktopNotification;

#[cfg(feature = "desktop-notify")]
impl Alert for DesktopNotification {
    fn notify(&self, next: SessionLabel) -> Result<(), PomoError> {
        let body = match next {
            SessionLabel::Focusing => "Break is over. Time to focus.",
            SessionLabel::OnBreak => "Focus session complete. Take a break.",
        };
        notify_rust::Notification::new()
            .summary(&format!("pomo: {next}"))
            .body(body)
            .show()
            .map(|_| ())
            .map_err(|e| PomoError::Alert(format!("desktop notification: {e}")))
    }
}

/// Fans a transition out to every configured alert.
#[derive(Default)]
pub struct Alerts {
    sinks: Vec<Box<dyn Alert>>,
}

impl Alerts {
    /// Build the alert set from configuration.
    #[must_use]
    pub fn from_config(config: &AlertConfig) -> Self {
        let mut alerts = Self::default();
        if config.bell {
            alerts.push(TerminalBell);
        }
        if config.notification {
            alerts.push_desktop();
        }
        alerts
    }

    #[cfg(feature = "desktop-notify")]
    fn push_desktop(&mut self) {
        self.push(DesktopNotification);
    }

    #[cfg(not(feature = "desktop-notify"))]
    fn push_desktop(&mut self) {
        warn!("desktop notifications requested but pomo was built without the desktop-notify feature");
    }

    /// An alert set that does nothing.
    #[must_use]
    pub fn silent() -> Self {
        Self::default()
    }

    /// Add an alert.
    pub fn push(&mut self, alert: impl Alert + 'static) {
        self.sinks.push(Box::new(alert));
    }

    /// Number of configured alerts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    /// Whether no alert is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl Alert for Alerts {
    /// Alert failures are logged and swallowed; the timer keeps running.
    fn notify(&self, next: SessionLabel) -> Result<(), PomoError> {
        for sink in &self.sinks {
            if let Err(e) = sink.notify(next) {
                warn!(error = %e, "alert failed");
            }
        }
        Ok(())
    }
}
