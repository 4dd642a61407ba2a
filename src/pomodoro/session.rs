//! Focus/break session state machine.
//!
//! The transition functions here are pure: each takes a session by value and
//! returns the next one. The widget state in [`super::timer`] decides when to
//! call them.

use serde::{Deserialize, Serialize};

/// Which half of the Pomodoro cycle a session is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionLabel {
    /// Working on the task at hand.
    Focusing,
    /// Resting between focus periods.
    OnBreak,
}

impl SessionLabel {
    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Focusing => "Focusing",
            Self::OnBreak => "On Break",
        }
    }
}

impl std::fmt::Display for SessionLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// The current period and how much of it is left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Focusing or on break.
    pub label: SessionLabel,
    /// Seconds left in this period.
    pub time_remaining: u32,
}

impl Session {
    /// Create a session.
    #[must_use]
    pub const fn new(label: SessionLabel, time_remaining: u32) -> Self {
        Self {
            label,
            time_remaining,
        }
    }

    /// Begin a session, or resume the prior one unchanged.
    #[must_use]
    pub const fn start(prior: Option<Self>, focus_secs: u32) -> Self {
        match prior {
            Some(session) => session,
            None => Self::new(SessionLabel::Focusing, focus_secs),
        }
    }

    /// Advance by one second. Saturates at zero; the label never changes.
    #[must_use]
    pub const fn tick(self) -> Self {
        Self {
            label: self.label,
            time_remaining: self.time_remaining.saturating_sub(1),
        }
    }

    /// Switch to the other label with a full period.
    #[must_use]
    pub const fn on_expire(self, focus_secs: u32, break_secs: u32) -> Self {
        match self.label {
            SessionLabel::Focusing => Self::new(SessionLabel::OnBreak, break_secs),
            SessionLabel::OnBreak => Self::new(SessionLabel::Focusing, focus_secs),
        }
    }

    /// Whether the period has run out.
    #[must_use]
    pub const fn is_expired(&self) -> bool {
        self.time_remaining == 0
    }
}
