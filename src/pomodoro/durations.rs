//! Focus and break durations with their adjustment bounds.

use crate::error::PomoError;

/// Shortest focus period, in minutes.
pub const FOCUS_MIN: u32 = 5;
/// Longest focus period, in minutes.
pub const FOCUS_MAX: u32 = 60;
/// Focus adjustment step, in minutes.
pub const FOCUS_STEP: u32 = 5;
/// Shortest break, in minutes.
pub const BREAK_MIN: u32 = 1;
/// Longest break, in minutes.
pub const BREAK_MAX: u32 = 15;
/// Break adjustment step, in minutes.
pub const BREAK_STEP: u32 = 1;

/// Default focus period, in minutes.
pub const DEFAULT_FOCUS_MINUTES: u32 = 25;
/// Default break, in minutes.
pub const DEFAULT_BREAK_MINUTES: u32 = 5;

/// The configured focus and break lengths.
///
/// Values can only be constructed inside their ranges, and the step
/// operations leave them unchanged at a boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Durations {
    focus_minutes: u32,
    break_minutes: u32,
}

impl Default for Durations {
    fn default() -> Self {
        Self {
            focus_minutes: DEFAULT_FOCUS_MINUTES,
            break_minutes: DEFAULT_BREAK_MINUTES,
        }
    }
}

impl Durations {
    /// Build durations, rejecting values off their range or step.
    ///
    /// # Errors
    ///
    /// Returns `PomoError::InvalidArgument` if either value is out of bounds.
    pub fn new(focus_minutes: u32, break_minutes: u32) -> Result<Self, PomoError> {
        if !(FOCUS_MIN..=FOCUS_MAX).contains(&focus_minutes) || focus_minutes % FOCUS_STEP != 0 {
            return Err(PomoError::InvalidArgument(format!(
                "focus duration must be between {FOCUS_MIN} and {FOCUS_MAX} minutes in steps of {FOCUS_STEP}, got {focus_minutes}"
            )));
        }
        if !(BREAK_MIN..=BREAK_MAX).contains(&break_minutes) {
            return Err(PomoError::InvalidArgument(format!(
                "break duration must be between {BREAK_MIN} and {BREAK_MAX} minutes, got {break_minutes}"
            )));
        }
        Ok(Self {
            focus_minutes,
            break_minutes,
        })
    }

    /// Focus length in minutes.
    #[must_use]
    pub const fn focus_minutes(&self) -> u32 {
        self.focus_minutes
    }

    /// Break length in minutes.
    #[must_use]
    pub const fn break_minutes(&self) -> u32 {
        self.break_minutes
    }

    /// Focus length in seconds.
    #[must_use]
    pub const fn focus_secs(&self) -> u32 {
        self.focus_minutes * 60
    }

    /// Break length in seconds.
    #[must_use]
    pub const fn break_secs(&self) -> u32 {
        self.break_minutes * 60
    }

    /// Add one step to the focus length. Returns false at the upper bound.
    pub fn increase_focus(&mut self) -> bool {
        if self.focus_minutes < FOCUS_MAX {
            self.focus_minutes += FOCUS_STEP;
            true
        } else {
            false
        }
    }

    /// Remove one step from the focus length. Returns false at the lower bound.
    pub fn decrease_focus(&mut self) -> bool {
        if self.focus_minutes > FOCUS_MIN {
            self.focus_minutes -= FOCUS_STEP;
            true
        } else {
            false
        }
    }

    /// Add one step to the break length. Returns false at the upper bound.
    pub fn increase_break(&mut self) -> bool {
        if self.break_minutes < BREAK_MAX {
            self.break_minutes += BREAK_STEP;
            true
        } else {
            false
        }
    }

    /// Remove one step from the break length. Returns false at the lower bound.
    pub fn decrease_break(&mut self) -> bool {
        if self.break_minutes > BREAK_MIN {
            self.break_minutes -= BREAK_STEP;
            true
        } else {
            false
        }
    }
}
