//! Widget state for the Pomodoro timer.
//!
//! [`Pomodoro`] owns the durations, the optional session and the control
//! enablement. It exposes the control operations and applies the driving
//! policy once per interval.

use chrono::Duration;
use serde::Serialize;
use tracing::{debug, info};

use super::durations::Durations;
use super::session::{Session, SessionLabel};

/// What happened on one interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalOutcome {
    /// The session counted down by one second.
    Ticked,
    /// The session expired and a new one began with this label.
    Transitioned(SessionLabel),
}

/// Serializable view of the widget.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub running: bool,
    pub focus_minutes: u32,
    pub break_minutes: u32,
    pub session: Option<Session>,
    pub progress_percent: f64,
    pub remaining: Option<String>,
}

/// The timer widget's state.
#[derive(Debug, Clone)]
pub struct Pomodoro {
    durations: Durations,
    defaults: Durations,
    session: Option<Session>,
    running: bool,
    stop_enabled: bool,
}

impl Default for Pomodoro {
    fn default() -> Self {
        Self::new(Durations::default())
    }
}

impl Pomodoro {
    /// Create a stopped timer. `defaults` are also what stop resets to.
    #[must_use]
    pub const fn new(defaults: Durations) -> Self {
        Self {
            durations: defaults,
            defaults,
            session: None,
            running: false,
            stop_enabled: false,
        }
    }

    /// Create a stopped timer whose initial durations differ from the
    /// defaults it resets to.
    #[must_use]
    pub const fn with_durations(durations: Durations, defaults: Durations) -> Self {
        Self {
            durations,
            ..Self::new(defaults)
        }
    }

    /// Current durations.
    #[must_use]
    pub const fn durations(&self) -> Durations {
        self.durations
    }

    /// Current session, absent when stopped.
    #[must_use]
    pub const fn session(&self) -> Option<Session> {
        self.session
    }

    /// Whether the interval is active.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// A session exists but the interval is suspended.
    #[must_use]
    pub const fn is_paused(&self) -> bool {
        !self.running && self.session.is_some()
    }

    /// Whether the stop control is enabled.
    #[must_use]
    pub const fn can_stop(&self) -> bool {
        self.stop_enabled
    }

    /// Duration controls are locked from the first start until stop.
    #[must_use]
    pub const fn controls_locked(&self) -> bool {
        self.session.is_some()
    }

    /// Toggle between running and paused. Returns the new running state.
    pub fn play_pause(&mut self) -> bool {
        self.running = !self.running;
        self.stop_enabled = true;
        if self.running {
            let session = Session::start(self.session, self.durations.focus_secs());
            if self.session.is_none() {
                info!(
                    focus_minutes = self.durations.focus_minutes(),
                    break_minutes = self.durations.break_minutes(),
                    "timer started"
                );
            } else {
                info!(label = %session.label, remaining = session.time_remaining, "timer resumed");
            }
            self.session = Some(session);
        } else {
            info!("timer paused");
        }
        self.running
    }

    /// Clear the session and reset durations. No-op while stop is disabled.
    pub fn stop(&mut self) -> bool {
        if !self.stop_enabled {
            return false;
        }
        self.running = false;
        self.session = None;
        self.durations = self.defaults;
        self.stop_enabled = false;
        info!("timer stopped");
        true
    }

    /// Add one step to the focus length while unlocked.
    pub fn increase_focus(&mut self) -> bool {
        self.adjust(Durations::increase_focus)
    }

    /// Remove one step from the focus length while unlocked.
    pub fn decrease_focus(&mut self) -> bool {
        self.adjust(Durations::decrease_focus)
    }

    /// Add one step to the break length while unlocked.
    pub fn increase_break(&mut self) -> bool {
        self.adjust(Durations::increase_break)
    }

    /// Remove one step from the break length while unlocked.
    pub fn decrease_break(&mut self) -> bool {
        self.adjust(Durations::decrease_break)
    }

    fn adjust(&mut self, step: fn(&mut Durations) -> bool) -> bool {
        if self.controls_locked() {
            return false;
        }
        let changed = step(&mut self.durations);
        debug!(
            focus_minutes = self.durations.focus_minutes(),
            break_minutes = self.durations.break_minutes(),
            changed,
            "durations adjusted"
        );
        changed
    }

    /// Apply one interval of the driving policy.
    ///
    /// Returns `None` when not running. An expired session transitions to the
    /// other label; otherwise the session ticks down.
    pub fn on_interval(&mut self) -> Option<IntervalOutcome> {
        if !self.running {
            return None;
        }
        let session = self.session?;

        if session.is_expired() {
            let next = session.on_expire(self.durations.focus_secs(), self.durations.break_secs());
            info!(from = %session.label, to = %next.label, "session transition");
            self.session = Some(next);
            Some(IntervalOutcome::Transitioned(next.label))
        } else {
            let next = session.tick();
            debug!(remaining = next.time_remaining, "tick");
            self.session = Some(next);
            Some(IntervalOutcome::Ticked)
        }
    }

    /// Full length of the current session's label, in seconds.
    #[must_use]
    pub const fn total_secs(&self) -> Option<u32> {
        match self.session {
            Some(Session {
                label: SessionLabel::Focusing,
                ..
            }) => Some(self.durations.focus_secs()),
            Some(Session {
                label: SessionLabel::OnBreak,
                ..
            }) => Some(self.durations.break_secs()),
            None => None,
        }
    }

    /// Elapsed share of the current session, 0 to 100.
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        match (self.session, self.total_secs()) {
            (Some(session), Some(total)) if total > 0 => {
                let remaining = session.time_remaining.min(total);
                f64::from(total - remaining) / f64::from(total) * 100.0
            }
            _ => 0.0,
        }
    }

    /// Remaining time of the current session as `mm:ss`.
    #[must_use]
    pub fn remaining_display(&self) -> Option<String> {
        self.session
            .map(|s| format_duration_mmss(Duration::seconds(i64::from(s.time_remaining))))
    }

    /// Full length of the current session as `mm:ss`.
    #[must_use]
    pub fn duration_display(&self) -> Option<String> {
        self.total_secs()
            .map(|secs| format_duration_mmss(Duration::seconds(i64::from(secs))))
    }

    /// Serializable view of the current state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            running: self.running,
            focus_minutes: self.durations.focus_minutes(),
            break_minutes: self.durations.break_minutes(),
            session: self.session,
            progress_percent: self.progress_percent(),
            remaining: self.remaining_display(),
        }
    }
}

/// Format a duration as MM:SS.
#[must_use]
pub fn format_duration_mmss(d: Duration) -> String {
    let total_seconds = d.num_seconds().abs();
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// Render a progress bar from a percentage.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_progress_bar(percent: f64, width: usize) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64) as usize;
    let empty = width.saturating_sub(filled);

    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started() -> Pomodoro {
        let mut p = Pomodoro::default();
        p.play_pause();
        p
    }

    #[test]
    fn test_new_is_stopped() {
        let p = Pomodoro::default();
        assert!(p.session().is_none());
        assert!(!p.is_running());
        assert!(!p.can_stop());
        assert!(!p.controls_locked());
    }

    #[test]
    fn test_start_from_stopped() {
        let p = started();
        assert!(p.is_running());
        assert!(p.can_stop());
        assert_eq!(p.session(), Some(Session::new(SessionLabel::Focusing, 1500)));
    }

    #[test]
    fn test_pause_keeps_session() {
        let mut p = started();
        p.on_interval();
        assert!(!p.play_pause());
        assert!(p.is_paused());
        assert_eq!(p.session().map(|s| s.time_remaining), Some(1499));
        assert_eq!(p.on_interval(), None);

        assert!(p.play_pause());
        assert_eq!(p.session().map(|s| s.time_remaining), Some(1499));
    }

    #[test]
    fn test_interval_ticks_then_transitions() {
        let mut p = Pomodoro::new(Durations::new(5, 1).unwrap());
        p.play_pause();

        for _ in 0..300 {
            assert_eq!(p.on_interval(), Some(IntervalOutcome::Ticked));
        }
        assert_eq!(p.session().map(|s| s.time_remaining), Some(0));

        assert_eq!(
            p.on_interval(),
            Some(IntervalOutcome::Transitioned(SessionLabel::OnBreak))
        );
        assert_eq!(p.session(), Some(Session::new(SessionLabel::OnBreak, 60)));

        for _ in 0..60 {
            p.on_interval();
        }
        assert_eq!(
            p.on_interval(),
            Some(IntervalOutcome::Transitioned(SessionLabel::Focusing))
        );
        assert_eq!(p.session(), Some(Session::new(SessionLabel::Focusing, 300)));
    }

    #[test]
    fn test_stop_disabled_until_first_start() {
        let mut p = Pomodoro::default();
        assert!(!p.stop());
    }

    #[test]
    fn test_stop_resets_durations() {
        let mut p = Pomodoro::default();
        p.increase_focus();
        p.decrease_break();
        p.play_pause();
        assert!(p.stop());

        assert!(p.session().is_none());
        assert!(!p.is_running());
        assert!(!p.can_stop());
        assert_eq!(p.durations(), Durations::default());
    }

    #[test]
    fn test_stop_resets_to_configured_defaults() {
        let defaults = Durations::new(50, 10).unwrap();
        let mut p = Pomodoro::with_durations(Durations::default(), defaults);
        p.play_pause();
        p.stop();
        assert_eq!(p.durations(), defaults);
    }

    #[test]
    fn test_controls_locked_while_session_exists() {
        let mut p = started();
        assert!(!p.increase_focus());
        assert!(!p.decrease_break());

        p.play_pause();
        assert!(!p.decrease_focus());
        assert_eq!(p.durations(), Durations::default());

        p.stop();
        assert!(p.increase_focus());
        assert_eq!(p.durations().focus_minutes(), 30);
    }

    #[test]
    fn test_progress_bounds() {
        let mut p = Pomodoro::new(Durations::new(5, 1).unwrap());
        assert_eq!(p.progress_percent(), 0.0);

        p.play_pause();
        assert_eq!(p.progress_percent(), 0.0);

        for _ in 0..150 {
            p.on_interval();
        }
        assert!((p.progress_percent() - 50.0).abs() < f64::EPSILON);

        for _ in 0..150 {
            p.on_interval();
        }
        assert_eq!(p.progress_percent(), 100.0);
    }

    #[test]
    fn test_displays() {
        let mut p = Pomodoro::default();
        assert_eq!(p.remaining_display(), None);
        p.play_pause();
        p.on_interval();
        assert_eq!(p.remaining_display().as_deref(), Some("24:59"));
        assert_eq!(p.duration_display().as_deref(), Some("25:00"));
    }

    #[test]
    fn test_snapshot_serializes() {
        let p = started();
        let json = serde_json::to_value(p.snapshot()).unwrap();
        assert_eq!(json["running"], true);
        assert_eq!(json["session"]["label"], "focusing");
        assert_eq!(json["session"]["time_remaining"], 1500);
    }

    #[test]
    fn test_format_duration_mmss() {
        assert_eq!(format_duration_mmss(Duration::minutes(25)), "25:00");
        assert_eq!(format_duration_mmss(Duration::seconds(90)), "01:30");
        assert_eq!(format_duration_mmss(Duration::seconds(0)), "00:00");
    }

    #[test]
    fn test_render_progress_bar() {
        let bar = render_progress_bar(50.0, 10);
        assert!(bar.contains("█████"));
        assert!(bar.contains("░░░░░"));
        assert_eq!(render_progress_bar(150.0, 4), "[████]");
    }
}
