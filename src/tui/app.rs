//! Application state for the TUI.

use std::time::{Duration, Instant};

use tracing::warn;

use crate::pomodoro::{Alert, Alerts, IntervalOutcome, Pomodoro, Ticker};
use crate::tui::event::Action;

/// How long to block on input while no tick is scheduled.
const IDLE_POLL: Duration = Duration::from_millis(250);

const HELP: &str = "space:play/pause | s:stop | k/j:focus +/- | l/h:break +/- | q:quit";

/// Application state.
pub struct App {
    /// The timer widget.
    pub pomodoro: Pomodoro,
    /// Transition alerts.
    alerts: Alerts,
    /// One-second interval, armed while running.
    ticker: Ticker,
    /// Status message to display.
    pub status: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl App {
    /// Create a new app instance.
    #[must_use]
    pub fn new(pomodoro: Pomodoro, alerts: Alerts) -> Self {
        Self {
            pomodoro,
            alerts,
            ticker: Ticker::default(),
            status: Some("Press ? for help".to_string()),
            should_quit: false,
        }
    }

    /// Apply a user action.
    pub fn handle(&mut self, action: Action, now: Instant) {
        self.status = None;
        match action {
            Action::Quit => self.should_quit = true,
            Action::PlayPause => self.play_pause(now),
            Action::Stop => self.stop(),
            Action::IncreaseFocus => {
                let changed = self.pomodoro.increase_focus();
                self.report_adjustment(changed, "Focus", "maximum");
            }
            Action::DecreaseFocus => {
                let changed = self.pomodoro.decrease_focus();
                self.report_adjustment(changed, "Focus", "minimum");
            }
            Action::IncreaseBreak => {
                let changed = self.pomodoro.increase_break();
                self.report_adjustment(changed, "Break", "maximum");
            }
            Action::DecreaseBreak => {
                let changed = self.pomodoro.decrease_break();
                self.report_adjustment(changed, "Break", "minimum");
            }
            Action::Help => self.status = Some(HELP.to_string()),
        }
    }

    fn play_pause(&mut self, now: Instant) {
        if self.pomodoro.play_pause() {
            self.ticker.arm(now);
        } else {
            self.ticker.disarm();
        }
    }

    fn stop(&mut self) {
        if self.pomodoro.stop() {
            self.ticker.disarm();
        } else {
            self.status = Some("Nothing to stop yet".to_string());
        }
    }

    fn report_adjustment(&mut self, changed: bool, which: &str, bound: &str) {
        if changed {
            return;
        }
        self.status = Some(if self.pomodoro.controls_locked() {
            "Stop the timer to change durations".to_string()
        } else {
            format!("{which} duration is at its {bound}")
        });
    }

    /// Advance the timer if a tick is due.
    pub fn on_tick(&mut self, now: Instant) {
        if !self.ticker.fire(now) {
            return;
        }
        if let Some(IntervalOutcome::Transitioned(next)) = self.pomodoro.on_interval() {
            if let Err(e) = self.alerts.notify(next) {
                warn!(error = %e, "alert failed");
            }
        }
    }

    /// How long the event loop may wait for input.
    #[must_use]
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.ticker.poll_timeout(now, IDLE_POLL)
    }
}
