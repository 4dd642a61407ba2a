//! Fixed-cadence tick scheduling.
//!
//! The ticker never sleeps itself; the event loop asks it how long it may
//! block and whether a tick is due. Time is passed in so the schedule can be
//! tested without a clock.

use std::time::{Duration, Instant};

/// One tick per second.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Schedules ticks while armed.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    next: Option<Instant>,
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(TICK_PERIOD)
    }
}

impl Ticker {
    /// Create a disarmed ticker.
    #[must_use]
    pub const fn new(period: Duration) -> Self {
        Self { period, next: None }
    }

    /// Schedule the first tick one period from `now`.
    pub fn arm(&mut self, now: Instant) {
        self.next = Some(now + self.period);
    }

    /// Cancel any scheduled tick.
    pub fn disarm(&mut self) {
        self.next = None;
    }

    /// Whether a tick is scheduled.
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.next.is_some()
    }

    /// Consume a due tick. The next one is scheduled a full period after `now`.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.next {
            Some(deadline) if now >= deadline => {
                self.next = Some(now + self.period);
                true
            }
            _ => false,
        }
    }

    /// How long the caller may block waiting for input.
    #[must_use]
    pub fn poll_timeout(&self, now: Instant, idle: Duration) -> Duration {
        self.next
            .map_or(idle, |deadline| deadline.saturating_duration_since(now).min(idle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disarmed_never_fires() {
        let mut ticker = Ticker::default();
        let now = Instant::now();
        assert!(!ticker.fire(now + Duration::from_secs(10)));
        assert_eq!(
            ticker.poll_timeout(now, Duration::from_millis(250)),
            Duration::from_millis(250)
        );
    }

    #[test]
    fn test_fires_once_per_period() {
        let mut ticker = Ticker::default();
        let start = Instant::now();
        ticker.arm(start);

        assert!(!ticker.fire(start + Duration::from_millis(500)));
        assert!(ticker.fire(start + Duration::from_secs(1)));
        assert!(!ticker.fire(start + Duration::from_millis(1500)));
        assert!(ticker.fire(start + Duration::from_secs(2)));
    }

    #[test]
    fn test_late_tick_does_not_burst() {
        let mut ticker = Ticker::default();
        let start = Instant::now();
        ticker.arm(start);

        let late = start + Duration::from_secs(5);
        assert!(ticker.fire(late));
        assert!(!ticker.fire(late));
    }

    #[test]
    fn test_poll_timeout_bounded_by_deadline() {
        let mut ticker = Ticker::default();
        let start = Instant::now();
        ticker.arm(start);

        let timeout = ticker.poll_timeout(start + Duration::from_millis(800), Duration::from_secs(5));
        assert_eq!(timeout, Duration::from_millis(200));

        ticker.disarm();
        assert!(!ticker.is_armed());
    }
}
