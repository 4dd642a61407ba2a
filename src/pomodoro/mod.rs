//! Pomodoro timer core.
//!
//! - Focus/break session state machine
//! - Duration controls with fixed bounds
//! - Widget state and the once-per-second driving policy
//! - Tick scheduling and transition alerts

pub mod alert;
pub mod durations;
pub mod session;
pub mod ticker;
pub mod timer;

pub use alert::{Alert, Alerts, TerminalBell};
pub use durations::Durations;
pub use session::{Session, SessionLabel};
pub use ticker::{Ticker, TICK_PERIOD};
pub use timer::{format_duration_mmss, render_progress_bar, IntervalOutcome, Pomodoro, Snapshot};
