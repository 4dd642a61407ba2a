//! Line-mode timer.
//!
//! Drives the same state machine as the interactive timer, printing a live
//! countdown on a single line instead of drawing a full-screen UI.

use std::io::{self, Write};
use std::time::Duration;

use colored::Colorize;
use tracing::{info, warn};

use crate::cli::args::{OutputFormat, RunArgs, TimerArgs};
use crate::config::Config;
use crate::error::PomoError;
use crate::output::{format_snapshot_json, format_status_line, format_transition};
use crate::pomodoro::{Alert, Alerts, Durations, IntervalOutcome, Pomodoro, TICK_PERIOD};

/// Merge command-line durations over the configured defaults.
///
/// # Errors
///
/// Returns `PomoError::InvalidArgument` if a duration is out of range.
pub fn resolve_durations(args: TimerArgs, defaults: Durations) -> Result<Durations, PomoError> {
    Durations::new(
        args.focus_minutes.unwrap_or(defaults.focus_minutes()),
        args.break_minutes.unwrap_or(defaults.break_minutes()),
    )
}

/// Execute the run command.
///
/// # Errors
///
/// Returns an error if the durations are invalid or stdout cannot be written.
pub fn run(args: RunArgs, config: &Config, format: OutputFormat) -> Result<String, PomoError> {
    let defaults = config.timer.durations()?;
    let durations = resolve_durations(args.timer, defaults)?;
    let mut pomodoro = Pomodoro::with_durations(durations, defaults);

    let alerts = if args.quiet {
        Alerts::silent()
    } else {
        Alerts::from_config(&config.alert)
    };

    let mut stdout = io::stdout();
    let transitions = drive(
        &mut pomodoro,
        &alerts,
        &mut stdout,
        format,
        args.sessions,
        std::thread::sleep,
    )?;

    match format {
        OutputFormat::Json => Ok(String::new()),
        OutputFormat::Pretty => Ok(format!(
            "{} after {transitions} transition{}",
            "Done".green(),
            if transitions == 1 { "" } else { "s" }
        )),
    }
}

/// Run the timer until `limit` transitions have happened.
///
/// `sleep` is called once per tick. Returns the number of transitions.
///
/// # Errors
///
/// Returns an error if `out` cannot be written.
pub fn drive<W, A, S>(
    pomodoro: &mut Pomodoro,
    alert: &A,
    out: &mut W,
    format: OutputFormat,
    limit: Option<u32>,
    mut sleep: S,
) -> Result<u32, PomoError>
where
    W: Write,
    A: Alert + ?Sized,
    S: FnMut(Duration),
{
    if !pomodoro.is_running() {
        pomodoro.play_pause();
    }

    match format {
        OutputFormat::Pretty => write!(out, "\r{}", format_status_line(pomodoro))?,
        OutputFormat::Json => writeln!(out, "{}", format_snapshot_json(pomodoro)?)?,
    }
    out.flush()?;

    let mut transitions = 0;
    while limit.map_or(true, |n| transitions < n) {
        sleep(TICK_PERIOD);

        match pomodoro.on_interval() {
            Some(IntervalOutcome::Transitioned(next)) => {
                transitions += 1;
                if let Err(e) = alert.notify(next) {
                    warn!(error = %e, "alert failed");
                }
                let line = format_transition(next, pomodoro, format)?;
                match format {
                    OutputFormat::Pretty => writeln!(out, "\n{line}")?,
                    OutputFormat::Json => writeln!(out, "{line}")?,
                }
            }
            Some(IntervalOutcome::Ticked) => {
                if format == OutputFormat::Pretty {
                    write!(out, "\r{}", format_status_line(pomodoro))?;
                }
            }
            None => break,
        }
        out.flush()?;
    }

    if format == OutputFormat::Pretty {
        writeln!(out)?;
    }
    info!(transitions, "line-mode timer finished");
    Ok(transitions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AlertConfig;
    use crate::pomodoro::alert::MockAlert;
    use crate::pomodoro::SessionLabel;
    use mockall::predicate::eq;
    use mockall::Sequence;

    fn short() -> Pomodoro {
        Pomodoro::new(Durations::new(5, 1).unwrap())
    }

    #[test]
    fn test_resolve_durations() {
        let defaults = Durations::default();
        let args = TimerArgs {
            focus_minutes: Some(50),
            break_minutes: None,
        };
        let d = resolve_durations(args, defaults).unwrap();
        assert_eq!(d.focus_minutes(), 50);
        assert_eq!(d.break_minutes(), 5);

        let args = TimerArgs {
            focus_minutes: Some(3),
            break_minutes: None,
        };
        assert!(resolve_durations(args, defaults).is_err());
    }

    #[test]
    fn test_drive_alerts_once_per_transition() {
        let mut alert = MockAlert::new();
        let mut seq = Sequence::new();
        alert
            .expect_notify()
            .with(eq(SessionLabel::OnBreak))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        alert
            .expect_notify()
            .with(eq(SessionLabel::Focusing))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let mut pomodoro = short();
        let mut out = Vec::new();
        let mut sleeps = 0;
        let transitions = drive(
            &mut pomodoro,
            &alert,
            &mut out,
            OutputFormat::Json,
            Some(2),
            |_| sleeps += 1,
        )
        .unwrap();

        assert_eq!(transitions, 2);
        // 300 ticks + expiry, then 60 ticks + expiry
        assert_eq!(sleeps, 362);

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("\"on_break\""));
        assert!(lines[2].contains("\"focusing\""));
    }

    #[test]
    fn test_drive_zero_limit_only_starts() {
        colored::control::set_override(false);
        let alert = MockAlert::new();
        let mut pomodoro = short();
        let mut out = Vec::new();

        let transitions =
            drive(&mut pomodoro, &alert, &mut out, OutputFormat::Pretty, Some(0), |_| {}).unwrap();

        assert_eq!(transitions, 0);
        assert!(pomodoro.is_running());
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("05:00 remaining"));
    }

    #[test]
    fn test_drive_continues_after_alert_failure() {
        let mut alert = MockAlert::new();
        alert
            .expect_notify()
            .times(2)
            .returning(|_| Err(PomoError::Alert("no speaker".to_string())));

        let mut pomodoro = short();
        let mut out = Vec::new();
        let transitions =
            drive(&mut pomodoro, &alert, &mut out, OutputFormat::Json, Some(2), |_| {}).unwrap();

        assert_eq!(transitions, 2);
        assert_eq!(
            pomodoro.session().map(|s| s.label),
            Some(SessionLabel::Focusing)
        );
    }

    #[test]
    fn test_json_stream_stays_parseable_with_bell() {
        let alerts = Alerts::from_config(&AlertConfig::default());
        assert!(!alerts.is_empty());

        let mut pomodoro = short();
        let mut out = Vec::new();
        drive(&mut pomodoro, &alerts, &mut out, OutputFormat::Json, Some(2), |_| {}).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains('\x07'));
        for line in text.lines() {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(value["session"]["label"].is_string());
        }
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn test_drive_pretty_prints_transition() {
        colored::control::set_override(false);
        let alerts = Alerts::silent();
        let mut pomodoro = short();
        let mut out = Vec::new();

        drive(&mut pomodoro, &alerts, &mut out, OutputFormat::Pretty, Some(1), |_| {}).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("On Break for 01:00 minutes"));
    }
}
