use colored::Colorize;

use crate::config::Config;
use crate::error::PomoError;
use crate::pomodoro::{render_progress_bar, Pomodoro, SessionLabel};

const BAR_WIDTH: usize = 30;

fn colored_label(label: SessionLabel) -> String {
    match label {
        SessionLabel::Focusing => label.display_name().red().bold().to_string(),
        SessionLabel::OnBreak => label.display_name().green().bold().to_string(),
    }
}

/// Format the one-line countdown shown while the timer runs
pub fn format_status_line(pomodoro: &Pomodoro) -> String {
    let Some(session) = pomodoro.session() else {
        return "Stopped".dimmed().to_string();
    };

    let remaining = pomodoro.remaining_display().unwrap_or_default();
    format!(
        "{} {} remaining {} {:>3.0}%",
        colored_label(session.label),
        remaining.bold(),
        render_progress_bar(pomodoro.progress_percent(), BAR_WIDTH),
        pomodoro.progress_percent()
    )
}

/// Format a session transition as pretty output
pub fn format_transition_pretty(next: SessionLabel, pomodoro: &Pomodoro) -> String {
    let length = pomodoro.duration_display().unwrap_or_default();
    let icon = match next {
        SessionLabel::Focusing => "🎯",
        SessionLabel::OnBreak => "☕",
    };
    format!("{icon} {} for {length} minutes", colored_label(next))
}

/// Format the effective configuration as pretty output
///
/// # Errors
///
/// Returns an error if the configuration cannot be rendered.
pub fn format_config_pretty(config: &Config) -> Result<String, PomoError> {
    let mut output = Vec::new();
    output.push("Configuration".bold().to_string());
    output.push("─".repeat(40));
    output.push(config.to_yaml()?.trim_end().to_string());
    Ok(output.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_line_stopped() {
        colored::control::set_override(false);
        assert_eq!(format_status_line(&Pomodoro::default()), "Stopped");
    }

    #[test]
    fn test_status_line_running() {
        colored::control::set_override(false);
        let mut pomodoro = Pomodoro::default();
        pomodoro.play_pause();
        let line = format_status_line(&pomodoro);
        assert!(line.starts_with("Focusing 25:00 remaining"));
        assert!(line.ends_with("  0%"));
    }

    #[test]
    fn test_transition_pretty() {
        colored::control::set_override(false);
        let mut pomodoro = Pomodoro::default();
        pomodoro.play_pause();
        let text = format_transition_pretty(SessionLabel::Focusing, &pomodoro);
        assert!(text.contains("Focusing for 25:00 minutes"));
    }

    #[test]
    fn test_config_pretty_contains_yaml() {
        let text = format_config_pretty(&Config::default()).unwrap();
        assert!(text.contains("focus_minutes: 25"));
        assert!(text.contains("bell: true"));
    }
}
