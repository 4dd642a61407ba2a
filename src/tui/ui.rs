//! UI rendering for the TUI.

use chrono::{Duration, Local};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::pomodoro::{format_duration_mmss, Pomodoro, SessionLabel};
use crate::tui::app::App;

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    // Create layout: header, durations, session, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(4), // Durations
            Constraint::Min(0),    // Session
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, &app.pomodoro, chunks[0]);
    render_durations(frame, &app.pomodoro, chunks[1]);
    render_session(frame, &app.pomodoro, chunks[2]);
    render_status_bar(frame, app, chunks[3]);
}

const fn label_color(label: SessionLabel) -> Color {
    match label {
        SessionLabel::Focusing => Color::Red,
        SessionLabel::OnBreak => Color::Green,
    }
}

/// Render the header.
fn render_header(frame: &mut Frame<'_>, pomodoro: &Pomodoro, area: Rect) {
    let state = if pomodoro.is_running() {
        "running"
    } else if pomodoro.is_paused() {
        "paused"
    } else {
        "stopped"
    };
    let title = format!(" Pomodoro ({state}) ");

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

    frame.render_widget(header, area);
}

/// Render the focus and break duration controls.
fn render_durations(frame: &mut Frame<'_>, pomodoro: &Pomodoro, area: Rect) {
    let durations = pomodoro.durations();
    let style = if pomodoro.controls_locked() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };

    let lines = vec![
        Line::from(format!(
            "Focus Duration: {}",
            format_duration_mmss(Duration::minutes(i64::from(durations.focus_minutes())))
        )),
        Line::from(format!(
            "Break Duration: {}",
            format_duration_mmss(Duration::minutes(i64::from(durations.break_minutes())))
        )),
    ];

    let panel = Paragraph::new(lines).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Durations "),
    );

    frame.render_widget(panel, area);
}

/// Render the running session, or nothing before the first start.
fn render_session(frame: &mut Frame<'_>, pomodoro: &Pomodoro, area: Rect) {
    let Some(session) = pomodoro.session() else {
        return;
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(label_color(session.label)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Label and remaining time
            Constraint::Length(1), // Gauge
            Constraint::Min(0),
        ])
        .split(inner);

    let mut lines = vec![
        Line::from(Span::styled(
            format!(
                "{} for {} minutes",
                session.label,
                pomodoro.duration_display().unwrap_or_default()
            ),
            Style::default()
                .fg(label_color(session.label))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(format!(
            "{} remaining",
            pomodoro.remaining_display().unwrap_or_default()
        )),
    ];

    if pomodoro.is_paused() {
        lines.push(Line::from(Span::styled(
            "PAUSED",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
    } else {
        let ends = Local::now() + Duration::seconds(i64::from(session.time_remaining));
        lines.push(Line::from(Span::styled(
            format!("ends at {}", ends.format("%H:%M")),
            Style::default().fg(Color::DarkGray),
        )));
    }

    frame.render_widget(Paragraph::new(lines), rows[0]);

    let percent = pomodoro.progress_percent();
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(label_color(session.label)))
        .ratio((percent / 100.0).clamp(0.0, 1.0))
        .label(format!("{percent:.0}%"));
    frame.render_widget(gauge, rows[1]);
}

/// Render the status bar.
fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let status_text = app
        .status
        .as_deref()
        .unwrap_or("space:play/pause | s:stop | k/j:focus | l/h:break | ?:help | q:quit");

    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}
