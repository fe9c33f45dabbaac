//! UI rendering for the timer screen.

use chrono::Duration;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph},
    Frame,
};

use crate::storage::SessionRecorder;
use crate::timer::{format_duration, format_mmss, Category, Status};
use crate::tui::app::App;

/// Render the application UI.
pub fn render<R: SessionRecorder>(frame: &mut Frame<'_>, app: &App<R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Categories
            Constraint::Min(7),    // Timer
            Constraint::Length(3), // Progress
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_categories(frame, app, chunks[0]);
    render_timer(frame, app, chunks[1]);
    render_progress(frame, app, chunks[2]);
    render_status_bar(frame, app, chunks[3]);

    if app.session.status() == Status::Finished {
        render_summary(frame, app);
    }
}

/// Render the category selector row.
fn render_categories<R: SessionRecorder>(frame: &mut Frame<'_>, app: &App<R>, area: Rect) {
    let selectable = app.session.status() == Status::Idle;
    let mut spans = Vec::new();

    for (i, cat) in Category::ALL.iter().enumerate() {
        let selected = *cat == app.session.category();
        let style = if selected && selectable {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else if selected {
            Style::default().fg(Color::Black).bg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Gray)
        };

        spans.push(Span::styled(
            format!(" {}:{} ", i + 1, cat.display_name()),
            style,
        ));
        spans.push(Span::raw(" "));
    }

    let categories = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Category "));

    frame.render_widget(categories, area);
}

/// Render the countdown display.
fn render_timer<R: SessionRecorder>(frame: &mut Frame<'_>, app: &App<R>, area: Rect) {
    let session = &app.session;

    let (state_label, state_color) = match session.status() {
        Status::Idle => ("idle", Color::Gray),
        Status::Running => ("running", Color::Green),
        Status::Paused => ("paused", Color::Yellow),
        Status::Finished => ("finished", Color::Cyan),
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format_mmss(Duration::seconds(session.remaining_seconds())),
            Style::default()
                .fg(state_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!(
            "Selected duration: {}",
            format_duration(Duration::seconds(session.selected_duration()))
        )),
        Line::from(format!("Distractions: {}", session.distraction_count())),
        Line::from(Span::styled(
            format!("[{state_label}]"),
            Style::default().fg(state_color),
        )),
    ];

    let timer = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" focal "));

    frame.render_widget(timer, area);
}

/// Render the progress gauge.
fn render_progress<R: SessionRecorder>(frame: &mut Frame<'_>, app: &App<R>, area: Rect) {
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Green))
        .ratio(app.session.progress());

    frame.render_widget(gauge, area);
}

/// Render the status bar.
fn render_status_bar<R: SessionRecorder>(frame: &mut Frame<'_>, app: &App<R>, area: Rect) {
    let text = app.status.clone().unwrap_or_default();
    let bar = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(bar, area);
}

/// Render the finished-session summary panel.
fn render_summary<R: SessionRecorder>(frame: &mut Frame<'_>, app: &App<R>) {
    let Some(summary) = app.session.summary() else {
        return;
    };

    let area = centered_rect(50, 9, frame.area());

    let minutes = summary.actual_duration / 60;
    let seconds = summary.actual_duration % 60;

    let lines = vec![
        Line::from(""),
        Line::from(format!("Category:      {}", summary.category)),
        Line::from(format!("Focused time:  {minutes}m {seconds}s")),
        Line::from(format!("Distractions:  {}", summary.distraction_count)),
        Line::from(""),
        Line::from(Span::styled(
            "r: new session   q: quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let panel = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Session Summary "),
        );

    frame.render_widget(Clear, area);
    frame.render_widget(panel, area);
}

/// A centered rect of the given width percentage and fixed height.
#[allow(clippy::cast_possible_truncation)]
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let width = (u32::from(area.width) * u32::from(percent_x) / 100) as u16;
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect {
        x,
        y,
        width,
        height: height.min(area.height),
    }
}
