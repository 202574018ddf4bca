//! UI rendering
//!
//! Pure rendering functions that transform state into terminal
//! frames: header bar, article content region, status bar, plus the
//! help and toast overlays.

pub mod article;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use libsandbook::notify::Level;

use crate::app::AppState;

/// Render the application UI
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(3),    // Article
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    render_header(frame, chunks[0]);
    article::render(frame, chunks[1], state);
    render_status_bar(frame, chunks[2], state);

    if state.help_visible {
        render_help_overlay(frame, area);
    }

    if let Some(toast) = &state.toast {
        render_toast(frame, area, &toast.message, toast.level);
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let header = Line::from(vec![
        Span::styled(
            " Sandbook ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" random Wikipedia reader"),
    ]);

    frame.render_widget(Paragraph::new(header), area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let position = if state.history.is_empty() {
        String::new()
    } else {
        format!("{}/{}  ", state.history.index() + 1, state.history.len())
    };

    let activity = if state.is_loading { "loading…  " } else { "" };

    let hints = if state.can_go_back() {
        "n new  b back  ? help  q quit"
    } else {
        "n new  ? help  q quit"
    };

    let line = Line::from(vec![
        Span::styled(activity, Style::default().fg(Color::Yellow)),
        Span::styled(position, Style::default().fg(Color::DarkGray)),
        Span::styled(hints, Style::default().fg(Color::DarkGray)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup = centered_rect(50, 60, area);

    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard & mouse",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("  n / space / \u{2192}  new random article"),
        Line::from("  b / \u{2190}          back"),
        Line::from("  j,k / \u{2191}\u{2193}       scroll"),
        Line::from("  PgUp / PgDn    scroll faster"),
        Line::from("  drag left      new random article"),
        Line::from("  drag right     back"),
        Line::from("  Esc            dismiss overlays"),
        Line::from("  q              quit"),
        Line::from(""),
        Line::from("Press Esc or ? to close"),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup);
    frame.render_widget(help, popup);
}

fn render_toast(frame: &mut Frame, area: Rect, message: &str, level: Level) {
    let color = match level {
        Level::Info => Color::Cyan,
        Level::Error => Color::Red,
    };

    // One-line box pinned above the status bar
    let width = (message.len() as u16 + 4).min(area.width.saturating_sub(2));
    let popup = Rect {
        x: area.width.saturating_sub(width + 1),
        y: area.height.saturating_sub(4),
        width,
        height: 3,
    };

    let toast = Paragraph::new(message)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(Clear, popup);
    frame.render_widget(toast, popup);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
