//! Article presenter
//!
//! Pure classification of the app state into one of five mutually
//! exclusive render states, then rendering of each. The precedence is
//! fixed: loading first, then error, then emptiness, then blank
//! summary, then content.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

use crate::app::AppState;

/// What the content region shows for a given state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleView<'a> {
    /// A navigation is in flight
    Skeleton,
    /// The last navigation failed
    ErrorPanel(&'a str),
    /// Nothing loaded yet, or content cleared by a failure already
    /// dismissed
    EmptyPrompt,
    /// The page exists but has no summary text
    EmptySummary { title: &'a str },
    /// A loaded article
    Content { title: &'a str, body: &'a str },
}

/// Classify state with the fixed precedence.
pub fn view_state(state: &AppState) -> ArticleView<'_> {
    if state.is_loading {
        return ArticleView::Skeleton;
    }
    if let Some(error) = state.error.as_deref() {
        return ArticleView::ErrorPanel(error);
    }
    let Some(article) = &state.article else {
        return ArticleView::EmptyPrompt;
    };
    let Some(content) = article.content.as_deref() else {
        return ArticleView::EmptyPrompt;
    };
    if content.is_empty() {
        return ArticleView::EmptySummary {
            title: &article.title,
        };
    }
    ArticleView::Content {
        title: &article.title,
        body: content,
    }
}

/// Render the content region.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    match view_state(state) {
        ArticleView::Skeleton => render_skeleton(frame, area, state),
        ArticleView::ErrorPanel(message) => render_error(frame, area, message),
        ArticleView::EmptyPrompt => render_prompt(frame, area),
        ArticleView::EmptySummary { title } => render_card(
            frame,
            area,
            title,
            "No summary is available for this topic. It might be a disambiguation \
             page or an article without an introductory section.",
            Style::default().fg(Color::DarkGray),
            0,
        ),
        ArticleView::Content { title, body } => render_card(
            frame,
            area,
            title,
            body,
            Style::default(),
            state.scroll,
        ),
    }
}

fn render_skeleton(frame: &mut Frame, area: Rect, state: &AppState) {
    let title = state
        .article
        .as_ref()
        .map(|article| article.title.as_str())
        .unwrap_or("Loading");

    let block = card_block(title);
    let inner_width = block.inner(area).width.saturating_sub(2) as usize;

    // Placeholder bars where the text will be
    let mut lines = Vec::new();
    for fraction in [0.9_f64, 1.0, 0.95, 0.6, 0.0, 0.85, 0.7] {
        let width = (inner_width as f64 * fraction) as usize;
        lines.push(Line::from(Span::styled(
            "\u{2587}".repeat(width),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let skeleton = Paragraph::new(lines).block(block);
    frame.render_widget(skeleton, area);
}

fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let lines = vec![
        Line::from(Span::styled(
            "Error",
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(message),
        Line::from(""),
        Line::from(Span::styled(
            "Esc to dismiss, n for another article",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let panel = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Error ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .padding(Padding::horizontal(1)),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Center);

    frame.render_widget(panel, centered(area, 70, 40));
}

fn render_prompt(frame: &mut Frame, area: Rect) {
    let prompt = Paragraph::new(vec![
        Line::from(""),
        Line::from("Swipe or press n to load a random Wikipedia article."),
        Line::from(""),
        Line::from(Span::styled(
            "n/space/→ new article   b/← back   ? help   q quit",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(prompt, centered(area, 80, 30));
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    body: &str,
    body_style: Style,
    scroll: u16,
) {
    let card = Paragraph::new(body)
        .style(body_style)
        .block(card_block(title))
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));

    frame.render_widget(card, area);
}

fn card_block(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .padding(Padding::symmetric(2, 1))
}

fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
