use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

/// Render the header: app title + completion tally, separator line below.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title row
            Constraint::Length(1), // separator
        ])
        .split(area);

    render_title_row(frame, app, chunks[0]);
    render_separator(frame, app, chunks[1]);
}

fn render_title_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut spans: Vec<Span> = vec![
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled("\u{2713}", Style::default().fg(app.theme.green).bg(bg)),
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled(
            "Super Todo",
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    // Completion tally over the filtered set, right-aligned
    let listing = app.listing();
    let tally = format!(
        "{} of {} tasks completed ",
        listing.completed_count, listing.total_count
    );
    let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let tally_width = tally.chars().count();
    if content_width + tally_width < width {
        let padding = width - content_width - tally_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(
            tally,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn render_separator(frame: &mut Frame, app: &App, area: Rect) {
    let width = area.width as usize;
    let bg = app.theme.background;
    let dim = app.theme.dim;

    let query = app.snapshot.search_query.trim();
    if query.is_empty() {
        let line: String = "\u{2500}".repeat(width);
        let sep = Paragraph::new(line).style(Style::default().fg(dim).bg(bg));
        frame.render_widget(sep, area);
        return;
    }

    // Active search: embed the indicator at the right edge of the separator
    let indicator = format!("showing results for \"{}\"", query);
    let indicator_width = indicator.chars().count();
    // +2: one space on either side of the indicator
    let separator_end = width.saturating_sub(indicator_width + 2);

    let mut spans: Vec<Span> = Vec::new();
    spans.push(Span::styled(
        "\u{2500}".repeat(separator_end),
        Style::default().fg(dim).bg(bg),
    ));
    spans.push(Span::styled(" ", Style::default().bg(bg)));
    spans.push(Span::styled(
        indicator,
        Style::default().fg(app.theme.highlight).bg(bg),
    ));
    let current_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    if current_width < width {
        spans.push(Span::styled(
            " ".repeat(width - current_width),
            Style::default().bg(bg),
        ));
    }

    let sep = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(sep, area);
}
