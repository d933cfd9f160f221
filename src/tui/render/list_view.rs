use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::task::Task;
use crate::tui::app::App;
use crate::util::unicode;

use super::push_highlighted_spans;

/// Render the task list view (the `/` route): one row per visible task,
/// or an empty state when nothing matches.
pub fn render_list_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let listing = app.listing();

    if listing.tasks.is_empty() {
        render_empty_state(frame, app, area);
        return;
    }

    // Keep the cursor visible
    let height = area.height as usize;
    if height == 0 {
        return;
    }
    if app.list_cursor < app.list_scroll {
        app.list_scroll = app.list_cursor;
    }
    if app.list_cursor >= app.list_scroll + height {
        app.list_scroll = app.list_cursor + 1 - height;
    }

    let search_re = app.active_search_re();
    let mut lines: Vec<Line> = Vec::new();
    for (idx, task) in listing
        .tasks
        .iter()
        .enumerate()
        .skip(app.list_scroll)
        .take(height)
    {
        lines.push(task_row(app, task, idx == app.list_cursor, area.width as usize, search_re.as_ref()));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(app.theme.background));
    frame.render_widget(paragraph, area);
}

/// One task row: checkbox, id, title, then reporter and creation date at
/// the right edge.
fn task_row<'a>(
    app: &App,
    task: &Task,
    is_selected: bool,
    width: usize,
    search_re: Option<&regex::Regex>,
) -> Line<'a> {
    let theme = &app.theme;
    let row_bg = if is_selected {
        theme.selection_bg
    } else {
        theme.background
    };
    let row_pad = Style::default().bg(row_bg);

    let mut spans: Vec<Span> = Vec::new();
    spans.push(Span::styled(" ", row_pad));

    // Checkbox
    let checkbox = if task.completed { "[x]" } else { "[ ]" };
    spans.push(Span::styled(
        checkbox,
        Style::default()
            .fg(theme.checkbox_color(task.completed))
            .bg(row_bg),
    ));

    // Id
    spans.push(Span::styled(
        format!(" {:>2}  ", task.id),
        Style::default().fg(theme.dim).bg(row_bg),
    ));

    // Right edge: reporter and short creation date
    let date = task.created_at.format("%b %-d, %Y").to_string();
    let right = format!("{}  {} ", task.reporter, date);
    let right_width = unicode::display_width(&right);

    // Title, truncated to the room that remains
    let left_width: usize = spans.iter().map(|s| unicode::display_width(&s.content)).sum();
    let title_max = width.saturating_sub(left_width + right_width + 1);
    let title = unicode::truncate_to_width(&task.title, title_max);

    let mut title_style = Style::default().fg(theme.text_bright).bg(row_bg);
    if task.completed {
        title_style = Style::default()
            .fg(theme.dim)
            .bg(row_bg)
            .add_modifier(Modifier::CROSSED_OUT);
    }
    if is_selected {
        title_style = title_style.add_modifier(Modifier::BOLD);
    }
    let match_style = Style::default()
        .fg(theme.search_match_fg)
        .bg(theme.search_match_bg);
    push_highlighted_spans(&mut spans, &title, title_style, match_style, search_re);

    // Pad the middle, then the right-edge fields
    let used: usize = spans.iter().map(|s| unicode::display_width(&s.content)).sum();
    if used + right_width < width {
        spans.push(Span::styled(" ".repeat(width - used - right_width), row_pad));
    }
    spans.push(Span::styled(
        right,
        Style::default().fg(theme.dim).bg(row_bg),
    ));

    Line::from(spans)
}

/// The two empty states: an empty store vs. a search with no matches.
fn render_empty_state(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let bg = theme.background;
    let query = app.snapshot.search_query.trim().to_string();

    let (headline, hint) = if query.is_empty() {
        (
            "No tasks yet".to_string(),
            "Create your first task to get started!".to_string(),
        )
    } else {
        (
            "No tasks found".to_string(),
            format!("No tasks match your search for \"{}\"", query),
        )
    };

    let mut lines: Vec<Line> = Vec::new();
    let top_pad = (area.height as usize / 3).saturating_sub(2);
    for _ in 0..top_pad {
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "\u{2713}",
        Style::default().fg(theme.dim).bg(bg),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        headline,
        Style::default()
            .fg(theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        hint,
        Style::default().fg(theme.dim).bg(bg),
    )));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
