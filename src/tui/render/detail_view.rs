use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::task::Task;
use crate::tui::app::{App, TaskLookup};
use crate::util::unicode;

/// Render the detail view (the `/task/{id}` route) for one task, or the
/// explicit not-found state when the id no longer resolves.
pub fn render_detail_view(frame: &mut Frame, app: &mut App, task_id: &str, area: Rect) {
    match app.lookup(task_id) {
        TaskLookup::Found(task) => render_task(frame, app, &task, area),
        TaskLookup::NotFound => render_not_found(frame, app, area),
    }
}

fn render_task(frame: &mut Frame, app: &App, task: &Task, area: Rect) {
    let theme = &app.theme;
    let bg = theme.background;
    let text_style = Style::default().fg(theme.text).bg(bg);
    let bright_style = Style::default().fg(theme.text_bright).bg(bg);
    let dim_style = Style::default().fg(theme.dim).bg(bg);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(""));

    // Title row: checkbox, id, title
    {
        let checkbox = if task.completed { "[x]" } else { "[ ]" };
        let mut spans: Vec<Span> = Vec::new();
        spans.push(Span::styled(" ", Style::default().bg(bg)));
        spans.push(Span::styled(
            checkbox,
            Style::default()
                .fg(theme.checkbox_color(task.completed))
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(format!(" {}  ", task.id), dim_style));
        spans.push(Span::styled(
            task.title.clone(),
            bright_style.add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::from(spans));
    }

    // Status badge
    lines.push(Line::from(vec![
        Span::styled("     ", Style::default().bg(bg)),
        Span::styled(
            task.status_label(),
            Style::default()
                .fg(theme.status_color(task.completed))
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
    ]));

    lines.push(Line::from(""));

    // Description, wrapped; absent renders as a placeholder
    {
        let label = Span::styled(" description:  ", dim_style);
        match &task.description {
            Some(description) => {
                let wrap_width = (area.width as usize).saturating_sub(16).max(20);
                let wrapped = wrap_words(description, wrap_width);
                let mut first = true;
                for part in wrapped {
                    if first {
                        lines.push(Line::from(vec![label.clone(), Span::styled(part, text_style)]));
                        first = false;
                    } else {
                        lines.push(Line::from(vec![
                            Span::styled(" ".repeat(15), Style::default().bg(bg)),
                            Span::styled(part, text_style),
                        ]));
                    }
                }
            }
            None => {
                lines.push(Line::from(vec![
                    label,
                    Span::styled("No description provided.", dim_style),
                ]));
            }
        }
    }

    // Reporter
    lines.push(Line::from(vec![
        Span::styled(" reporter:     ", dim_style),
        Span::styled(task.reporter.clone(), text_style),
    ]));

    lines.push(Line::from(""));

    // Timestamps, long format
    lines.push(Line::from(vec![
        Span::styled(" created:      ", dim_style),
        Span::styled(
            task.created_at.format("%A, %B %-d, %Y %I:%M %p").to_string(),
            text_style,
        ),
    ]));
    lines.push(Line::from(vec![
        Span::styled(" last updated: ", dim_style),
        Span::styled(
            task.updated_at.format("%A, %B %-d, %Y %I:%M %p").to_string(),
            text_style,
        ),
    ]));

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn render_not_found(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let bg = theme.background;

    let mut lines: Vec<Line> = Vec::new();
    let top_pad = (area.height as usize / 3).saturating_sub(1);
    for _ in 0..top_pad {
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "Task not found",
        Style::default()
            .fg(theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        "The task you're looking for doesn't exist.",
        Style::default().fg(theme.dim).bg(bg),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Esc back to tasks",
        Style::default().fg(theme.highlight).bg(bg),
    )));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// Greedy word wrap by display width. Words longer than the budget get a
/// line of their own rather than being split.
fn wrap_words(text: &str, max_cells: usize) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
            continue;
        }
        if unicode::display_width(&current) + 1 + unicode::display_width(word) <= max_cells {
            current.push(' ');
            current.push_str(word);
        } else {
            out.push(current);
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
    if out.is_empty() {
        out.push(String::new());
    }
    out
}
