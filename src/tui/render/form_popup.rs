use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::{App, FieldBuffer, FormField, FormIntent, FormState};
use crate::util::unicode;

/// Render the create/edit dialog as a centered popup overlay.
pub fn render_form_popup(frame: &mut Frame, app: &App, area: Rect) {
    let form = match &app.form {
        Some(form) => form,
        None => return,
    };

    let bg = app.theme.background;
    let dim = app.theme.dim;
    let highlight = app.theme.highlight;

    // Sizing: min 44 columns, up to 60, capped by the terminal
    let inner_w = (area.width as usize * 3 / 5).clamp(44, 60).min(area.width.saturating_sub(2) as usize);
    let popup_w = (inner_w as u16) + 2; // +2 for borders

    let mut lines: Vec<Line> = Vec::new();
    lines.push(blank(inner_w, bg));

    push_field(&mut lines, app, form, FormField::Title, "Title *", inner_w);
    lines.push(blank(inner_w, bg));
    push_field(
        &mut lines,
        app,
        form,
        FormField::Description,
        "Description",
        inner_w,
    );
    lines.push(blank(inner_w, bg));
    push_field(
        &mut lines,
        app,
        form,
        FormField::Reporter,
        "Reporter *",
        inner_w,
    );
    lines.push(blank(inner_w, bg));

    // Submit indicator: dimmed while the form does not validate
    let valid = form.as_form().is_valid();
    let submit_label = match &form.intent {
        FormIntent::Create => "[ Create Task ]",
        FormIntent::Edit { .. } => "[ Save Changes ]",
    };
    let submit_style = if valid {
        Style::default()
            .fg(app.theme.green)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(dim).bg(bg)
    };
    let pad = inner_w.saturating_sub(submit_label.chars().count()) / 2;
    lines.push(Line::from(vec![
        Span::styled(" ".repeat(pad), Style::default().bg(bg)),
        Span::styled(submit_label, submit_style),
    ]));

    lines.push(blank(inner_w, bg));

    // Hint bar
    let hint = if valid {
        "Tab field   Enter submit   Esc cancel"
    } else {
        "Tab field   title and reporter required   Esc cancel"
    };
    let hint_len = hint.chars().count();
    let left_pad = inner_w.saturating_sub(hint_len) / 2;
    lines.push(Line::from(vec![
        Span::styled(" ".repeat(left_pad), Style::default().bg(bg)),
        Span::styled(hint, Style::default().fg(dim).bg(bg)),
    ]));

    let content_h = lines.len() as u16;
    let popup_h = (content_h + 2).min(area.height.saturating_sub(2));

    let x = area.x + area.width.saturating_sub(popup_w) / 2;
    let y = area.y + area.height.saturating_sub(popup_h) / 2;
    let popup_area = Rect::new(x, y, popup_w, popup_h);

    frame.render_widget(Clear, popup_area);

    let title = match &form.intent {
        FormIntent::Create => " New Task ",
        FormIntent::Edit { .. } => " Edit Task ",
    };
    let block = Block::default()
        .title(Span::styled(
            title,
            Style::default()
                .fg(highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(dim).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, popup_area);
}

fn blank(inner_w: usize, bg: ratatui::style::Color) -> Line<'static> {
    Line::from(Span::styled(
        " ".repeat(inner_w),
        Style::default().bg(bg),
    ))
}

/// Label row plus value row for one field. The active field shows a block
/// cursor at its edit position.
fn push_field(
    lines: &mut Vec<Line<'static>>,
    app: &App,
    form: &FormState,
    field: FormField,
    label: &str,
    inner_w: usize,
) {
    let bg = app.theme.background;
    let is_active = form.field == field;

    let label_style = if is_active {
        Style::default()
            .fg(app.theme.highlight)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.dim).bg(bg)
    };
    lines.push(Line::from(Span::styled(
        format!("  {}", label),
        label_style,
    )));

    let buffer = match field {
        FormField::Title => &form.title,
        FormField::Description => &form.description,
        FormField::Reporter => &form.reporter,
    };
    lines.push(value_row(app, buffer, is_active, inner_w));
}

fn value_row(
    app: &App,
    buffer: &FieldBuffer,
    is_active: bool,
    inner_w: usize,
) -> Line<'static> {
    let bg = app.theme.background;
    let text_style = Style::default().fg(app.theme.text_bright).bg(bg);
    let budget = inner_w.saturating_sub(4); // 2 indent + 1 cursor + 1 margin

    let mut spans: Vec<Span> = vec![Span::styled("  ", Style::default().bg(bg))];
    if is_active {
        // Show the tail that keeps the cursor in view
        let before = &buffer.text[..buffer.cursor];
        let after = &buffer.text[buffer.cursor..];
        let visible_before = tail_to_width(before, budget);
        spans.push(Span::styled(visible_before.to_string(), text_style));
        spans.push(Span::styled(
            "\u{258C}",
            Style::default().fg(app.theme.highlight).bg(bg),
        ));
        let remaining = budget.saturating_sub(unicode::display_width(visible_before));
        spans.push(Span::styled(
            unicode::truncate_to_width(after, remaining),
            text_style,
        ));
    } else if buffer.text.is_empty() {
        spans.push(Span::styled(
            "(empty)",
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    } else {
        spans.push(Span::styled(
            unicode::truncate_to_width(&buffer.text, budget),
            text_style,
        ));
    }
    Line::from(spans)
}

/// The longest suffix of `s` that fits in `max_cells`.
fn tail_to_width(s: &str, max_cells: usize) -> &str {
    if unicode::display_width(s) <= max_cells {
        return s;
    }
    let mut start = s.len();
    let mut width = 0;
    while let Some(prev) = unicode::prev_grapheme_boundary(s, start) {
        let gw = unicode::display_width(&s[prev..start]);
        if width + gw > max_cells {
            break;
        }
        width += gw;
        start = prev;
    }
    &s[start..]
}
