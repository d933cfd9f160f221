use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode, View};

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let line = match app.mode {
        Mode::Navigate => {
            if let Some(ref message) = app.status_message {
                Line::from(Span::styled(
                    format!(" {}", message),
                    Style::default().fg(app.theme.text_bright).bg(bg),
                ))
            } else {
                let hint = match app.view {
                    View::List => {
                        " j/k move   Enter open   c create   / search   x toggle   d delete   ? help   q quit"
                    }
                    View::Detail { .. } => {
                        " e edit   x toggle   d delete   Esc back   ? help   q quit"
                    }
                };
                Line::from(Span::styled(
                    hint,
                    Style::default().fg(app.theme.dim).bg(bg),
                ))
            }
        }
        Mode::Search => {
            // Live search prompt: /query▌
            let mut spans = vec![
                Span::styled(
                    format!(" /{}", app.snapshot.search_query),
                    Style::default().fg(app.theme.text_bright).bg(bg),
                ),
                Span::styled(
                    "\u{258C}",
                    Style::default().fg(app.theme.highlight).bg(bg),
                ),
            ];
            let hint = "Enter keep filter  Esc clear ";
            let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
            let hint_width = hint.chars().count();
            if content_width + hint_width < width {
                let padding = width - content_width - hint_width;
                spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
                spans.push(Span::styled(
                    hint,
                    Style::default().fg(app.theme.dim).bg(bg),
                ));
            }
            Line::from(spans)
        }
        Mode::Form => Line::from(Span::styled(
            " Tab field   Enter submit   Esc cancel",
            Style::default().fg(app.theme.dim).bg(bg),
        )),
        Mode::Confirm => Line::from(Span::styled(
            " Delete this task? (y/n)",
            Style::default()
                .fg(app.theme.red)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )),
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
