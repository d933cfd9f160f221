use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, ConfirmAction, FormState, Mode, TaskLookup, View};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Help overlay intercepts ? and Esc, plus scroll keys
    if app.show_help {
        match key.code {
            KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q') => {
                app.show_help = false;
            }
            KeyCode::Char('j') | KeyCode::Down => {
                app.help_scroll = app.help_scroll.saturating_add(1);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                app.help_scroll = app.help_scroll.saturating_sub(1);
            }
            _ => {}
        }
        return;
    }

    match &app.view {
        View::List => handle_list(app, key),
        View::Detail { task_id } => {
            let task_id = task_id.clone();
            handle_detail(app, &task_id, key);
        }
    }
}

fn handle_list(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => {
            app.show_help = true;
            app.help_scroll = 0;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            let count = app.listing().total_count;
            if count > 0 && app.list_cursor + 1 < count {
                app.list_cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.list_cursor = app.list_cursor.saturating_sub(1);
        }
        KeyCode::Char('g') => app.list_cursor = 0,
        KeyCode::Char('G') => {
            let count = app.listing().total_count;
            app.list_cursor = count.saturating_sub(1);
        }
        KeyCode::Enter => {
            if let Some(task_id) = app.selected_task_id() {
                app.open_detail(task_id);
            }
        }
        KeyCode::Char('/') => app.mode = Mode::Search,
        KeyCode::Char('c') => {
            app.form = Some(FormState::create());
            app.mode = Mode::Form;
        }
        KeyCode::Char(' ') | KeyCode::Char('x') => {
            if let Some(task_id) = app.selected_task_id() {
                let _ = app.store.toggle_task_completion(&task_id);
            }
        }
        KeyCode::Char('d') => {
            if let Some(task_id) = app.selected_task_id() {
                app.confirm = Some(ConfirmAction::DeleteTask { task_id });
                app.mode = Mode::Confirm;
            }
        }
        // Esc clears an active search filter, the clear-button analog
        KeyCode::Esc => {
            if !app.snapshot.search_query.is_empty() {
                app.store.set_search_query("");
                app.list_cursor = 0;
            }
        }
        _ => {}
    }
}

fn handle_detail(app: &mut App, task_id: &str, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => {
            app.show_help = true;
            app.help_scroll = 0;
        }
        KeyCode::Esc | KeyCode::Char('h') | KeyCode::Backspace => app.back_to_list(),
        KeyCode::Enter => {
            // The not-found state offers Enter as its way back
            if app.lookup(task_id) == TaskLookup::NotFound {
                app.back_to_list();
            }
        }
        KeyCode::Char('e') => {
            if let TaskLookup::Found(task) = app.lookup(task_id) {
                app.form = Some(FormState::edit(&task));
                app.mode = Mode::Form;
            }
        }
        KeyCode::Char(' ') | KeyCode::Char('x') => {
            let _ = app.store.toggle_task_completion(task_id);
        }
        KeyCode::Char('d') => {
            if let TaskLookup::Found(_) = app.lookup(task_id) {
                app.confirm = Some(ConfirmAction::DeleteTask {
                    task_id: task_id.to_string(),
                });
                app.mode = Mode::Confirm;
            }
        }
        _ => {}
    }
}
