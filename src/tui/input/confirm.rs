use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, ConfirmAction, Mode, View};

pub(super) fn handle_confirm(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Confirm: y
        (KeyModifiers::NONE, KeyCode::Char('y')) => {
            let action = app.confirm.take();
            app.mode = Mode::Navigate;
            if let Some(ConfirmAction::DeleteTask { task_id }) = action {
                confirm_delete_task(app, &task_id);
            }
        }
        // Decline: n or Esc — state stays exactly as it was
        (KeyModifiers::NONE, KeyCode::Char('n')) | (_, KeyCode::Esc) => {
            app.confirm = None;
            app.mode = Mode::Navigate;
        }
        _ => {}
    }
}

fn confirm_delete_task(app: &mut App, task_id: &str) {
    if app.store.delete_task(task_id).is_ok() {
        app.status_message = Some(format!("deleted task {}", task_id));
    }
    app.sync();
    // Deleting from the detail view routes back to the list
    if matches!(&app.view, View::Detail { task_id: tid } if tid == task_id) {
        app.back_to_list();
    }
}
