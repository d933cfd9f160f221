use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, FormIntent, Mode};

pub(super) fn handle_form(app: &mut App, key: KeyEvent) {
    match key.code {
        // Cancel discards whatever was typed
        KeyCode::Esc => {
            app.form = None;
            app.mode = Mode::Navigate;
            return;
        }
        KeyCode::Enter => {
            submit(app);
            return;
        }
        _ => {}
    }

    let Some(form) = app.form.as_mut() else {
        app.mode = Mode::Navigate;
        return;
    };

    match (key.modifiers, key.code) {
        (_, KeyCode::Tab) | (_, KeyCode::Down) => form.next_field(),
        (_, KeyCode::BackTab) | (_, KeyCode::Up) => form.prev_field(),
        (_, KeyCode::Backspace) => form.active_field_mut().backspace(),
        (_, KeyCode::Delete) => form.active_field_mut().delete_forward(),
        (_, KeyCode::Left) => form.active_field_mut().move_left(),
        (_, KeyCode::Right) => form.active_field_mut().move_right(),
        (_, KeyCode::Home) => form.active_field_mut().move_home(),
        (_, KeyCode::End) => form.active_field_mut().move_end(),
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            form.active_field_mut().insert_char(c);
        }
        _ => {}
    }
}

/// Enter submits only when the form validates; otherwise it is a no-op,
/// the disabled-submit behavior.
fn submit(app: &mut App) {
    let Some(form_state) = app.form.clone() else {
        return;
    };
    let form = form_state.as_form();

    match &form_state.intent {
        FormIntent::Create => {
            let Some(input) = form.to_input() else {
                return;
            };
            let task = app.store.create_task(input);
            app.form = None;
            app.mode = Mode::Navigate;
            app.sync();
            // Land the cursor on the new task (newest first puts it on top)
            if let Some(pos) = app.listing().tasks.iter().position(|t| t.id == task.id) {
                app.list_cursor = pos;
            }
            app.status_message = Some(format!("created task {}", task.id));
        }
        FormIntent::Edit { task_id } => {
            let Some(changes) = form.to_changes() else {
                return;
            };
            let _ = app.store.update_task(task_id, changes);
            app.form = None;
            app.mode = Mode::Navigate;
            app.status_message = Some(format!("saved task {}", task_id));
        }
    }
}
