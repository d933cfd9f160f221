use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

/// Search edits write straight through to the store on every keystroke,
/// so the list below the prompt filters live.
pub(super) fn handle_search(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Esc drops the filter entirely
        (_, KeyCode::Esc) => {
            app.store.set_search_query("");
            app.list_cursor = 0;
            app.mode = Mode::Navigate;
        }

        // Enter keeps the current filter active
        (_, KeyCode::Enter) => {
            app.mode = Mode::Navigate;
        }

        (_, KeyCode::Backspace) => {
            let mut query = app.store.state().search_query.clone();
            query.pop();
            app.store.set_search_query(query);
            app.list_cursor = 0;
        }

        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            let mut query = app.store.state().search_query.clone();
            query.push(c);
            app.store.set_search_query(query);
            app.list_cursor = 0;
        }

        _ => {}
    }
}
