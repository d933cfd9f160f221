//! Key-by-key UI flows: the same handlers the event loop drives, fed
//! synthetic key events against a seeded app.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;
use supertodo::store::Store;
use supertodo::tui::app::{App, Mode, View};
use supertodo::tui::input::handle_key;

fn press(app: &mut App, code: KeyCode) {
    // The event loop syncs before every key lands
    app.sync();
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn seeded() -> App {
    App::new(Store::new())
}

#[test]
fn create_a_task_through_the_form() {
    let mut app = seeded();

    press(&mut app, KeyCode::Char('c'));
    assert_eq!(app.mode, Mode::Form);

    type_text(&mut app, "Write the changelog");
    press(&mut app, KeyCode::Tab); // description, left empty
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "Riley");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.mode, Mode::Navigate);
    assert!(app.form.is_none());

    app.sync();
    let task = app.store.get_task_by_id("4").unwrap();
    assert_eq!(task.title, "Write the changelog");
    assert_eq!(task.reporter, "Riley");
    assert_eq!(task.description, None);
    assert!(!task.completed);

    // Newest first: the cursor lands on the new task at the top
    assert_eq!(app.list_cursor, 0);
    assert_eq!(app.selected_task_id(), Some("4".to_string()));
    assert_eq!(app.status_message, Some("created task 4".to_string()));
}

#[test]
fn a_blank_title_keeps_the_submit_disabled() {
    let mut app = seeded();

    press(&mut app, KeyCode::Char('c'));
    type_text(&mut app, "   ");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "Riley");
    press(&mut app, KeyCode::Enter);

    // Submission refused: still in the form, nothing created
    assert_eq!(app.mode, Mode::Form);
    assert!(app.form.is_some());
    app.sync();
    assert_eq!(app.snapshot.tasks.len(), 3);
}

#[test]
fn cancelling_the_form_discards_input() {
    let mut app = seeded();

    press(&mut app, KeyCode::Char('c'));
    type_text(&mut app, "Half-typed");
    press(&mut app, KeyCode::Esc);

    assert_eq!(app.mode, Mode::Navigate);
    assert!(app.form.is_none());
    app.sync();
    assert_eq!(app.snapshot.tasks.len(), 3);

    // Reopening starts from a clean slate
    press(&mut app, KeyCode::Char('c'));
    assert_eq!(app.form.as_ref().unwrap().title.text, "");
}

#[test]
fn search_filters_live_and_esc_clears() {
    let mut app = seeded();

    press(&mut app, KeyCode::Char('/'));
    assert_eq!(app.mode, Mode::Search);
    type_text(&mut app, "the");

    app.sync();
    assert_eq!(app.snapshot.search_query, "the");
    assert_eq!(app.listing().total_count, 2);

    // Enter keeps the filter active
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.mode, Mode::Navigate);
    app.sync();
    assert_eq!(app.snapshot.search_query, "the");

    // Esc in the list drops it
    press(&mut app, KeyCode::Esc);
    app.sync();
    assert_eq!(app.snapshot.search_query, "");
    assert_eq!(app.listing().total_count, 3);
}

#[test]
fn backspace_narrows_the_query() {
    let mut app = seeded();

    press(&mut app, KeyCode::Char('/'));
    type_text(&mut app, "thex");
    app.sync();
    assert_eq!(app.listing().total_count, 0);

    press(&mut app, KeyCode::Backspace);
    app.sync();
    assert_eq!(app.snapshot.search_query, "the");
    assert_eq!(app.listing().total_count, 2);
}

#[test]
fn declining_the_delete_prompt_changes_nothing() {
    let mut app = seeded();

    press(&mut app, KeyCode::Char('d'));
    assert_eq!(app.mode, Mode::Confirm);
    press(&mut app, KeyCode::Char('n'));

    assert_eq!(app.mode, Mode::Navigate);
    app.sync();
    assert_eq!(app.snapshot.tasks.len(), 3);
    assert!(app.store.get_task_by_id("3").is_some());
}

#[test]
fn confirming_the_delete_prompt_removes_the_task() {
    let mut app = seeded();

    // Cursor starts on the newest task, seed 3
    assert_eq!(app.selected_task_id(), Some("3".to_string()));
    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Char('y'));

    app.sync();
    assert_eq!(app.snapshot.tasks.len(), 2);
    assert!(app.store.get_task_by_id("3").is_none());
    assert_eq!(app.status_message, Some("deleted task 3".to_string()));
}

#[test]
fn toggling_from_the_list_flips_the_selected_task() {
    let mut app = seeded();

    press(&mut app, KeyCode::Char('x'));
    app.sync();
    assert!(app.store.get_task_by_id("3").unwrap().completed);

    press(&mut app, KeyCode::Char(' '));
    app.sync();
    assert!(!app.store.get_task_by_id("3").unwrap().completed);
}

#[test]
fn the_detail_route_opens_edits_and_returns() {
    let mut app = seeded();

    press(&mut app, KeyCode::Enter);
    assert_eq!(
        app.view,
        View::Detail {
            task_id: "3".to_string()
        }
    );

    // Edit: append to the prefilled title
    press(&mut app, KeyCode::Char('e'));
    assert_eq!(app.mode, Mode::Form);
    type_text(&mut app, " again");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.mode, Mode::Navigate);
    app.sync();
    let task = app.store.get_task_by_id("3").unwrap();
    assert_eq!(task.title, "Test the application again");

    // Esc routes back to the list
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.view, View::List);
}

#[test]
fn deleting_from_the_detail_view_routes_back_to_the_list() {
    let mut app = seeded();

    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char('d'));
    assert_eq!(app.mode, Mode::Confirm);
    press(&mut app, KeyCode::Char('y'));

    assert_eq!(app.view, View::List);
    app.sync();
    assert!(app.store.get_task_by_id("3").is_none());
}

#[test]
fn a_dead_detail_route_only_offers_the_way_back() {
    let mut app = seeded();
    app.view = View::Detail {
        task_id: "99".to_string(),
    };

    // Mutating keys are no-ops against a missing task
    press(&mut app, KeyCode::Char('e'));
    assert_eq!(app.mode, Mode::Navigate);
    press(&mut app, KeyCode::Char('d'));
    assert_eq!(app.mode, Mode::Navigate);
    app.sync();
    assert_eq!(app.snapshot.tasks.len(), 3);

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.view, View::List);
}

#[test]
fn help_overlay_swallows_keys_until_dismissed() {
    let mut app = seeded();

    press(&mut app, KeyCode::Char('?'));
    assert!(app.show_help);

    // 'd' scrolls nothing and must not arm a delete
    press(&mut app, KeyCode::Char('d'));
    assert_eq!(app.mode, Mode::Navigate);
    assert!(app.confirm.is_none());

    press(&mut app, KeyCode::Esc);
    assert!(!app.show_help);
}

#[test]
fn quit_flag_is_set_from_either_view() {
    let mut app = seeded();
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);

    let mut app = seeded();
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);
}
