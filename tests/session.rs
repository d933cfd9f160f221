//! End-to-end store sessions: every flow a user can drive from the UI,
//! exercised directly against the store and the list derivation.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use pretty_assertions::assert_eq;
use supertodo::model::task::{TaskChanges, TaskInput};
use supertodo::ops::filter::visible_tasks;
use supertodo::ops::form::TaskForm;
use supertodo::store::Store;

fn input(title: &str, reporter: &str) -> TaskInput {
    TaskInput {
        title: title.to_string(),
        description: None,
        reporter: reporter.to_string(),
    }
}

#[test]
fn seed_queries_resolve_by_title_substring() {
    let mut store = Store::new();

    // "task" appears only in the second seed title
    store.set_search_query("task");
    let listing = visible_tasks(&store.state());
    assert_eq!(listing.total_count, 1);
    assert_eq!(listing.tasks[0].id, "2");

    // "the" matches seeds 1 and 3; newest first puts 3 ahead
    store.set_search_query("the");
    let listing = visible_tasks(&store.state());
    let ids: Vec<&str> = listing.tasks.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["3", "1"]);
    assert_eq!(listing.completed_count, 1);
}

#[test]
fn a_full_session_create_search_toggle_delete() {
    let mut store = Store::new();

    // Create through the form path, exactly as the dialog would
    let form = TaskForm {
        title: "  Ship the beta  ".to_string(),
        description: "   ".to_string(),
        reporter: " Morgan ".to_string(),
    };
    let created = store.create_task(form.to_input().unwrap());
    assert_eq!(created.title, "Ship the beta");
    assert_eq!(created.reporter, "Morgan");
    assert_eq!(created.description, None);
    assert!(!created.completed);
    assert_eq!(store.get_task_by_id(&created.id), Some(created.clone()));

    // The new task is newest, so it leads the unfiltered listing
    let listing = visible_tasks(&store.state());
    assert_eq!(listing.total_count, 4);
    assert_eq!(listing.tasks[0].id, created.id);

    // Narrow to it, flip it done, and check the filtered tally
    store.set_search_query("beta");
    store.toggle_task_completion(&created.id).unwrap();
    let listing = visible_tasks(&store.state());
    assert_eq!(listing.total_count, 1);
    assert_eq!(listing.completed_count, 1);

    // Delete it; the filtered view goes empty, the rest survives
    store.delete_task(&created.id).unwrap();
    assert_eq!(store.get_task_by_id(&created.id), None);
    assert_eq!(visible_tasks(&store.state()).total_count, 0);
    store.set_search_query("");
    assert_eq!(visible_tasks(&store.state()).total_count, 3);
}

#[test]
fn edits_flow_through_changes_and_bump_updated_at() {
    let mut store = Store::new();
    let before = store.get_task_by_id("1").unwrap();

    let form = TaskForm {
        title: "Set up the app".to_string(),
        description: String::new(),
        reporter: "Platform".to_string(),
    };
    store.update_task("1", form.to_changes().unwrap()).unwrap();

    let after = store.get_task_by_id("1").unwrap();
    assert_eq!(after.title, "Set up the app");
    assert_eq!(after.reporter, "Platform");
    assert_eq!(after.description, None);
    assert_eq!(after.id, before.id);
    assert_eq!(after.created_at, before.created_at);
    assert!(after.updated_at > before.updated_at);
    // Completion is untouched by a form edit
    assert_eq!(after.completed, before.completed);
}

#[test]
fn observers_see_a_session_as_it_happens() {
    let mut store = Store::new();
    let log: Rc<RefCell<Vec<(usize, String)>>> = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&log);
    let sub = store.subscribe(move |state| {
        sink.borrow_mut()
            .push((state.tasks.len(), state.search_query.clone()));
    });

    let task = store.create_task(input("One more thing", "Alex"));
    store.set_search_query("more");
    store.delete_task(&task.id).unwrap();

    assert_eq!(
        *log.borrow(),
        vec![
            (4, String::new()),
            (4, "more".to_string()),
            (3, "more".to_string()),
        ]
    );

    store.unsubscribe(sub);
    store.create_task(input("Unobserved", "Alex"));
    assert_eq!(log.borrow().len(), 3);
}

#[test]
fn snapshots_stay_stable_while_the_store_moves_on() {
    let mut store = Store::new();
    let old: Arc<_> = store.state();

    store.create_task(input("Newcomer", "Kit"));
    let new = store.state();

    assert!(!Arc::ptr_eq(&old, &new));
    // The old snapshot still answers queries about the old world
    assert_eq!(visible_tasks(&old).total_count, 3);
    assert_eq!(visible_tasks(&new).total_count, 4);
}

#[test]
fn mutations_on_unknown_ids_change_nothing() {
    let mut store = Store::new();
    let before = store.state();

    assert!(store.update_task("404", TaskChanges::default()).is_err());
    assert!(store.delete_task("404").is_err());
    assert!(store.toggle_task_completion("404").is_err());

    assert!(Arc::ptr_eq(&before, &store.state()));
}
