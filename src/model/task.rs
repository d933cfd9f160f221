use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A single trackable work item.
///
/// `id` and `created_at` are fixed at creation; every other field can change
/// through the store, which refreshes `updated_at` on each mutation. The
/// invariant `updated_at >= created_at` holds for every task that exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Opaque unique identifier, assigned at creation.
    pub id: String,
    pub title: String,
    /// Absent is distinct from empty: blank descriptions are normalized away
    /// at the form boundary and never stored as `Some("")`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub reporter: String,
    pub created_at: DateTime<Local>,
    pub updated_at: DateTime<Local>,
    pub completed: bool,
}

impl Task {
    /// Status badge text shown in the detail view.
    pub fn status_label(&self) -> &'static str {
        if self.completed { "Completed" } else { "Open" }
    }
}

/// Validated payload for `Store::create_task`.
///
/// Produced by the form layer (see `ops::form`): title and reporter are
/// already trimmed and non-empty, description is `None` when blank. The
/// store itself does not re-validate.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskInput {
    pub title: String,
    pub description: Option<String>,
    pub reporter: String,
}

/// Field changes for `Store::update_task`. `None` leaves a field untouched;
/// `id` and `created_at` are not representable here and cannot change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskChanges {
    pub title: Option<String>,
    /// `Some(None)` clears the description, `Some(Some(_))` replaces it.
    pub description: Option<Option<String>>,
    pub reporter: Option<String>,
    pub completed: Option<bool>,
}
