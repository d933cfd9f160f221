use crate::model::task::{Task, TaskChanges, TaskInput};

/// Raw buffers behind the create/edit dialog. The buffers keep whatever the
/// user typed; trimming and normalization happen only on submit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub reporter: String,
}

impl TaskForm {
    /// Prefill from an existing task for the edit dialog.
    pub fn from_task(task: &Task) -> Self {
        TaskForm {
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            reporter: task.reporter.clone(),
        }
    }

    /// The submit gate: title and reporter must be non-blank after trimming.
    /// Description never blocks submission.
    pub fn is_valid(&self) -> bool {
        !self.title.trim().is_empty() && !self.reporter.trim().is_empty()
    }

    /// Build the creation payload, or `None` while the form is incomplete.
    pub fn to_input(&self) -> Option<TaskInput> {
        if !self.is_valid() {
            return None;
        }
        Some(TaskInput {
            title: self.title.trim().to_string(),
            description: normalize_description(&self.description),
            reporter: self.reporter.trim().to_string(),
        })
    }

    /// The same payload expressed as a field-change set for `update_task`.
    pub fn to_changes(&self) -> Option<TaskChanges> {
        let input = self.to_input()?;
        Some(TaskChanges {
            title: Some(input.title),
            description: Some(input.description),
            reporter: Some(input.reporter),
            completed: None,
        })
    }
}

/// A blank or whitespace-only description means "absent", not empty text.
fn normalize_description(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
