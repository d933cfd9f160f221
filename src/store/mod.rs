use std::sync::Arc;

use chrono::{DateTime, Local, TimeDelta, TimeZone};
use indexmap::IndexMap;

use crate::model::seed::seed_tasks;
use crate::model::task::{Task, TaskChanges, TaskInput};

/// Error type for store operations
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    #[error("task not found: {0}")]
    NotFound(String),
}

/// One immutable snapshot of everything the store owns.
///
/// Mutations never edit a snapshot in place: the store builds a fresh
/// `TodoState` and swaps the `Arc` wholesale, so any holder of a snapshot
/// can detect change with `Arc::ptr_eq` against a newer one.
#[derive(Debug, Clone)]
pub struct TodoState {
    /// All tasks in insertion order, keyed by id.
    pub tasks: IndexMap<String, Task>,
    /// Current search query, kept verbatim (trimming happens at derivation).
    pub search_query: String,
}

pub type SubscriberId = u64;

type Subscriber = Box<dyn FnMut(&Arc<TodoState>)>;

/// The authoritative holder of the task collection and search query.
///
/// All operations are synchronous and run on the caller's thread; each one
/// reads the current snapshot, computes the next one, and publishes it with
/// a single assignment before observers are told.
pub struct Store {
    state: Arc<TodoState>,
    next_task_number: u64,
    last_timestamp: DateTime<Local>,
    subscribers: Vec<(SubscriberId, Subscriber)>,
    next_subscriber_id: SubscriberId,
}

impl Store {
    /// A store initialized with the fixed seed tasks.
    pub fn new() -> Self {
        Self::with_tasks(seed_tasks())
    }

    /// A store initialized with an arbitrary task list (tests, mostly).
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        // New ids continue past the largest numeric id already present
        let next_task_number = tasks
            .iter()
            .filter_map(|t| t.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            + 1;
        let last_timestamp = tasks
            .iter()
            .map(|t| t.updated_at)
            .max()
            .unwrap_or_else(|| Local.timestamp_opt(0, 0).unwrap());

        let tasks: IndexMap<String, Task> =
            tasks.into_iter().map(|t| (t.id.clone(), t)).collect();

        Store {
            state: Arc::new(TodoState {
                tasks,
                search_query: String::new(),
            }),
            next_task_number,
            last_timestamp,
            subscribers: Vec::new(),
            next_subscriber_id: 0,
        }
    }

    /// Cheap handle to the current snapshot.
    pub fn state(&self) -> Arc<TodoState> {
        Arc::clone(&self.state)
    }

    /// Register an observer called with every new snapshot.
    pub fn subscribe(&mut self, f: impl FnMut(&Arc<TodoState>) + 'static) -> SubscriberId {
        let id = self.next_subscriber_id;
        self.next_subscriber_id += 1;
        self.subscribers.push((id, Box::new(f)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) {
        self.subscribers.retain(|(sid, _)| *sid != id);
    }

    /// Create a task from an already-validated input. Assigns a fresh id,
    /// stamps both timestamps, and appends in insertion order.
    pub fn create_task(&mut self, input: TaskInput) -> Task {
        let now = self.tick();
        let id = self.next_task_number.to_string();
        self.next_task_number += 1;

        let task = Task {
            id: id.clone(),
            title: input.title,
            description: input.description,
            reporter: input.reporter,
            created_at: now,
            updated_at: now,
            completed: false,
        };

        let mut tasks = self.state.tasks.clone();
        tasks.insert(id, task.clone());
        self.publish(tasks);
        task
    }

    /// Apply field changes to an existing task and refresh `updated_at`.
    /// Unknown ids leave the snapshot untouched (no publish, no notify).
    pub fn update_task(&mut self, id: &str, changes: TaskChanges) -> Result<(), TaskError> {
        let mut tasks = self.state.tasks.clone();
        let Some(task) = tasks.get_mut(id) else {
            return Err(TaskError::NotFound(id.to_string()));
        };

        if let Some(title) = changes.title {
            task.title = title;
        }
        if let Some(description) = changes.description {
            task.description = description;
        }
        if let Some(reporter) = changes.reporter {
            task.reporter = reporter;
        }
        if let Some(completed) = changes.completed {
            task.completed = completed;
        }
        task.updated_at = self.tick();

        self.publish(tasks);
        Ok(())
    }

    /// Remove a task. Unknown ids leave the snapshot untouched.
    pub fn delete_task(&mut self, id: &str) -> Result<(), TaskError> {
        let mut tasks = self.state.tasks.clone();
        if tasks.shift_remove(id).is_none() {
            return Err(TaskError::NotFound(id.to_string()));
        }
        self.publish(tasks);
        Ok(())
    }

    /// Flip `completed` and refresh `updated_at`.
    pub fn toggle_task_completion(&mut self, id: &str) -> Result<(), TaskError> {
        let mut tasks = self.state.tasks.clone();
        let Some(task) = tasks.get_mut(id) else {
            return Err(TaskError::NotFound(id.to_string()));
        };
        task.completed = !task.completed;
        task.updated_at = self.tick();

        self.publish(tasks);
        Ok(())
    }

    /// Replace the search query verbatim — no trimming at this level.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        let tasks = self.state.tasks.clone();
        self.publish_state(TodoState {
            tasks,
            search_query: query,
        });
    }

    pub fn get_task_by_id(&self, id: &str) -> Option<Task> {
        self.state.tasks.get(id).cloned()
    }

    fn publish(&mut self, tasks: IndexMap<String, Task>) {
        let search_query = self.state.search_query.clone();
        self.publish_state(TodoState {
            tasks,
            search_query,
        });
    }

    /// The single mutation entry point: every state change funnels through
    /// here, replacing the snapshot in one assignment before observers run.
    fn publish_state(&mut self, next: TodoState) {
        self.state = Arc::new(next);
        let snapshot = Arc::clone(&self.state);
        for (_, notify) in &mut self.subscribers {
            notify(&snapshot);
        }
    }

    /// Wall clock, forced strictly forward: two mutations in the same clock
    /// tick must still produce distinct `updated_at` values.
    fn tick(&mut self) -> DateTime<Local> {
        let now = Local::now();
        let stamp = if now > self.last_timestamp {
            now
        } else {
            self.last_timestamp + TimeDelta::microseconds(1)
        };
        self.last_timestamp = stamp;
        stamp
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
