use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use regex::Regex;

use crate::model::task::Task;
use crate::ops::filter::{TaskListing, visible_tasks};
use crate::ops::form::TaskForm;
use crate::store::{Store, TodoState};
use crate::util::unicode;

use super::input;
use super::render;
use super::theme::Theme;

/// Which view is currently displayed. The analog of the two routes:
/// `/` is the list, `/task/{id}` is the detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    List,
    Detail { task_id: String },
}

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Search,
    Form,
    Confirm,
}

/// Outcome of resolving the detail route's id against a snapshot.
/// NotFound renders an explicit state with a path back to the list.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskLookup {
    Found(Task),
    NotFound,
}

/// A single-line text buffer with a grapheme-aligned byte cursor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldBuffer {
    pub text: String,
    pub cursor: usize,
}

impl FieldBuffer {
    pub fn prefilled(text: &str) -> Self {
        FieldBuffer {
            text: text.to_string(),
            cursor: text.len(),
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = unicode::prev_grapheme_boundary(&self.text, self.cursor) {
            self.text.replace_range(prev..self.cursor, "");
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if let Some(next) = unicode::next_grapheme_boundary(&self.text, self.cursor) {
            self.text.replace_range(self.cursor..next, "");
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = unicode::prev_grapheme_boundary(&self.text, self.cursor) {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = unicode::next_grapheme_boundary(&self.text, self.cursor) {
            self.cursor = next;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }
}

/// Which field the form cursor is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Description,
    Reporter,
}

/// Whether the form creates a new task or edits an existing one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormIntent {
    Create,
    Edit { task_id: String },
}

/// State of the create/edit dialog while it is open
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub intent: FormIntent,
    pub field: FormField,
    pub title: FieldBuffer,
    pub description: FieldBuffer,
    pub reporter: FieldBuffer,
}

impl FormState {
    pub fn create() -> Self {
        FormState {
            intent: FormIntent::Create,
            field: FormField::Title,
            title: FieldBuffer::default(),
            description: FieldBuffer::default(),
            reporter: FieldBuffer::default(),
        }
    }

    pub fn edit(task: &Task) -> Self {
        FormState {
            intent: FormIntent::Edit {
                task_id: task.id.clone(),
            },
            field: FormField::Title,
            title: FieldBuffer::prefilled(&task.title),
            description: FieldBuffer::prefilled(task.description.as_deref().unwrap_or("")),
            reporter: FieldBuffer::prefilled(&task.reporter),
        }
    }

    pub fn active_field_mut(&mut self) -> &mut FieldBuffer {
        match self.field {
            FormField::Title => &mut self.title,
            FormField::Description => &mut self.description,
            FormField::Reporter => &mut self.reporter,
        }
    }

    pub fn next_field(&mut self) {
        self.field = match self.field {
            FormField::Title => FormField::Description,
            FormField::Description => FormField::Reporter,
            FormField::Reporter => FormField::Title,
        };
    }

    pub fn prev_field(&mut self) {
        self.field = match self.field {
            FormField::Title => FormField::Reporter,
            FormField::Description => FormField::Title,
            FormField::Reporter => FormField::Description,
        };
    }

    /// The validation view of the buffers (see `ops::form`).
    pub fn as_form(&self) -> TaskForm {
        TaskForm {
            title: self.title.text.clone(),
            description: self.description.text.clone(),
            reporter: self.reporter.text.clone(),
        }
    }
}

/// Action pending a y/n confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    DeleteTask { task_id: String },
}

/// Main application state
pub struct App {
    pub store: Store,
    /// Last snapshot observed by the UI; refreshed in `sync`.
    pub snapshot: Arc<TodoState>,
    pub view: View,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    /// Cursor index into the derived (filtered + sorted) task list
    pub list_cursor: usize,
    /// Scroll offset (first visible row) of the list view
    pub list_scroll: usize,
    pub form: Option<FormState>,
    pub confirm: Option<ConfirmAction>,
    pub show_help: bool,
    pub help_scroll: usize,
    /// Transient one-line feedback, cleared on the next key press
    pub status_message: Option<String>,
}

impl App {
    pub fn new(store: Store) -> Self {
        let snapshot = store.state();
        App {
            store,
            snapshot,
            view: View::List,
            mode: Mode::Navigate,
            should_quit: false,
            theme: Theme::default(),
            list_cursor: 0,
            list_scroll: 0,
            form: None,
            confirm: None,
            show_help: false,
            help_scroll: 0,
            status_message: None,
        }
    }

    /// Pick up a new snapshot if the store published one since the last
    /// frame. Change is detected by reference, never by diffing.
    pub fn sync(&mut self) {
        let current = self.store.state();
        if !Arc::ptr_eq(&current, &self.snapshot) {
            self.snapshot = current;
            self.clamp_list_cursor();
        }
    }

    /// Derive the visible task list from the current snapshot.
    /// Recomputed per call; the listing holds no state.
    pub fn listing(&self) -> TaskListing {
        visible_tasks(&self.snapshot)
    }

    /// The task under the list cursor, if any.
    pub fn selected_task_id(&self) -> Option<String> {
        self.listing()
            .tasks
            .get(self.list_cursor)
            .map(|t| t.id.clone())
    }

    /// Resolve a detail-route id against the current snapshot.
    pub fn lookup(&self, task_id: &str) -> TaskLookup {
        match self.snapshot.tasks.get(task_id) {
            Some(task) => TaskLookup::Found(task.clone()),
            None => TaskLookup::NotFound,
        }
    }

    /// Regex for highlighting search matches in titles. The query is a
    /// literal substring, matched case-insensitively.
    pub fn active_search_re(&self) -> Option<Regex> {
        let query = self.snapshot.search_query.trim();
        if query.is_empty() {
            return None;
        }
        Regex::new(&format!("(?i){}", regex::escape(query))).ok()
    }

    pub fn open_detail(&mut self, task_id: String) {
        self.view = View::Detail { task_id };
        self.mode = Mode::Navigate;
    }

    pub fn back_to_list(&mut self) {
        self.view = View::List;
        self.mode = Mode::Navigate;
        self.clamp_list_cursor();
    }

    pub fn clamp_list_cursor(&mut self) {
        let count = self.listing().total_count;
        if count == 0 {
            self.list_cursor = 0;
        } else {
            self.list_cursor = self.list_cursor.min(count - 1);
        }
    }
}

/// Run the TUI application
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(Store::new());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        app.sync();
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
