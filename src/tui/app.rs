//! Application state for the quick-entry screen.

use std::time::Instant;

use chrono::NaiveDateTime;
use tracing::{debug, info};

use crate::config::Config;
use crate::core::TaskFilter;
use crate::error::TasklineError;
use crate::features::nlp::{ParsedTask, Priority, TaskTextParser};
use crate::features::quick_entry::{Debouncer, TaskDraft};
use crate::tasks::{Task, TaskStore};

/// Application state.
pub struct App<'a> {
    store: &'a dyn TaskStore,
    parser: TaskTextParser,
    debouncer: Debouncer,
    default_priority: Priority,
    /// Text typed so far.
    pub input: String,
    /// The input as of the last parse; spans in `parsed` index into this.
    pub parsed_input: String,
    /// Result of the last parse.
    pub parsed: ParsedTask,
    /// Form state built from parses.
    pub draft: TaskDraft,
    /// Open tasks.
    pub tasks: Vec<Task>,
    /// Currently selected index.
    pub selected: usize,
    /// Status message to display.
    pub status: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl<'a> App<'a> {
    /// Create a new app instance.
    ///
    /// # Errors
    ///
    /// Returns an error if fetching tasks fails.
    pub fn new(
        store: &'a dyn TaskStore,
        config: &Config,
        now: NaiveDateTime,
    ) -> Result<Self, TasklineError> {
        let mut app = Self {
            store,
            parser: config.parser.parser(),
            debouncer: Debouncer::new(config.quick_entry.debounce()),
            default_priority: config.tasks.default_priority,
            input: String::new(),
            parsed_input: String::new(),
            parsed: ParsedTask::default(),
            draft: TaskDraft::new(),
            tasks: Vec::new(),
            selected: 0,
            status: None,
            should_quit: false,
        };
        app.refresh(now)?;
        Ok(app)
    }

    /// Reload open tasks.
    ///
    /// # Errors
    ///
    /// Returns an error if fetching tasks fails.
    pub fn refresh(&mut self, now: NaiveDateTime) -> Result<(), TasklineError> {
        self.tasks = self.store.list_tasks(&TaskFilter::default(), now.date())?;

        // Adjust selection if it's out of bounds
        if !self.tasks.is_empty() && self.selected >= self.tasks.len() {
            self.selected = self.tasks.len() - 1;
        }
        Ok(())
    }

    /// Whether a re-parse is waiting on the debouncer.
    #[must_use]
    pub const fn parse_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Append a typed character.
    pub fn insert_char(&mut self, c: char, at: Instant) {
        self.input.push(c);
        self.debouncer.touch(at);
    }

    /// Delete the last character.
    pub fn backspace(&mut self, at: Instant) {
        if self.input.pop().is_some() {
            self.debouncer.touch(at);
        }
    }

    /// Re-parse if the input has been quiet long enough.
    ///
    /// Returns whether a parse ran.
    pub fn tick(&mut self, at: Instant, now: NaiveDateTime) -> bool {
        if self.debouncer.fire(at) {
            self.reparse(now);
            true
        } else {
            false
        }
    }

    fn reparse(&mut self, now: NaiveDateTime) {
        self.parsed = self.parser.parse(&self.input, now);
        self.parsed_input.clone_from(&self.input);
        self.draft.apply_parsed(&self.parsed);
        debug!(spans = self.parsed.matches.len(), "re-parsed quick entry");
    }

    /// Create a task from the current input.
    ///
    /// A pending debounce is flushed first so the task reflects everything
    /// typed. An empty title is reported in the status bar, not as an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn submit(&mut self, now: NaiveDateTime) -> Result<(), TasklineError> {
        self.debouncer.cancel();
        self.reparse(now);

        let new_task = match self.draft.to_new_task(self.default_priority) {
            Ok(task) => task,
            Err(TasklineError::InvalidInput(msg)) => {
                self.status = Some(format!("Cannot create: {msg}"));
                return Ok(());
            },
            Err(e) => return Err(e),
        };

        let task = self.store.create_task(&new_task)?;
        info!(id = task.id, title = %task.title, "created task from quick entry");
        self.status = Some(format!("Created: {}", task.title));
        self.clear_input();
        self.refresh(now)
    }

    fn clear_input(&mut self) {
        self.input.clear();
        self.parsed_input.clear();
        self.parsed = ParsedTask::default();
        self.draft.clear();
        self.debouncer.cancel();
    }

    /// Get the currently selected task.
    #[must_use]
    pub fn selected_task(&self) -> Option<&Task> {
        self.tasks.get(self.selected)
    }

    /// Move selection up.
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Move selection down.
    pub fn select_next(&mut self) {
        if !self.tasks.is_empty() && self.selected < self.tasks.len() - 1 {
            self.selected += 1;
        }
    }

    /// Complete the selected task.
    ///
    /// # Errors
    ///
    /// Returns an error if the operation fails.
    pub fn complete_selected(&mut self, now: NaiveDateTime) -> Result<(), TasklineError> {
        if let Some(task) = self.selected_task() {
            let id = task.id;
            let title = task.title.clone();
            self.store.complete_task(id)?;
            self.status = Some(format!("Completed: {title}"));
            self.refresh(now)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Database;
    use chrono::NaiveDate;
    use std::time::Duration;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 4, 15)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    fn type_text(app: &mut App<'_>, text: &str, at: Instant) {
        for c in text.chars() {
            app.insert_char(c, at);
        }
    }

    #[test]
    fn test_parse_waits_for_debounce() {
        let db = Database::open_in_memory().unwrap();
        let mut app = App::new(&db, &Config::default(), now()).unwrap();
        let start = Instant::now();

        type_text(&mut app, "Call mom tomorrow", start);
        assert!(app.parse_pending());
        assert!(!app.tick(start + Duration::from_millis(100), now()));
        assert!(app.parsed.title.is_empty());

        assert!(app.tick(start + Duration::from_millis(500), now()));
        assert_eq!(app.parsed.title, "Call mom");
        assert_eq!(app.draft.due_date, NaiveDate::from_ymd_opt(2026, 4, 16));
        assert_eq!(app.parsed_input, "Call mom tomorrow");
    }

    #[test]
    fn test_typing_rearms_debounce() {
        let db = Database::open_in_memory().unwrap();
        let mut app = App::new(&db, &Config::default(), now()).unwrap();
        let start = Instant::now();

        type_text(&mut app, "Call", start);
        type_text(&mut app, " mom", start + Duration::from_millis(400));
        assert!(!app.tick(start + Duration::from_millis(600), now()));
        assert!(app.tick(start + Duration::from_millis(900), now()));
        assert_eq!(app.parsed.title, "Call mom");
    }

    #[test]
    fn test_submit_creates_task_and_clears() {
        let db = Database::open_in_memory().unwrap();
        let mut app = App::new(&db, &Config::default(), now()).unwrap();

        type_text(&mut app, "Pay rent friday urgent", Instant::now());
        app.submit(now()).unwrap();

        assert!(app.input.is_empty());
        assert!(!app.parse_pending());
        assert_eq!(app.tasks.len(), 1);
        assert_eq!(app.tasks[0].title, "Pay rent");
        assert_eq!(app.tasks[0].priority, Priority::High);
        assert_eq!(app.tasks[0].due_date, NaiveDate::from_ymd_opt(2026, 4, 17));
        assert_eq!(app.status.as_deref(), Some("Created: Pay rent"));
    }

    #[test]
    fn test_submit_empty_title_keeps_input() {
        let db = Database::open_in_memory().unwrap();
        let mut app = App::new(&db, &Config::default(), now()).unwrap();

        type_text(&mut app, "tomorrow", Instant::now());
        app.submit(now()).unwrap();

        assert_eq!(app.input, "tomorrow");
        assert!(app.tasks.is_empty());
        assert!(app.status.as_deref().unwrap_or_default().starts_with("Cannot create"));
    }

    #[test]
    fn test_complete_selected() {
        let db = Database::open_in_memory().unwrap();
        let mut app = App::new(&db, &Config::default(), now()).unwrap();

        for text in ["first", "second"] {
            type_text(&mut app, text, Instant::now());
            app.submit(now()).unwrap();
        }
        app.select_next();
        app.select_next();
        assert_eq!(app.selected, 1);

        app.complete_selected(now()).unwrap();
        assert_eq!(app.tasks.len(), 1);
        assert_eq!(app.tasks[0].title, "first");
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn test_backspace() {
        let db = Database::open_in_memory().unwrap();
        let mut app = App::new(&db, &Config::default(), now()).unwrap();
        let start = Instant::now();

        type_text(&mut app, "ab", start);
        app.backspace(start);
        assert_eq!(app.input, "a");
        app.backspace(start);
        app.backspace(start);
        assert!(app.input.is_empty());
    }
}
