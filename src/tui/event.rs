//! Event handling for the TUI.

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::TasklineError;
use crate::tui::app::App;

/// How long one poll waits for input before the loop ticks the debouncer.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Action to take after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Create a task from the input line.
    Submit,
    /// Complete the selected task.
    Complete,
}

/// Poll for one terminal event and handle it.
///
/// Returns an action to take, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events(app: &mut App<'_>) -> Result<Option<Action>, TasklineError> {
    if event::poll(POLL_INTERVAL)? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(handle_key(app, key, Instant::now()));
            }
        }
    }
    Ok(None)
}

/// Apply one key press to the app.
pub fn handle_key(app: &mut App<'_>, key: KeyEvent, at: Instant) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('d') => Some(Action::Complete),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc => return Some(Action::Quit),
        KeyCode::Enter => return Some(Action::Submit),
        KeyCode::Up => app.select_previous(),
        KeyCode::Down => app.select_next(),
        KeyCode::Backspace => app.backspace(at),
        KeyCode::Char(c) => {
            app.status = None;
            app.insert_char(c, at);
        },
        _ => {},
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::storage::Database;
    use chrono::NaiveDate;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_key_bindings() {
        let db = Database::open_in_memory().unwrap();
        let now = NaiveDate::from_ymd_opt(2026, 4, 15).unwrap().and_hms_opt(9, 0, 0).unwrap();
        let mut app = App::new(&db, &Config::default(), now).unwrap();
        let at = Instant::now();

        assert_eq!(handle_key(&mut app, key(KeyCode::Char('h')), at), None);
        assert_eq!(handle_key(&mut app, key(KeyCode::Char('i')), at), None);
        assert_eq!(app.input, "hi");
        assert!(app.parse_pending());

        assert_eq!(handle_key(&mut app, key(KeyCode::Backspace), at), None);
        assert_eq!(app.input, "h");

        assert_eq!(handle_key(&mut app, key(KeyCode::Enter), at), Some(Action::Submit));
        assert_eq!(handle_key(&mut app, key(KeyCode::Esc), at), Some(Action::Quit));
        assert_eq!(handle_key(&mut app, ctrl('c'), at), Some(Action::Quit));
        assert_eq!(handle_key(&mut app, ctrl('d'), at), Some(Action::Complete));
        assert_eq!(app.input, "h");
    }
}
