//! Terminal User Interface (TUI) for taskline.
//!
//! A quick-entry screen: type a task in plain language, watch the date,
//! time and priority get picked out as you type, press Enter to save.
//! Built with ratatui and crossterm.

mod app;
mod event;
mod ui;

pub use app::App;

use std::io;
use std::time::Instant;

use chrono::Local;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::config::Config;
use crate::error::TasklineError;
use crate::tasks::TaskStore;

/// Run the TUI application.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run(store: &dyn TaskStore, config: &Config) -> Result<(), TasklineError> {
    let mut app = App::new(store, config, Local::now().naive_local())?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

/// Run the main application loop.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App<'_>) -> Result<(), TasklineError> {
    loop {
        let now = Local::now().naive_local();
        app.tick(Instant::now(), now);

        terminal.draw(|frame| ui::render(frame, app, now.date()))?;

        if let Some(action) = event::handle_events(app)? {
            let now = Local::now().naive_local();
            match action {
                event::Action::Quit => app.should_quit = true,
                event::Action::Submit => app.submit(now)?,
                event::Action::Complete => app.complete_selected(now)?,
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
