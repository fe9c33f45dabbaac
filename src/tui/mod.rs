//! Terminal user interface for focal.
//!
//! Provides the interactive timer screen. Built with ratatui and crossterm.
//! Terminal focus loss is the host's foreground signal: losing focus while
//! the countdown runs pauses it and counts one distraction.

mod app;
mod event;
mod ui;

pub use app::App;

use std::io;

use crossterm::{
    event::{DisableFocusChange, EnableFocusChange},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::error::FocalError;
use crate::storage::JsonStore;
use crate::timer::TimerSession;

/// Run the interactive timer.
///
/// # Errors
///
/// Returns an error if the terminal cannot be initialized or drawing fails.
pub fn run(session: TimerSession<JsonStore>) -> Result<(), FocalError> {
    // Setup terminal
    enable_raw_mode().map_err(|e| FocalError::Io(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableFocusChange)
        .map_err(|e| FocalError::Io(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| FocalError::Io(format!("Failed to create terminal: {e}")))?;

    let mut app = App::new(session);
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableFocusChange
    )
    .ok();
    terminal.show_cursor().ok();

    result
}

/// Run the main application loop.
fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App<JsonStore>,
) -> Result<(), FocalError> {
    loop {
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| FocalError::Io(format!("Failed to draw: {e}")))?;

        if let Some(event::Action::Quit) = event::handle_events(app)? {
            break;
        }

        app.tick();
    }

    Ok(())
}
