//! Event handling for the timer screen.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyModifiers};

use crate::error::FocalError;
use crate::storage::SessionRecorder;
use crate::tui::app::App;

/// Action to take after handling an event.
pub enum Action {
    /// Quit the application.
    Quit,
}

/// Handle terminal events.
///
/// Returns an action to take, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events<R: SessionRecorder>(
    app: &mut App<R>,
) -> Result<Option<Action>, FocalError> {
    // Poll with a small timeout so countdown ticks stay responsive
    if !event::poll(Duration::from_millis(100))
        .map_err(|e| FocalError::Io(format!("Event poll failed: {e}")))?
    {
        return Ok(None);
    }

    match event::read().map_err(|e| FocalError::Io(format!("Event read failed: {e}")))? {
        // The host's foreground signal
        Event::FocusLost => app.focus_lost(),

        Event::Key(key) => {
            // Handle Ctrl+C
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Ok(Some(Action::Quit));
            }

            let step = app.session.tuning().step;

            match key.code {
                // Quit
                KeyCode::Char('q') | KeyCode::Esc => return Ok(Some(Action::Quit)),

                // Duration adjustment (idle only, enforced by the session)
                KeyCode::Char('+' | '=') | KeyCode::Up => app.tap_adjust(step),
                KeyCode::Char('-' | '_') | KeyCode::Down => app.tap_adjust(-step),

                // Start / pause / resume
                KeyCode::Enter | KeyCode::Char(' ') => app.primary_action(),

                // Finish the session
                KeyCode::Char('f' | 'x') => app.finish(),

                // Reset
                KeyCode::Char('r') => app.reset(),

                // Category selection
                KeyCode::Char(c @ '1'..='6') => {
                    if let Some(index) = c.to_digit(10) {
                        app.select_category(index as usize);
                    }
                }

                // Help
                KeyCode::Char('?') => {
                    app.status = Some(
                        "1-6:category | +/-:duration | Enter:start/pause | f:finish | r:reset | q:quit"
                            .to_string(),
                    );
                }

                _ => {}
            }
        }

        _ => {}
    }

    Ok(None)
}
