//! Application state for the timer screen.

use std::time::Instant;

use crate::storage::SessionRecorder;
use crate::timer::{Category, Status, TimerSession};

/// Timer screen state.
///
/// Thin shell around the session state machine: it translates key and focus
/// events into operations and surfaces status messages.
pub struct App<R: SessionRecorder> {
    /// The timer session being driven.
    pub session: TimerSession<R>,
    /// Status message to display.
    pub status: Option<String>,
}

impl<R: SessionRecorder> App<R> {
    /// Create the app around an idle session.
    pub fn new(session: TimerSession<R>) -> Self {
        Self {
            session,
            status: Some("Press ? for help".to_string()),
        }
    }

    /// Advance the session's timers to the current instant.
    pub fn tick(&mut self) {
        if let Err(e) = self.session.poll(Instant::now()) {
            self.status = Some(format!("Session finished, but saving failed: {e}"));
        }
    }

    /// A single tap on an adjust control: one step.
    ///
    /// Modelled as an immediately released press, so the hold arbitration in
    /// the state machine applies.
    pub fn tap_adjust(&mut self, delta: i64) {
        let now = Instant::now();
        self.session.press_begin(delta, now);
        self.session.press_end(now);
    }

    /// The primary control: start, pause, or resume depending on state.
    pub fn primary_action(&mut self) {
        let now = Instant::now();
        match self.session.status() {
            Status::Idle => {
                self.session.start(now);
                self.status = Some("Session started".to_string());
            }
            Status::Running => {
                self.session.pause();
                self.status = Some("Paused".to_string());
            }
            Status::Paused => {
                self.session.resume(now);
                self.status = Some("Resumed".to_string());
            }
            Status::Finished => {}
        }
    }

    /// Finish the session early.
    pub fn finish(&mut self) {
        match self.session.stop() {
            Ok(()) => {
                if self.session.status() == Status::Finished {
                    self.status = Some("Session recorded".to_string());
                }
            }
            Err(e) => {
                self.status = Some(format!("Session finished, but saving failed: {e}"));
            }
        }
    }

    /// Reset to a fresh idle session.
    pub fn reset(&mut self) {
        self.session.reset();
        self.status = Some("Timer reset".to_string());
    }

    /// Select a category by its 1-based display index.
    pub fn select_category(&mut self, index: usize) {
        if let Some(cat) = Category::ALL.get(index.wrapping_sub(1)) {
            self.session.set_category(*cat);
        }
    }

    /// The host lost foreground focus.
    pub fn focus_lost(&mut self) {
        if self.session.status() == Status::Running {
            self.session.report_interruption();
            self.status = Some("Distraction: focus lost, timer paused".to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn test_app() -> App<MemoryStore> {
        App::new(TimerSession::new(MemoryStore::new()))
    }

    #[test]
    fn test_tap_adjust_steps_once() {
        let mut app = test_app();
        app.tap_adjust(60);
        assert_eq!(app.session.selected_duration(), 25 * 60 + 60);
    }

    #[test]
    fn test_primary_action_cycles_states() {
        let mut app = test_app();

        app.primary_action();
        assert_eq!(app.session.status(), Status::Running);

        app.primary_action();
        assert_eq!(app.session.status(), Status::Paused);

        app.primary_action();
        assert_eq!(app.session.status(), Status::Running);
    }

    #[test]
    fn test_focus_lost_only_counts_while_running() {
        let mut app = test_app();

        app.focus_lost();
        assert_eq!(app.session.distraction_count(), 0);

        app.primary_action();
        app.focus_lost();
        assert_eq!(app.session.status(), Status::Paused);
        assert_eq!(app.session.distraction_count(), 1);

        app.focus_lost();
        assert_eq!(app.session.distraction_count(), 1);
    }

    #[test]
    fn test_select_category() {
        let mut app = test_app();

        app.select_category(3);
        assert_eq!(app.session.category(), Category::Coding);

        // Out-of-range index is ignored
        app.select_category(9);
        assert_eq!(app.session.category(), Category::Coding);
    }

    #[test]
    fn test_finish_and_reset() {
        let mut app = test_app();

        app.primary_action();
        app.finish();
        assert_eq!(app.session.status(), Status::Finished);

        app.reset();
        assert_eq!(app.session.status(), Status::Idle);
        assert!(app.session.summary().is_none());
    }
}
