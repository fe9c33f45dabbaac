//! The timer session state machine.
//!
//! Owns the countdown, press-and-hold duration adjustment, interruption
//! tracking, and finalization of a run into a [`SessionRecord`].
//!
//! The machine is event driven and single threaded: every operation runs to
//! completion, and timed behavior is modelled as owned deadline fields that a
//! caller advances by invoking [`TimerSession::poll`] with the current
//! instant. Deadlines are cancelled on every exit from the state that owns
//! them, so a stale tick can never fire.

use std::time::{Duration as StdDuration, Instant};

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::record::SessionRecord;
use crate::error::FocalError;
use crate::storage::SessionRecorder;

/// Countdown tick granularity.
const TICK: StdDuration = StdDuration::from_secs(1);

/// State of a timer session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Waiting to start; duration and category are adjustable
    Idle,
    /// Counting down
    Running,
    /// Countdown suspended
    Paused,
    /// Finalized; a record has been produced
    Finished,
}

/// Tuning parameters for the session state machine.
#[derive(Debug, Clone, Copy)]
pub struct Tuning {
    /// Initial and post-reset duration, in seconds.
    pub default_duration: i64,
    /// Smallest selectable duration, in seconds.
    pub min_duration: i64,
    /// Largest selectable duration, in seconds.
    pub max_duration: i64,
    /// Adjustment step, in seconds.
    pub step: i64,
    /// How long a press must be held before repeat mode engages.
    pub hold_delay: StdDuration,
    /// Interval between repeated adjustments while held.
    pub repeat_interval: StdDuration,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            default_duration: 25 * 60,
            min_duration: 60,
            max_duration: 600 * 60,
            step: 60,
            hold_delay: StdDuration::from_millis(500),
            repeat_interval: StdDuration::from_millis(80),
        }
    }
}

/// Press-and-hold adjustment state.
///
/// At most one delay or repeat is armed at a time; arming a new press
/// replaces whatever was pending.
#[derive(Debug, Clone, Copy)]
enum HoldState {
    /// No press in flight
    Idle,
    /// Pressed, waiting for the hold delay to elapse
    Pending { delta: i64, engage_at: Instant },
    /// Held past the delay; repeating until release
    Repeating { delta: i64, next_at: Instant },
}

/// A focus timer session.
///
/// One instance per run; [`TimerSession::reset`] returns it to a fresh idle
/// state. The recorder receives exactly one record per finalized run.
pub struct TimerSession<R: SessionRecorder> {
    recorder: R,
    tuning: Tuning,
    selected_duration: i64,
    remaining_seconds: i64,
    status: Status,
    distraction_count: u32,
    category: Category,
    start_seconds: Option<i64>,
    next_tick: Option<Instant>,
    hold: HoldState,
    summary: Option<SessionRecord>,
}

impl<R: SessionRecorder> TimerSession<R> {
    /// Create a session with default tuning.
    pub fn new(recorder: R) -> Self {
        Self::with_tuning(recorder, Tuning::default())
    }

    /// Create a session with explicit tuning.
    pub fn with_tuning(recorder: R, tuning: Tuning) -> Self {
        Self {
            recorder,
            tuning,
            selected_duration: tuning.default_duration,
            remaining_seconds: tuning.default_duration,
            status: Status::Idle,
            distraction_count: 0,
            category: Category::default(),
            start_seconds: None,
            next_tick: None,
            hold: HoldState::Idle,
            summary: None,
        }
    }

    /// Current state.
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Seconds left on the countdown.
    #[must_use]
    pub fn remaining_seconds(&self) -> i64 {
        self.remaining_seconds
    }

    /// Configured session duration in seconds.
    #[must_use]
    pub fn selected_duration(&self) -> i64 {
        self.selected_duration
    }

    /// Foreground-loss events so far this run.
    #[must_use]
    pub fn distraction_count(&self) -> u32 {
        self.distraction_count
    }

    /// Current category.
    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    /// The finished session's record, available until reset.
    #[must_use]
    pub fn summary(&self) -> Option<&SessionRecord> {
        self.summary.as_ref()
    }

    /// The tuning parameters in effect.
    #[must_use]
    pub fn tuning(&self) -> Tuning {
        self.tuning
    }

    /// Fraction of the selected duration that has elapsed (0.0 - 1.0).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        if self.selected_duration == 0 {
            return 0.0;
        }
        let elapsed = self.selected_duration - self.remaining_seconds;
        (elapsed as f64 / self.selected_duration as f64).clamp(0.0, 1.0)
    }

    /// Set the category. Accepted only while idle.
    pub fn set_category(&mut self, category: Category) {
        if self.status == Status::Idle {
            self.category = category;
        }
    }

    /// Set the starting duration directly. Accepted only while idle and
    /// within bounds; out-of-range values are ignored.
    pub fn set_duration(&mut self, seconds: i64) {
        if self.status != Status::Idle {
            return;
        }
        if seconds < self.tuning.min_duration || seconds > self.tuning.max_duration {
            return;
        }
        self.selected_duration = seconds;
        self.remaining_seconds = seconds;
    }

    /// Adjust the selected duration by `delta` seconds.
    ///
    /// Valid only while idle. A result outside the configured bounds is
    /// silently ignored. The remaining-seconds display mirrors the selected
    /// duration while idle.
    pub fn adjust_duration(&mut self, delta: i64) {
        if self.status != Status::Idle {
            return;
        }

        let next = self.selected_duration + delta;
        if next < self.tuning.min_duration || next > self.tuning.max_duration {
            return;
        }

        self.selected_duration = next;
        self.remaining_seconds = next;
    }

    /// Begin a press on an adjust control.
    ///
    /// Arms the hold-delay timer; a new press replaces any pending delay or
    /// active repeat. Valid only while idle.
    pub fn press_begin(&mut self, delta: i64, now: Instant) {
        if self.status != Status::Idle {
            return;
        }

        self.hold = HoldState::Pending {
            delta,
            engage_at: now + self.tuning.hold_delay,
        };
    }

    /// End the press on an adjust control.
    ///
    /// Released before the hold delay elapsed: exactly one single-step
    /// adjustment fires. Released while repeating: the repeat stops and no
    /// extra step fires. Idempotent when no press is in flight.
    pub fn press_end(&mut self, _now: Instant) {
        match self.hold {
            HoldState::Pending { delta, .. } => {
                self.hold = HoldState::Idle;
                self.adjust_duration(delta);
            }
            HoldState::Repeating { .. } => {
                self.hold = HoldState::Idle;
            }
            HoldState::Idle => {}
        }
    }

    /// Start the countdown. Valid only while idle.
    ///
    /// Records the current remaining seconds as the run's starting point and
    /// cancels any press-and-hold timers owned by the idle state.
    pub fn start(&mut self, now: Instant) {
        if self.status != Status::Idle {
            return;
        }

        self.hold = HoldState::Idle;
        self.start_seconds = Some(self.remaining_seconds);
        self.status = Status::Running;
        self.next_tick = Some(now + TICK);
    }

    /// Pause the countdown. Valid only while running.
    pub fn pause(&mut self) {
        if self.status != Status::Running {
            return;
        }

        self.next_tick = None;
        self.status = Status::Paused;
    }

    /// Resume a paused countdown.
    pub fn resume(&mut self, now: Instant) {
        if self.status != Status::Paused {
            return;
        }

        self.status = Status::Running;
        self.next_tick = Some(now + TICK);
    }

    /// Finish the session early. Valid while running or paused.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the finalized record could not be
    /// persisted; the session still transitions to finished.
    pub fn stop(&mut self) -> Result<(), FocalError> {
        if self.status != Status::Running && self.status != Status::Paused {
            return Ok(());
        }

        self.finalize(self.remaining_seconds)
    }

    /// Record a loss of foreground focus from the host environment.
    ///
    /// Pauses the countdown and counts one distraction, but only while
    /// running; in any other state this is a no-op.
    pub fn report_interruption(&mut self) {
        if self.status != Status::Running {
            return;
        }

        self.pause();
        self.distraction_count += 1;
    }

    /// Return to a fresh idle session. Valid in any state.
    ///
    /// Cancels every pending timer, discards in-progress counters and the
    /// finished summary, and restores the default duration and category.
    pub fn reset(&mut self) {
        self.next_tick = None;
        self.hold = HoldState::Idle;
        self.selected_duration = self.tuning.default_duration;
        self.remaining_seconds = self.tuning.default_duration;
        self.distraction_count = 0;
        self.category = Category::default();
        self.start_seconds = None;
        self.status = Status::Idle;
        self.summary = None;
    }

    /// Advance the machine to `now`, firing any due timers.
    ///
    /// Fires hold engagement and repeat steps while idle, and countdown ticks
    /// while running. Reaching zero finalizes the session automatically.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the countdown finished and the record could
    /// not be persisted.
    pub fn poll(&mut self, now: Instant) -> Result<(), FocalError> {
        loop {
            match self.hold {
                HoldState::Pending { delta, engage_at } if engage_at <= now => {
                    self.hold = HoldState::Repeating {
                        delta,
                        next_at: engage_at + self.tuning.repeat_interval,
                    };
                    self.adjust_duration(delta);
                }
                HoldState::Repeating { delta, next_at } if next_at <= now => {
                    self.hold = HoldState::Repeating {
                        delta,
                        next_at: next_at + self.tuning.repeat_interval,
                    };
                    self.adjust_duration(delta);
                }
                _ => break,
            }
        }

        while self.status == Status::Running {
            let Some(due) = self.next_tick else { break };
            if due > now {
                break;
            }

            self.remaining_seconds -= 1;
            if self.remaining_seconds <= 0 {
                self.remaining_seconds = 0;
                return self.finalize(0);
            }
            self.next_tick = Some(due + TICK);
        }

        Ok(())
    }

    /// Finalize the run into a record.
    ///
    /// Re-entrant calls while already finished are no-ops, which guarantees
    /// exactly one record per run even when a manual stop races the countdown
    /// reaching zero.
    fn finalize(&mut self, end_seconds: i64) -> Result<(), FocalError> {
        if self.status == Status::Finished {
            return Ok(());
        }

        self.next_tick = None;
        self.hold = HoldState::Idle;

        let start = self.start_seconds.unwrap_or(self.selected_duration);
        let actual_duration = (start - end_seconds).max(0);

        let record = SessionRecord::new(self.category, actual_duration, self.distraction_count);
        self.summary = Some(record.clone());
        self.status = Status::Finished;

        self.recorder.append(&record)
    }
}
