//! Focus timer core.
//!
//! Provides the session state machine and its supporting types:
//! - Countdown with pause/resume and interruption tracking
//! - Press-and-hold duration adjustment
//! - Finalization of runs into immutable session records

pub mod category;
pub mod duration;
pub mod record;
pub mod session;

pub use category::Category;
pub use duration::{format_duration, format_mmss, parse_duration};
pub use record::SessionRecord;
pub use session::{Status, TimerSession, Tuning};
