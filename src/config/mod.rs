//! Configuration for focal.
//!
//! Handles path resolution and user settings.

pub mod paths;
pub mod settings;

pub use paths::Paths;
pub use settings::{Config, GeneralConfig, TimerConfig};
