//! focal - A focus timer for your terminal
//!
//! This crate provides a countdown-based focus timer with category tracking,
//! interruption counting, and aggregate reporting over recorded sessions.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod report;
pub mod storage;
pub mod timer;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::FocalError;
pub use timer::{Category, SessionRecord, TimerSession};
