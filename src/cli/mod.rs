//! Command-line interface for focal.

pub mod args;
pub mod commands;
