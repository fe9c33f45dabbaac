//! Command implementations for focal.

use clap::CommandFactory;
use clap_complete::Shell;
use colored::Colorize;

use crate::cli::args::{Cli, OutputFormat, TimerArgs};
use crate::config::Config;
use crate::error::FocalError;
use crate::output::{format_categories, format_report};
use crate::report::SessionReport;
use crate::storage::{JsonStore, SessionRecorder};
use crate::timer::{parse_duration, Category, TimerSession};
use crate::tui;

/// Execute the timer command: run the interactive timer screen.
///
/// # Errors
///
/// Returns an error if storage cannot be opened, the duration argument is
/// invalid, or the terminal UI fails.
pub fn timer(config: &Config, args: &TimerArgs) -> Result<String, FocalError> {
    let store = JsonStore::open()?;
    let mut session = TimerSession::with_tuning(store, config.timer.tuning());

    if let Some(ref spec) = args.duration {
        let duration = parse_duration(spec)
            .ok_or_else(|| FocalError::Parse(format!("Invalid duration: {spec}")))?;
        session.set_duration(duration.num_seconds());
        if session.selected_duration() != duration.num_seconds() {
            return Err(FocalError::Parse(format!(
                "Duration out of range: {spec}"
            )));
        }
    }

    if let Some(ref cat) = args.category {
        session.set_category(Category::parse(cat));
    }

    tui::run(session)?;
    Ok(String::new())
}

/// Execute the report command.
///
/// # Errors
///
/// Returns an error if storage cannot be opened or formatting fails.
pub fn report(format: OutputFormat) -> Result<String, FocalError> {
    let store = JsonStore::open()?;
    let records = store.list_all().unwrap_or_default();
    let report = SessionReport::generate(&records);
    format_report(&report, format)
}

/// Execute the categories command.
///
/// # Errors
///
/// Returns an error if formatting fails.
pub fn categories(format: OutputFormat) -> Result<String, FocalError> {
    format_categories(&Category::ALL, format)
}

/// Execute the clear command: delete all recorded sessions.
///
/// # Errors
///
/// Returns an error if `--force` was not passed or storage fails.
pub fn clear(force: bool) -> Result<String, FocalError> {
    if !force {
        return Err(FocalError::Config(
            "This deletes all recorded sessions. Pass --force to confirm.".to_string(),
        ));
    }

    let mut store = JsonStore::open()?;
    store.clear_all()?;
    Ok("All recorded sessions deleted.".green().to_string())
}

/// Execute the completions command.
///
/// # Errors
///
/// This function currently cannot fail; the `Result` keeps the command
/// signatures uniform.
pub fn completions(shell: Shell) -> Result<String, FocalError> {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "focal", &mut std::io::stdout());
    Ok(String::new())
}
