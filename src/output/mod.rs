//! Output formatting for focal.
//!
//! This module provides formatters for reports and category listings in
//! pretty (colored terminal) and JSON form.

mod json;
mod pretty;

pub use json::to_json;
pub use pretty::{format_categories_pretty, format_report_pretty, render_bar_chart};

use crate::cli::args::OutputFormat;
use crate::error::FocalError;
use crate::report::SessionReport;
use crate::timer::Category;

/// Format a session report based on output format.
///
/// # Errors
///
/// Returns `FocalError::Parse` if JSON serialization fails.
pub fn format_report(report: &SessionReport, format: OutputFormat) -> Result<String, FocalError> {
    match format {
        OutputFormat::Pretty => Ok(format_report_pretty(report)),
        OutputFormat::Json => to_json(report),
    }
}

/// Format the category list based on output format.
///
/// # Errors
///
/// Returns `FocalError::Parse` if JSON serialization fails.
pub fn format_categories(
    categories: &[Category],
    format: OutputFormat,
) -> Result<String, FocalError> {
    match format {
        OutputFormat::Pretty => Ok(format_categories_pretty(categories)),
        OutputFormat::Json => to_json(&categories),
    }
}
