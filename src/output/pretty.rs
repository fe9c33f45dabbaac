use chrono::Duration;
use colored::Colorize;

use crate::report::SessionReport;
use crate::timer::{format_duration, Category};

const FULL_BLOCK: char = '█';

/// Render a horizontal bar chart.
///
/// # Arguments
///
/// * `data` - Vec of (label, value) pairs
/// * `bar_width` - Width of the bar portion
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
#[must_use]
pub fn render_bar_chart(data: &[(String, f64)], bar_width: usize) -> String {
    if data.is_empty() {
        return String::new();
    }

    let max_value = data.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max).max(1.0);
    let label_width = data.iter().map(|(l, _)| l.len()).max().unwrap_or(0);

    let mut lines = Vec::new();
    for (label, value) in data {
        let bar_length = (value / max_value * bar_width as f64) as usize;
        let bar = FULL_BLOCK.to_string().repeat(bar_length);
        lines.push(format!(
            "  {label:label_width$} |{} {value:.1}",
            bar.green()
        ));
    }

    lines.join("\n")
}

/// Format a session report for terminal display.
#[must_use]
pub fn format_report_pretty(report: &SessionReport) -> String {
    let mut lines = Vec::new();

    lines.push("Focus Report".bold().to_string());
    lines.push("─".repeat(50));
    lines.push(format!(
        "  {}  {}",
        "Today:".dimmed(),
        format_duration(Duration::seconds(report.today_seconds))
    ));
    lines.push(format!(
        "  {}  {}",
        "All time:".dimmed(),
        format_duration(Duration::seconds(report.all_time_seconds))
    ));
    lines.push(format!(
        "  {}  {}",
        "Distractions:".dimmed(),
        report.total_distractions
    ));
    lines.push(String::new());

    lines.push("Last 7 Days (minutes)".bold().to_string());
    lines.push("─".repeat(50));
    let day_data: Vec<(String, f64)> = report
        .last_seven_days
        .iter()
        .map(|d| (d.date.format("%d/%m").to_string(), d.minutes))
        .collect();
    lines.push(render_bar_chart(&day_data, 30));
    lines.push(String::new());

    lines.push("Category Distribution".bold().to_string());
    lines.push("─".repeat(50));
    if report.categories.is_empty() {
        lines.push("  No sessions recorded yet".dimmed().to_string());
    } else {
        let cat_data: Vec<(String, f64)> = report
            .categories
            .iter()
            .map(|c| {
                (
                    format!("{} ({:.2}%)", c.category, c.percentage),
                    c.chart_weight,
                )
            })
            .collect();
        lines.push(render_bar_chart(&cat_data, 30));
    }

    lines.join("\n")
}

/// Format the category list for terminal display.
#[must_use]
pub fn format_categories_pretty(categories: &[Category]) -> String {
    let mut lines = vec![format!("Categories ({})", categories.len())];
    for (i, cat) in categories.iter().enumerate() {
        lines.push(format!("  {}. {}", i + 1, cat.display_name().cyan()));
    }
    lines.join("\n")
}
