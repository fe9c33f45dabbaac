//! Aggregate reporting over recorded sessions.
//!
//! Aggregation is a pure function over the full record list, recomputed per
//! request; nothing here caches or mutates.

use chrono::{DateTime, Duration, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::timer::category::Category;
use crate::timer::record::SessionRecord;

/// Minimum chart weight for a category whose share rounds to zero, so the
/// slice stays visible in a proportional chart.
const MIN_CHART_WEIGHT: f64 = 0.01;

/// Aggregate statistics over all recorded sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionReport {
    /// Focused seconds on the current calendar day
    pub today_seconds: i64,
    /// Focused seconds over all records
    pub all_time_seconds: i64,
    /// Distractions over all records
    pub total_distractions: i64,
    /// Focused minutes per day for the 7 calendar days ending today,
    /// oldest first
    pub last_seven_days: Vec<DailyTotal>,
    /// Share of focused time per represented category
    pub categories: Vec<CategoryShare>,
}

/// Focused time on one calendar day.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyTotal {
    /// The calendar day
    pub date: NaiveDate,
    /// Focused minutes on that day
    pub minutes: f64,
}

/// One category's share of all focused time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryShare {
    /// The category
    pub category: Category,
    /// Focused seconds attributed to the category
    pub seconds: i64,
    /// Percentage of the all-time total (0 when the total is 0)
    pub percentage: f64,
    /// Percentage floored at a minimum nonzero value for chart rendering
    pub chart_weight: f64,
}

impl SessionReport {
    /// Generate a report for the current local calendar day.
    #[must_use]
    pub fn generate(records: &[SessionRecord]) -> Self {
        Self::for_day(records, Local::now().date_naive())
    }

    /// Generate a report treating `today` as the current calendar day.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn for_day(records: &[SessionRecord], today: NaiveDate) -> Self {
        let today_seconds = records
            .iter()
            .filter(|r| local_day(r.created_at) == today)
            .map(|r| r.actual_duration)
            .sum();

        let all_time_seconds: i64 = records.iter().map(|r| r.actual_duration).sum();

        let total_distractions = records
            .iter()
            .map(|r| i64::from(r.distraction_count))
            .sum();

        // Exactly 7 points, zero-filled, oldest first
        let last_seven_days = (0..7)
            .map(|i| {
                let date = today - Duration::days(6 - i);
                let seconds: i64 = records
                    .iter()
                    .filter(|r| local_day(r.created_at) == date)
                    .map(|r| r.actual_duration)
                    .sum();
                DailyTotal {
                    date,
                    minutes: seconds as f64 / 60.0,
                }
            })
            .collect();

        let mut by_category: HashMap<Category, i64> = HashMap::new();
        for record in records {
            *by_category.entry(record.category).or_insert(0) += record.actual_duration;
        }

        let categories = Category::ALL
            .iter()
            .filter_map(|cat| by_category.get(cat).map(|&seconds| (*cat, seconds)))
            .map(|(category, seconds)| {
                let percentage = if all_time_seconds == 0 {
                    0.0
                } else {
                    seconds as f64 / all_time_seconds as f64 * 100.0
                };
                CategoryShare {
                    category,
                    seconds,
                    percentage,
                    chart_weight: if percentage > 0.0 {
                        percentage
                    } else {
                        MIN_CHART_WEIGHT
                    },
                }
            })
            .collect();

        Self {
            today_seconds,
            all_time_seconds,
            total_distractions,
            last_seven_days,
            categories,
        }
    }
}

/// The local calendar day a record was created on.
fn local_day(ts: DateTime<Utc>) -> NaiveDate {
    ts.with_timezone(&Local).date_naive()
}
