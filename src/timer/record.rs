//! Immutable session records.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::Category;

/// A finalized focus session.
///
/// Records are immutable once created and round-trip losslessly through
/// storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    /// Unique token; uniqueness is required, ordering is not
    pub id: String,
    /// Category the session was attributed to
    pub category: Category,
    /// Seconds actually spent running (excludes paused time)
    pub actual_duration: i64,
    /// Foreground-loss events while running
    pub distraction_count: u32,
    /// When the session was finalized
    pub created_at: DateTime<Utc>,
}

impl SessionRecord {
    /// Create a record for a just-finalized session.
    #[must_use]
    pub fn new(category: Category, actual_duration: i64, distraction_count: u32) -> Self {
        Self {
            id: next_id(),
            category,
            actual_duration,
            distraction_count,
            created_at: Utc::now(),
        }
    }
}

/// Generate a unique record id.
///
/// Millisecond timestamp plus a process-local counter, so ids stay unique
/// even when several sessions finalize within the same millisecond.
fn next_id() -> String {
    static SEQ: AtomicU64 = AtomicU64::new(0);
    let seq = SEQ.fetch_add(1, Ordering::Relaxed);
    format!("{}-{seq}", Utc::now().timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_new() {
        let record = SessionRecord::new(Category::Coding, 1500, 2);

        assert_eq!(record.category, Category::Coding);
        assert_eq!(record.actual_duration, 1500);
        assert_eq!(record.distraction_count, 2);
        assert!(!record.id.is_empty());
    }

    #[test]
    fn test_record_ids_unique() {
        let mut ids = std::collections::HashSet::new();
        for _ in 0..1000 {
            let record = SessionRecord::new(Category::General, 0, 0);
            assert!(ids.insert(record.id));
        }
    }

    #[test]
    fn test_record_serde_roundtrip() {
        let record = SessionRecord::new(Category::Reading, 300, 1);

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"actualDuration\":300"));
        assert!(json.contains("\"distractionCount\":1"));
        assert!(json.contains("\"category\":\"reading\""));

        let parsed: SessionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }
}
