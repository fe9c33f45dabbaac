//! In-memory session storage (useful for testing).

use super::SessionRecorder;
use crate::error::FocalError;
use crate::timer::record::SessionRecord;

/// Session storage that keeps records in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Vec<SessionRecord>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl SessionRecorder for MemoryStore {
    fn append(&mut self, record: &SessionRecord) -> Result<(), FocalError> {
        self.records.push(record.clone());
        Ok(())
    }

    fn list_all(&self) -> Result<Vec<SessionRecord>, FocalError> {
        Ok(self.records.clone())
    }

    fn clear_all(&mut self) -> Result<(), FocalError> {
        self.records.clear();
        Ok(())
    }
}
