//! Flat-file JSON session storage.
//!
//! Records are kept as a single JSON array in `~/.focal/sessions.json`.
//! Reads degrade gracefully: a missing or unreadable file yields an empty
//! list so a storage problem never takes the timer down.

use std::path::PathBuf;

use colored::Colorize;

use super::SessionRecorder;
use crate::config::Paths;
use crate::error::FocalError;
use crate::timer::record::SessionRecord;

/// Session storage backed by a JSON file.
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Open the store at the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be resolved or created.
    pub fn open() -> Result<Self, FocalError> {
        let paths = Paths::new()?;
        paths.ensure_dirs()?;
        Ok(Self::at(paths.sessions))
    }

    /// Open the store at a specific path (useful for testing).
    #[must_use]
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read the stored list, degrading to empty on any failure.
    fn load(&self) -> Vec<SessionRecord> {
        if !self.path.exists() {
            return Vec::new();
        }

        let contents = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!(
                    "{}: failed to read {}: {e}",
                    "warning".yellow().bold(),
                    self.path.display()
                );
                return Vec::new();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(records) => records,
            Err(e) => {
                eprintln!(
                    "{}: failed to parse {}: {e}",
                    "warning".yellow().bold(),
                    self.path.display()
                );
                Vec::new()
            }
        }
    }

    fn write(&self, records: &[SessionRecord]) -> Result<(), FocalError> {
        let contents = serde_json::to_string(records)
            .map_err(|e| FocalError::Storage(format!("Failed to serialize sessions: {e}")))?;

        std::fs::write(&self.path, contents).map_err(|e| {
            FocalError::Storage(format!("Failed to write {}: {e}", self.path.display()))
        })
    }
}

impl SessionRecorder for JsonStore {
    fn append(&mut self, record: &SessionRecord) -> Result<(), FocalError> {
        let mut records = self.load();
        records.push(record.clone());
        self.write(&records)
    }

    fn list_all(&self) -> Result<Vec<SessionRecord>, FocalError> {
        Ok(self.load())
    }

    fn clear_all(&mut self) -> Result<(), FocalError> {
        if !self.path.exists() {
            return Ok(());
        }

        std::fs::remove_file(&self.path).map_err(|e| {
            FocalError::Storage(format!("Failed to remove {}: {e}", self.path.display()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::Category;
    use tempfile::TempDir;

    fn test_store(dir: &TempDir) -> JsonStore {
        JsonStore::at(dir.path().join("sessions.json"))
    }

    #[test]
    fn test_list_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);

        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_append_and_list() {
        let dir = TempDir::new().unwrap();
        let mut store = test_store(&dir);

        let first = SessionRecord::new(Category::Coding, 1500, 1);
        let second = SessionRecord::new(Category::Study, 600, 0);
        store.append(&first).unwrap();
        store.append(&second).unwrap();

        let records = store.list_all().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], first);
        assert_eq!(records[1], second);
    }

    #[test]
    fn test_append_preserves_existing_records() {
        let dir = TempDir::new().unwrap();
        let mut store = test_store(&dir);

        for i in 0..5 {
            store
                .append(&SessionRecord::new(Category::General, i * 60, 0))
                .unwrap();
        }

        // A fresh handle over the same file sees everything
        let reopened = test_store(&dir);
        assert_eq!(reopened.list_all().unwrap().len(), 5);
    }

    #[test]
    fn test_corrupt_file_degrades_to_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sessions.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = JsonStore::at(path);
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_clear_all() {
        let dir = TempDir::new().unwrap();
        let mut store = test_store(&dir);

        store
            .append(&SessionRecord::new(Category::Other, 120, 0))
            .unwrap();
        store.clear_all().unwrap();

        assert!(store.list_all().unwrap().is_empty());

        // Clearing an already-empty store is fine
        store.clear_all().unwrap();
    }
}
