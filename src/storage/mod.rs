//! Session record storage.
//!
//! The timer hands finalized records to a [`SessionRecorder`]; the default
//! implementation keeps a flat JSON list on disk.

pub mod json_store;
pub mod memory;

pub use json_store::JsonStore;
pub use memory::MemoryStore;

use crate::error::FocalError;
use crate::timer::record::SessionRecord;

/// Durable storage for finalized session records.
///
/// `append` must preserve all previously stored records; ordering is not
/// semantically significant, reporting re-derives it from timestamps.
#[cfg_attr(test, mockall::automock)]
pub trait SessionRecorder {
    /// Durably add one record to the end of the stored list.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the record could not be persisted.
    fn append(&mut self, record: &SessionRecord) -> Result<(), FocalError>;

    /// Return all stored records.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the list could not be read.
    fn list_all(&self) -> Result<Vec<SessionRecord>, FocalError>;

    /// Remove all stored records.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the list could not be cleared.
    fn clear_all(&mut self) -> Result<(), FocalError>;
}
