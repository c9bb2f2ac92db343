//! Snapshot store trait definition.
//!
//! The `SnapshotStore` trait lets a session persist its ledger to any
//! medium (JSON file, SQLite, memory) without the ledger knowing which.

use crate::entry::Entry;
use crate::error::Result;

/// Load/save interface for the persistence collaborator.
///
/// Implementations must ensure:
/// - `load` returns entries in the order they were last saved
/// - `save` replaces the previous snapshot as a whole
/// - a store that was never saved to loads as empty
pub trait SnapshotStore {
    /// Load the persisted entries.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Storage` if the medium cannot be read, or
    /// `LedgerError::Validation` if its contents cannot be decoded.
    fn load(&self) -> Result<Vec<Entry>>;

    /// Persist the full current list of entries.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Storage` if the medium cannot be written.
    fn save(&mut self, entries: &[Entry]) -> Result<()>;

    /// Short human-readable description, e.g. the file path.
    fn describe(&self) -> String;
}

impl<S: SnapshotStore + ?Sized> SnapshotStore for Box<S> {
    fn load(&self) -> Result<Vec<Entry>> {
        (**self).load()
    }

    fn save(&mut self, entries: &[Entry]) -> Result<()> {
        (**self).save(entries)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
