//! In-process store, used by tests and by hosts that persist elsewhere.

use crate::entry::Entry;
use crate::error::Result;
use crate::storage::traits::SnapshotStore;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Vec<Entry>,
    saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing snapshot.
    pub fn with_entries(entries: Vec<Entry>) -> Self {
        Self { entries, saves: 0 }
    }

    /// Number of times `save` has been called.
    pub fn save_count(&self) -> usize {
        self.saves
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> Result<Vec<Entry>> {
        Ok(self.entries.clone())
    }

    fn save(&mut self, entries: &[Entry]) -> Result<()> {
        self.entries = entries.to_vec();
        self.saves += 1;
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
