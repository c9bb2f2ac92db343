//! JSON snapshot file store.
//!
//! The file holds a JSON array of entry records in ledger order. Saves go
//! through a temp file and rename so a reader never sees a partial array.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::entry::Entry;
use crate::error::{LedgerError, Result};
use crate::storage::traits::SnapshotStore;

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Entry>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => {
                return Err(LedgerError::Storage(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    err
                )))
            }
        };
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }
        let entries: Vec<Entry> = serde_json::from_str(&contents).map_err(|e| {
            LedgerError::Validation(format!(
                "Invalid snapshot {}: {}",
                self.path.display(),
                e
            ))
        })?;
        info!(path = %self.path.display(), count = entries.len(), "loaded JSON snapshot");
        Ok(entries)
    }

    fn save(&mut self, entries: &[Entry]) -> Result<()> {
        let payload = serde_json::to_vec_pretty(entries)
            .map_err(|e| LedgerError::Storage(format!("JSON encode failed: {}", e)))?;
        crate::fs::write_atomic(&self.path, &payload).map_err(|e| {
            LedgerError::Storage(format!("Failed to write {}: {}", self.path.display(), e))
        })?;
        info!(path = %self.path.display(), count = entries.len(), "saved JSON snapshot");
        Ok(())
    }

    fn describe(&self) -> String {
        format!("json:{}", self.path.display())
    }
}
