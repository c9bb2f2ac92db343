//! Thread-safe handle to a ledger held by a multi-caller host.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use uuid::Uuid;

use crate::entry::{Entry, EntryPatch, NewEntry};
use crate::error::{LedgerError, Result};
use crate::ledger::NutritionLedger;

/// Cloneable handle serializing writers and sharing readers.
///
/// Each mutation runs entirely under the write lock, so a reader never
/// sees a half-applied change.
#[derive(Debug, Clone, Default)]
pub struct SharedLedger {
    inner: Arc<RwLock<NutritionLedger>>,
}

impl SharedLedger {
    pub fn new(ledger: NutritionLedger) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ledger)),
        }
    }

    fn read_lock(&self) -> Result<RwLockReadGuard<'_, NutritionLedger>> {
        self.inner
            .read()
            .map_err(|_| LedgerError::Storage("Ledger lock poisoned".to_string()))
    }

    fn write_lock(&self) -> Result<RwLockWriteGuard<'_, NutritionLedger>> {
        self.inner
            .write()
            .map_err(|_| LedgerError::Storage("Ledger lock poisoned".to_string()))
    }

    pub fn add(&self, new_entry: NewEntry) -> Result<Entry> {
        self.write_lock()?.add(new_entry)
    }

    pub fn update(&self, id: &Uuid, patch: &EntryPatch) -> Result<Entry> {
        self.write_lock()?.update(id, patch)
    }

    pub fn delete(&self, id: &Uuid) -> Result<Entry> {
        self.write_lock()?.delete(id)
    }

    pub fn clear(&self) -> Result<Vec<Entry>> {
        Ok(self.write_lock()?.clear())
    }

    /// Run a query against a consistent view of the ledger.
    pub fn read<T>(&self, query: impl FnOnce(&NutritionLedger) -> T) -> Result<T> {
        let guard = self.read_lock()?;
        Ok(query(&guard))
    }

    /// Copy of the current entries, e.g. to hand to a store.
    pub fn snapshot(&self) -> Result<Vec<Entry>> {
        self.read(|ledger| ledger.entries().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::MealType;
    use crate::nutrition::totals;
    use chrono::NaiveDate;
    use std::thread;

    #[test]
    fn test_concurrent_adds_are_all_kept() {
        let shared = SharedLedger::default();
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for i in 0..25 {
                        let name = format!("item-{}-{}", worker, i);
                        shared
                            .add(
                                NewEntry::new(name, MealType::Snack)
                                    .with_calories(10.0)
                                    .with_date(date),
                            )
                            .unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let (count, calories) = shared
            .read(|ledger| {
                let t = totals(ledger.entries_on(date));
                (t.count, t.calories)
            })
            .unwrap();
        assert_eq!(count, 200);
        assert_eq!(calories, 2000.0);
    }

    #[test]
    fn test_readers_see_whole_entries_during_writes() {
        let shared = SharedLedger::default();
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

        let writers: Vec<_> = (0..4)
            .map(|worker| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for i in 0..50 {
                        let draft = NewEntry::new(format!("w{}-{}", worker, i), MealType::Lunch)
                            .with_calories(10.0)
                            .with_date(date);
                        shared.add(draft).unwrap();
                    }
                })
            })
            .collect();
        let readers: Vec<_> = (0..4)
            .map(|_| {
                let shared = shared.clone();
                thread::spawn(move || {
                    let mut observed = Vec::new();
                    for _ in 0..200 {
                        let t = shared.read(|ledger| totals(ledger.entries())).unwrap();
                        observed.push((t.count, t.calories));
                    }
                    observed
                })
            })
            .collect();

        for writer in writers {
            writer.join().unwrap();
        }
        for reader in readers {
            let observed = reader.join().unwrap();
            for window in observed.windows(2) {
                assert!(window[0].0 <= window[1].0);
            }
            for (count, calories) in observed {
                assert_eq!(count as f64 * 10.0, calories);
            }
        }
        assert_eq!(shared.read(|ledger| ledger.len()).unwrap(), 200);
    }

    #[test]
    fn test_errors_propagate_through_handle() {
        let shared = SharedLedger::default();
        let err = shared.delete(&Uuid::new_v4()).unwrap_err();
        assert!(err.is_not_found());
        assert!(shared.snapshot().unwrap().is_empty());
        assert!(shared.clear().unwrap().is_empty());
    }
}
