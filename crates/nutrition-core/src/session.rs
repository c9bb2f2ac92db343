//! A ledger bound to a persistence collaborator for one session.

use tracing::info;
use uuid::Uuid;

use crate::entry::{Entry, EntryPatch, NewEntry};
use crate::error::Result;
use crate::ledger::NutritionLedger;
use crate::storage::SnapshotStore;

/// Owns a ledger and the store it was loaded from.
///
/// Every successful mutation hands the full entry list to the store.
/// A mutation that fails validation or lookup never reaches the store.
pub struct Session<S: SnapshotStore> {
    ledger: NutritionLedger,
    store: S,
}

impl<S: SnapshotStore> Session<S> {
    /// Load the store's snapshot into a fresh ledger.
    pub fn open(store: S) -> Result<Self> {
        let ledger = NutritionLedger::from_entries(store.load()?)?;
        info!(store = %store.describe(), entries = ledger.len(), "session opened");
        Ok(Self { ledger, store })
    }

    pub fn ledger(&self) -> &NutritionLedger {
        &self.ledger
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn add(&mut self, new_entry: NewEntry) -> Result<Entry> {
        let entry = self.ledger.add(new_entry)?;
        self.persist()?;
        Ok(entry)
    }

    pub fn update(&mut self, id: &Uuid, patch: &EntryPatch) -> Result<Entry> {
        let entry = self.ledger.update(id, patch)?;
        self.persist()?;
        Ok(entry)
    }

    pub fn delete(&mut self, id: &Uuid) -> Result<Entry> {
        let entry = self.ledger.delete(id)?;
        self.persist()?;
        Ok(entry)
    }

    /// Remove every entry and save the empty ledger once.
    pub fn clear(&mut self) -> Result<Vec<Entry>> {
        let removed = self.ledger.clear();
        self.persist()?;
        Ok(removed)
    }

    /// End the session, returning the store.
    pub fn close(self) -> S {
        self.store
    }

    fn persist(&mut self) -> Result<()> {
        self.store.save(self.ledger.entries())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::MealType;
    use crate::storage::MemoryStore;
    use chrono::NaiveDate;

    fn draft(name: &str) -> NewEntry {
        NewEntry::new(name, MealType::Dinner)
            .with_calories(400.0)
            .with_macros(30.0, 40.0, 10.0)
            .with_date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
    }

    #[test]
    fn test_each_mutation_is_persisted() {
        let mut session = Session::open(MemoryStore::new()).unwrap();
        let entry = session.add(draft("Curry")).unwrap();
        assert_eq!(session.store().save_count(), 1);
        assert_eq!(session.store().entries().len(), 1);

        session
            .update(&entry.id, &EntryPatch::new().food_name("Green curry"))
            .unwrap();
        assert_eq!(session.store().save_count(), 2);
        assert_eq!(session.store().entries()[0].food_name, "Green curry");

        session.delete(&entry.id).unwrap();
        let store = session.close();
        assert_eq!(store.save_count(), 3);
        assert!(store.entries().is_empty());
    }

    #[test]
    fn test_failed_mutation_is_not_persisted() {
        let mut session = Session::open(MemoryStore::new()).unwrap();
        assert!(session.add(draft("")).is_err());
        assert!(session.delete(&Uuid::new_v4()).is_err());
        assert_eq!(session.store().save_count(), 0);
    }

    #[test]
    fn test_clear_saves_once() {
        let mut session = Session::open(MemoryStore::new()).unwrap();
        session.add(draft("Curry")).unwrap();
        session.add(draft("Naan")).unwrap();
        assert_eq!(session.store().save_count(), 2);

        let removed = session.clear().unwrap();
        assert_eq!(removed.len(), 2);
        assert_eq!(session.store().save_count(), 3);
        assert!(session.store().entries().is_empty());
        assert!(session.ledger().is_empty());
    }

    #[test]
    fn test_open_restores_snapshot() {
        let mut first = Session::open(MemoryStore::new()).unwrap();
        let entry = first.add(draft("Curry")).unwrap();
        let store = first.close();

        let second = Session::open(store).unwrap();
        assert_eq!(second.ledger().get(&entry.id), Some(&entry));
    }
}
