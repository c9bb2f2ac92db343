//! The in-memory nutrition ledger.
//!
//! A ledger owns an insertion-ordered list of entries. It is created empty
//! or from a snapshot handed over by a persistence collaborator, mutated
//! through `add`/`update`/`delete`, and dropped at the end of a session.

use std::collections::HashSet;

use chrono::{NaiveDate, Utc};
use tracing::debug;
use uuid::Uuid;

use crate::entry::{Entry, EntryFilter, EntryPatch, NewEntry};
use crate::error::{LedgerError, Result};

/// Insertion-ordered collection of entries with its mutation operations.
#[derive(Debug, Clone, Default)]
pub struct NutritionLedger {
    entries: Vec<Entry>,
    // Every id ever handed out or loaded, including deleted ones.
    issued: HashSet<Uuid>,
}

impl NutritionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from a persisted snapshot, keeping its order.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Validation` if an entry breaks a field
    /// invariant or two entries share an id.
    pub fn from_entries(entries: Vec<Entry>) -> Result<Self> {
        let mut issued = HashSet::with_capacity(entries.len());
        for entry in &entries {
            entry.validate().map_err(|err| match err {
                LedgerError::Validation(msg) => {
                    LedgerError::Validation(format!("entry {}: {}", entry.id, msg))
                }
                other => other,
            })?;
            if !issued.insert(entry.id) {
                return Err(LedgerError::Validation(format!(
                    "Duplicate entry id in snapshot: {}",
                    entry.id
                )));
            }
        }
        Ok(Self { entries, issued })
    }

    /// Validate and append a new entry.
    ///
    /// Assigns a fresh id and stamps the current instant.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Validation` if a numeric field is negative or
    /// not finite, the food name is empty, or the date is missing. Nothing
    /// is stored in that case.
    pub fn add(&mut self, new_entry: NewEntry) -> Result<Entry> {
        let date = new_entry.validate()?;
        let entry = Entry {
            id: self.fresh_id(),
            food_name: new_entry.food_name.trim().to_string(),
            calories: new_entry.calories,
            protein: new_entry.protein,
            carbs: new_entry.carbs,
            fats: new_entry.fats,
            date,
            meal_type: new_entry.meal_type,
            timestamp: Utc::now(),
        };
        self.issued.insert(entry.id);
        self.entries.push(entry.clone());
        debug!(entry_id = %entry.id, date = %entry.date, "added entry");
        Ok(entry)
    }

    /// Merge `patch` into the entry with `id`; `id` and `timestamp` are kept.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::NotFound` for an unknown id and
    /// `LedgerError::Validation` if the merged entry is invalid. The stored
    /// entry is untouched on error.
    pub fn update(&mut self, id: &Uuid, patch: &EntryPatch) -> Result<Entry> {
        let position = self.position(id)?;
        let candidate = patch.apply_to(&self.entries[position]);
        candidate.validate()?;
        self.entries[position] = candidate.clone();
        debug!(entry_id = %id, "updated entry");
        Ok(candidate)
    }

    /// Remove the entry with `id`, returning it.
    ///
    /// Deleting an id that is not present (including a second delete of the
    /// same id) is an error.
    pub fn delete(&mut self, id: &Uuid) -> Result<Entry> {
        let position = self.position(id)?;
        let removed = self.entries.remove(position);
        debug!(entry_id = %id, "deleted entry");
        Ok(removed)
    }

    /// Remove every entry, returning them in insertion order.
    ///
    /// Cleared ids stay issued and are never handed out again.
    pub fn clear(&mut self) -> Vec<Entry> {
        let removed = std::mem::take(&mut self.entries);
        debug!(count = removed.len(), "cleared ledger");
        removed
    }

    pub fn get(&self, id: &Uuid) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id == *id)
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Entries attributed to `date`, in insertion order.
    ///
    /// The iterator is lazy and can be cloned to restart it.
    pub fn entries_on(&self, date: NaiveDate) -> impl Iterator<Item = &Entry> + Clone + '_ {
        self.entries.iter().filter(move |entry| entry.date == date)
    }

    /// Entries dated within `start..=end`, in insertion order.
    ///
    /// An inverted range yields nothing.
    pub fn entries_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> impl Iterator<Item = &Entry> + Clone + '_ {
        self.entries
            .iter()
            .filter(move |entry| entry.date >= start && entry.date <= end)
    }

    /// Entries matching `filter`, in insertion order, truncated to its limit.
    pub fn filter(&self, filter: &EntryFilter) -> Vec<&Entry> {
        let matching = self.entries.iter().filter(|entry| filter.matches(entry));
        match filter.limit {
            Some(limit) => matching.take(limit).collect(),
            None => matching.collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }

    fn position(&self, id: &Uuid) -> Result<usize> {
        self.entries
            .iter()
            .position(|entry| entry.id == *id)
            .ok_or(LedgerError::NotFound(*id))
    }

    fn fresh_id(&self) -> Uuid {
        loop {
            let id = Uuid::new_v4();
            if !self.issued.contains(&id) {
                return id;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::MealType;
    use crate::nutrition::totals;

    fn day(value: &str) -> NaiveDate {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
    }

    fn draft(name: &str, calories: f64, date: &str) -> NewEntry {
        NewEntry::new(name, MealType::Lunch)
            .with_calories(calories)
            .with_macros(10.0, 20.0, 5.0)
            .with_date(day(date))
    }

    #[test]
    fn test_add_then_entries_on_returns_it() {
        let mut ledger = NutritionLedger::new();
        let stored = ledger.add(draft("Soup", 165.0, "2024-03-01")).unwrap();

        let on_day: Vec<&Entry> = ledger.entries_on(day("2024-03-01")).collect();
        assert_eq!(on_day.len(), 1);
        assert_eq!(on_day[0], &stored);
        assert_eq!(on_day[0].food_name, "Soup");
        assert_eq!(on_day[0].calories, 165.0);
        assert_eq!(on_day[0].meal_type, MealType::Lunch);
    }

    #[test]
    fn test_add_rejects_empty_food_name_without_storing() {
        let mut ledger = NutritionLedger::new();
        let err = ledger
            .add(
                NewEntry::new("", MealType::Snack)
                    .with_calories(100.0)
                    .with_macros(1.0, 1.0, 1.0)
                    .with_date(day("2024-03-01")),
            )
            .unwrap_err();
        assert!(err.is_validation());
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_add_trims_food_name() {
        let mut ledger = NutritionLedger::new();
        let stored = ledger.add(draft("  Soup  ", 165.0, "2024-03-01")).unwrap();
        assert_eq!(stored.food_name, "Soup");
    }

    #[test]
    fn test_update_changes_only_given_field() {
        let mut ledger = NutritionLedger::new();
        let stored = ledger.add(draft("Soup", 165.0, "2024-03-01")).unwrap();

        let updated = ledger
            .update(&stored.id, &EntryPatch::new().calories(500.0))
            .unwrap();
        assert_eq!(updated.calories, 500.0);
        assert_eq!(updated.id, stored.id);
        assert_eq!(updated.timestamp, stored.timestamp);
        assert_eq!(updated.food_name, stored.food_name);
        assert_eq!(updated.protein, stored.protein);
        assert_eq!(updated.date, stored.date);
        assert_eq!(ledger.get(&stored.id), Some(&updated));
    }

    #[test]
    fn test_clear_empties_and_keeps_ids_retired() {
        let mut ledger = NutritionLedger::new();
        let first = ledger.add(draft("Soup", 165.0, "2024-03-01")).unwrap();
        ledger.add(draft("Pasta", 650.0, "2024-03-02")).unwrap();

        let removed = ledger.clear();
        assert_eq!(removed.len(), 2);
        assert_eq!(removed[0], first);
        assert!(ledger.is_empty());
        assert!(ledger.clear().is_empty());
        assert!(ledger.delete(&first.id).unwrap_err().is_not_found());

        let next = ledger.add(draft("Toast", 80.0, "2024-03-03")).unwrap();
        assert_ne!(next.id, first.id);
    }

    #[test]
    fn test_failed_update_leaves_entry_untouched() {
        let mut ledger = NutritionLedger::new();
        let stored = ledger.add(draft("Soup", 165.0, "2024-03-01")).unwrap();

        let patch = EntryPatch::new().calories(900.0).fats(-2.0);
        let err = ledger.update(&stored.id, &patch).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(ledger.get(&stored.id), Some(&stored));
    }

    #[test]
    fn test_update_unknown_id_is_not_found() {
        let mut ledger = NutritionLedger::new();
        let err = ledger
            .update(&Uuid::new_v4(), &EntryPatch::new().calories(1.0))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_delete_twice_fails() {
        let mut ledger = NutritionLedger::new();
        let stored = ledger.add(draft("Soup", 165.0, "2024-03-01")).unwrap();

        ledger.delete(&stored.id).unwrap();
        let err = ledger.delete(&stored.id).unwrap_err();
        assert!(matches!(err, LedgerError::NotFound(id) if id == stored.id));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_deleted_ids_are_not_reissued() {
        let mut ledger = NutritionLedger::new();
        let first = ledger.add(draft("Soup", 165.0, "2024-03-01")).unwrap();
        ledger.delete(&first.id).unwrap();
        for _ in 0..20 {
            let next = ledger.add(draft("Bread", 80.0, "2024-03-01")).unwrap();
            assert_ne!(next.id, first.id);
        }
        assert!(ledger.issued.contains(&first.id));
    }

    #[test]
    fn test_range_is_inclusive_and_ordered() {
        let mut ledger = NutritionLedger::new();
        ledger.add(draft("A", 100.0, "2024-03-03")).unwrap();
        ledger.add(draft("B", 200.0, "2024-03-01")).unwrap();
        ledger.add(draft("C", 300.0, "2024-03-05")).unwrap();
        ledger.add(draft("D", 400.0, "2024-03-02")).unwrap();

        let names: Vec<&str> = ledger
            .entries_in_range(day("2024-03-01"), day("2024-03-03"))
            .map(|entry| entry.food_name.as_str())
            .collect();
        assert_eq!(names, vec!["A", "B", "D"]);

        let inverted = ledger.entries_in_range(day("2024-03-05"), day("2024-03-01"));
        assert_eq!(inverted.count(), 0);
    }

    #[test]
    fn test_entries_on_is_restartable() {
        let mut ledger = NutritionLedger::new();
        ledger.add(draft("A", 100.0, "2024-03-01")).unwrap();
        ledger.add(draft("B", 200.0, "2024-03-01")).unwrap();

        let day_entries = ledger.entries_on(day("2024-03-01"));
        let first_pass = totals(day_entries.clone());
        let second_pass = totals(day_entries);
        assert_eq!(first_pass, second_pass);
        assert_eq!(first_pass.calories, 300.0);
    }

    #[test]
    fn test_filter_with_limit() {
        let mut ledger = NutritionLedger::new();
        ledger.add(draft("Chicken soup", 100.0, "2024-03-01")).unwrap();
        ledger.add(draft("Tomato soup", 200.0, "2024-03-02")).unwrap();
        ledger.add(draft("Bread", 300.0, "2024-03-02")).unwrap();

        let soups = ledger.filter(&EntryFilter::new().search("soup"));
        assert_eq!(soups.len(), 2);
        let limited = ledger.filter(&EntryFilter::new().search("soup").limit(1));
        assert_eq!(limited.len(), 1);
        assert_eq!(limited[0].food_name, "Chicken soup");
    }

    #[test]
    fn test_from_entries_rejects_duplicates() {
        let mut ledger = NutritionLedger::new();
        let stored = ledger.add(draft("Soup", 165.0, "2024-03-01")).unwrap();
        let err = NutritionLedger::from_entries(vec![stored.clone(), stored]).unwrap_err();
        assert!(err.to_string().contains("Duplicate entry id"));
    }

    #[test]
    fn test_from_entries_rejects_invalid_entry() {
        let mut ledger = NutritionLedger::new();
        let mut stored = ledger.add(draft("Soup", 165.0, "2024-03-01")).unwrap();
        stored.calories = -1.0;
        let err = NutritionLedger::from_entries(vec![stored]).unwrap_err();
        assert!(err.is_validation());
    }
}
