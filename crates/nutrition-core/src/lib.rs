//! # Nutrition Core
//!
//! Core library for `calories` - a meal and snack tracker with macro-nutrient
//! totals, goal progress and macro-consistency checks.
//!
//! This crate provides the ledger, the data model, the aggregation rules and
//! the storage abstraction, independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **entry**: Entry, draft, patch and filter types
//! - **ledger**: The insertion-ordered `NutritionLedger` and its mutations
//! - **nutrition**: Pure aggregation (totals, breakdowns, macro checks)
//! - **goal**: Daily goals and progress percentages
//! - **shared**: Lock-guarded ledger handle for concurrent hosts
//! - **storage**: `SnapshotStore` trait with JSON, SQLite and memory stores
//! - **session**: A ledger bound to a store for one session

pub mod entry;
pub mod error;
pub mod fs;
pub mod goal;
pub mod ledger;
pub mod nutrition;
pub mod session;
pub mod shared;
pub mod storage;

pub use entry::{parse_entry_date, Entry, EntryFilter, EntryPatch, MealType, NewEntry};
pub use error::{LedgerError, Result};
pub use goal::{goal_progress, Goal, GoalProgress, Nutrient, NutrientProgress};
pub use ledger::NutritionLedger;
pub use nutrition::{
    breakdown_by_date, breakdown_by_meal_type, daily_series, macro_consistency,
    macro_derived_calories, macro_split, statistics, totals, Breakdown, DailyPoint, MacroCheck,
    MacroSplit, Statistics, Totals,
};
pub use session::Session;
pub use shared::SharedLedger;
pub use storage::{JsonFileStore, MemoryStore, SnapshotStore, SqliteStore};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
