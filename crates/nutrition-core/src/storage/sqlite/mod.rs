//! SQLite snapshot store.
//!
//! Entries live in a single `meals` table. The `position` column keeps
//! ledger order; every save rewrites the table inside one transaction.

mod row;

use std::fs;
use std::path::{Path, PathBuf};

use rusqlite::{params, Connection};
use tracing::info;

use crate::entry::{Entry, DATE_FORMAT};
use crate::error::{LedgerError, Result};
use crate::storage::traits::SnapshotStore;

use row::MealRow;

const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS meals (
        position INTEGER PRIMARY KEY,
        id TEXT NOT NULL UNIQUE,
        food_name TEXT NOT NULL,
        calories REAL NOT NULL,
        protein REAL NOT NULL,
        carbs REAL NOT NULL,
        fats REAL NOT NULL,
        date TEXT NOT NULL,
        meal_type TEXT NOT NULL,
        timestamp TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS meals_date ON meals(date);
"#;

pub struct SqliteStore {
    path: Option<PathBuf>,
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) a database file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    LedgerError::Storage(format!(
                        "Failed to create directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }
        let conn = Connection::open(path)?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            path: Some(path.to_path_buf()),
            conn,
        })
    }

    /// A private database that disappears when the store is dropped.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { path: None, conn })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl SnapshotStore for SqliteStore {
    fn load(&self) -> Result<Vec<Entry>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, food_name, calories, protein, carbs, fats, date, meal_type, timestamp
             FROM meals ORDER BY position",
        )?;
        let rows = stmt
            .query_map([], MealRow::from_sql)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        let entries = rows
            .into_iter()
            .map(Entry::try_from)
            .collect::<Result<Vec<_>>>()?;
        info!(store = %self.describe(), count = entries.len(), "loaded SQLite snapshot");
        Ok(entries)
    }

    fn save(&mut self, entries: &[Entry]) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM meals", [])?;
        {
            let mut insert = tx.prepare(
                "INSERT INTO meals
                 (position, id, food_name, calories, protein, carbs, fats, date, meal_type, timestamp)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            )?;
            for (position, entry) in entries.iter().enumerate() {
                insert.execute(params![
                    position as i64,
                    entry.id.to_string(),
                    entry.food_name,
                    entry.calories,
                    entry.protein,
                    entry.carbs,
                    entry.fats,
                    entry.date.format(DATE_FORMAT).to_string(),
                    entry.meal_type.as_str(),
                    entry.timestamp.to_rfc3339(),
                ])?;
            }
        }
        tx.commit()?;
        info!(store = %self.describe(), count = entries.len(), "saved SQLite snapshot");
        Ok(())
    }

    fn describe(&self) -> String {
        match self.path {
            Some(ref path) => format!("sqlite:{}", path.display()),
            None => "sqlite::memory:".to_string(),
        }
    }
}
