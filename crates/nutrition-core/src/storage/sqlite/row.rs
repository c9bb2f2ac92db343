//! Meal row type for database queries.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::entry::{Entry, MealType, DATE_FORMAT};
use crate::error::{LedgerError, Result};

/// Raw row data from the meals table, before parsing into domain types.
#[derive(Debug)]
pub struct MealRow {
    pub id: String,
    pub food_name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    pub date: String,
    pub meal_type: String,
    pub timestamp: String,
}

impl MealRow {
    pub fn from_sql(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            food_name: row.get(1)?,
            calories: row.get(2)?,
            protein: row.get(3)?,
            carbs: row.get(4)?,
            fats: row.get(5)?,
            date: row.get(6)?,
            meal_type: row.get(7)?,
            timestamp: row.get(8)?,
        })
    }
}

impl TryFrom<MealRow> for Entry {
    type Error = LedgerError;

    fn try_from(row: MealRow) -> Result<Self> {
        let id = Uuid::parse_str(&row.id)
            .map_err(|e| LedgerError::Storage(format!("Invalid entry UUID: {}", e)))?;
        let date = NaiveDate::parse_from_str(&row.date, DATE_FORMAT)
            .map_err(|e| LedgerError::Storage(format!("Invalid date {}: {}", row.date, e)))?;
        let meal_type: MealType = row
            .meal_type
            .parse()
            .map_err(|e| LedgerError::Storage(format!("Invalid meal type: {}", e)))?;
        let timestamp = DateTime::parse_from_rfc3339(&row.timestamp)
            .map_err(|e| LedgerError::Storage(format!("Invalid timestamp: {}", e)))?
            .with_timezone(&Utc);

        Ok(Entry {
            id,
            food_name: row.food_name,
            calories: row.calories,
            protein: row.protein,
            carbs: row.carbs,
            fats: row.fats,
            date,
            meal_type,
            timestamp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> MealRow {
        MealRow {
            id: "7a2e3c0b-1234-4678-9abc-def012345678".to_string(),
            food_name: "Rice".to_string(),
            calories: 200.0,
            protein: 4.0,
            carbs: 44.0,
            fats: 0.5,
            date: "2024-03-02".to_string(),
            meal_type: "Dinner".to_string(),
            timestamp: "2024-03-02T18:30:00+00:00".to_string(),
        }
    }

    #[test]
    fn test_row_converts_to_entry() {
        let entry = Entry::try_from(row()).unwrap();
        assert_eq!(entry.meal_type, MealType::Dinner);
        assert_eq!(entry.date, NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
    }

    #[test]
    fn test_bad_row_is_storage_error() {
        let mut bad = row();
        bad.meal_type = "Brunch".to_string();
        let err = Entry::try_from(bad).unwrap_err();
        assert!(matches!(err, LedgerError::Storage(_)));
    }
}
