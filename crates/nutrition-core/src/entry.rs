//! Entry data model: logged meals and snacks, drafts, patches and filters.
//!
//! The serialized shape matches the snapshot records exchanged with the
//! persistence collaborator:
//! `{id, foodName, calories, protein, carbs, fats, date, mealType, timestamp}`.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{LedgerError, Result};

/// Date format used for entry dates on the wire and on the command line.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Upper bound for any single nutrient amount (kcal or grams).
///
/// Keeps sums over any realistic ledger finite.
pub const MAX_AMOUNT: f64 = 100_000.0;

/// Meal category. Ordering follows the course of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    /// Every category, in display order.
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snack => "Snack",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealType {
    type Err = LedgerError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "breakfast" => Ok(MealType::Breakfast),
            "lunch" => Ok(MealType::Lunch),
            "dinner" => Ok(MealType::Dinner),
            "snack" => Ok(MealType::Snack),
            other => Err(LedgerError::Validation(format!(
                "Unknown meal type: {} (use breakfast, lunch, dinner or snack)",
                other
            ))),
        }
    }
}

/// A logged meal or snack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Unique identifier, assigned by the ledger
    pub id: Uuid,

    /// What was eaten
    pub food_name: String,

    /// Energy in kcal
    pub calories: f64,

    /// Grams of protein
    pub protein: f64,

    /// Grams of carbohydrate
    pub carbs: f64,

    /// Grams of fat
    pub fats: f64,

    /// Day the entry counts towards
    pub date: NaiveDate,

    pub meal_type: MealType,

    /// Creation instant, for display ordering only
    pub timestamp: DateTime<Utc>,
}

impl Entry {
    /// Check the field invariants of a stored entry.
    pub fn validate(&self) -> Result<()> {
        validate_fields(
            &self.food_name,
            self.calories,
            self.protein,
            self.carbs,
            self.fats,
        )
    }
}

/// An entry before the ledger has assigned its id and timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEntry {
    pub food_name: String,
    #[serde(default)]
    pub calories: f64,
    #[serde(default)]
    pub protein: f64,
    #[serde(default)]
    pub carbs: f64,
    #[serde(default)]
    pub fats: f64,
    /// Required; `None` is rejected by validation
    #[serde(default)]
    pub date: Option<NaiveDate>,
    pub meal_type: MealType,
}

impl NewEntry {
    pub fn new(food_name: impl Into<String>, meal_type: MealType) -> Self {
        Self {
            food_name: food_name.into(),
            calories: 0.0,
            protein: 0.0,
            carbs: 0.0,
            fats: 0.0,
            date: None,
            meal_type,
        }
    }

    pub fn with_calories(mut self, calories: f64) -> Self {
        self.calories = calories;
        self
    }

    pub fn with_macros(mut self, protein: f64, carbs: f64, fats: f64) -> Self {
        self.protein = protein;
        self.carbs = carbs;
        self.fats = fats;
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Validate the draft, returning its date on success.
    pub fn validate(&self) -> Result<NaiveDate> {
        validate_fields(
            &self.food_name,
            self.calories,
            self.protein,
            self.carbs,
            self.fats,
        )?;
        self.date
            .ok_or_else(|| LedgerError::Validation("Date is required".to_string()))
    }
}

/// Partial field replacement for an existing entry.
///
/// `id` and `timestamp` are never part of a patch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EntryPatch {
    pub food_name: Option<String>,
    pub calories: Option<f64>,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fats: Option<f64>,
    pub date: Option<NaiveDate>,
    pub meal_type: Option<MealType>,
}

impl EntryPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn food_name(mut self, food_name: impl Into<String>) -> Self {
        self.food_name = Some(food_name.into());
        self
    }

    pub fn calories(mut self, calories: f64) -> Self {
        self.calories = Some(calories);
        self
    }

    pub fn protein(mut self, protein: f64) -> Self {
        self.protein = Some(protein);
        self
    }

    pub fn carbs(mut self, carbs: f64) -> Self {
        self.carbs = Some(carbs);
        self
    }

    pub fn fats(mut self, fats: f64) -> Self {
        self.fats = Some(fats);
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn meal_type(mut self, meal_type: MealType) -> Self {
        self.meal_type = Some(meal_type);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Produce the entry that results from applying this patch.
    ///
    /// The result is not validated; the caller decides whether to keep it.
    pub fn apply_to(&self, entry: &Entry) -> Entry {
        let mut merged = entry.clone();
        if let Some(ref name) = self.food_name {
            merged.food_name = name.trim().to_string();
        }
        if let Some(value) = self.calories {
            merged.calories = value;
        }
        if let Some(value) = self.protein {
            merged.protein = value;
        }
        if let Some(value) = self.carbs {
            merged.carbs = value;
        }
        if let Some(value) = self.fats {
            merged.fats = value;
        }
        if let Some(value) = self.date {
            merged.date = value;
        }
        if let Some(value) = self.meal_type {
            merged.meal_type = value;
        }
        merged
    }
}

/// Filter for querying entries.
#[derive(Debug, Clone, Default)]
pub struct EntryFilter {
    /// Only entries of this meal type
    pub meal_type: Option<MealType>,

    /// Start date (inclusive)
    pub since: Option<NaiveDate>,

    /// End date (inclusive)
    pub until: Option<NaiveDate>,

    /// Case-insensitive substring of the food name or meal type
    pub search: Option<String>,

    /// Maximum number of results
    pub limit: Option<usize>,
}

impl EntryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn meal_type(mut self, meal_type: MealType) -> Self {
        self.meal_type = Some(meal_type);
        self
    }

    /// Restrict to a single day.
    pub fn on(self, date: NaiveDate) -> Self {
        self.since(date).until(date)
    }

    pub fn since(mut self, date: NaiveDate) -> Self {
        self.since = Some(date);
        self
    }

    pub fn until(mut self, date: NaiveDate) -> Self {
        self.until = Some(date);
        self
    }

    pub fn search(mut self, query: impl Into<String>) -> Self {
        self.search = Some(query.into());
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Whether a single entry passes every criterion except `limit`.
    pub fn matches(&self, entry: &Entry) -> bool {
        if let Some(meal_type) = self.meal_type {
            if entry.meal_type != meal_type {
                return false;
            }
        }
        if let Some(since) = self.since {
            if entry.date < since {
                return false;
            }
        }
        if let Some(until) = self.until {
            if entry.date > until {
                return false;
            }
        }
        if let Some(ref query) = self.search {
            let needle = query.trim().to_lowercase();
            if !needle.is_empty()
                && !entry.food_name.to_lowercase().contains(&needle)
                && !entry.meal_type.as_str().to_lowercase().contains(&needle)
            {
                return false;
            }
        }
        true
    }
}

/// Parse an entry date in `YYYY-MM-DD` form.
pub fn parse_entry_date(value: &str) -> Result<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::Validation("Date is required".to_string()));
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| {
        LedgerError::Validation(format!(
            "Invalid date (expected YYYY-MM-DD): {}",
            trimmed
        ))
    })
}

fn validate_fields(
    food_name: &str,
    calories: f64,
    protein: f64,
    carbs: f64,
    fats: f64,
) -> Result<()> {
    if food_name.trim().is_empty() {
        return Err(LedgerError::Validation("Food name cannot be empty".to_string()));
    }
    check_amount("calories", calories)?;
    check_amount("protein", protein)?;
    check_amount("carbs", carbs)?;
    check_amount("fats", fats)?;
    Ok(())
}

fn check_amount(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(LedgerError::Validation(format!(
            "{} must be a finite number",
            field
        )));
    }
    if value < 0.0 {
        return Err(LedgerError::Validation(format!(
            "{} cannot be negative (got {})",
            field, value
        )));
    }
    if value > MAX_AMOUNT {
        return Err(LedgerError::Validation(format!(
            "{} cannot exceed {} (got {})",
            field, MAX_AMOUNT, value
        )));
    }
    Ok(())
}
