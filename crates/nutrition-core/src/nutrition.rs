//! Pure aggregation over entries: totals, breakdowns, macro checks.
//!
//! Nothing in this module touches a ledger or a store. Every function
//! takes a sequence of entries (or plain numbers) and returns plain data
//! for a presentation layer to render.

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::entry::{Entry, MealType};
use crate::error::{LedgerError, Result};

/// Energy per gram of protein.
pub const PROTEIN_KCAL_PER_GRAM: f64 = 4.0;
/// Energy per gram of carbohydrate.
pub const CARBS_KCAL_PER_GRAM: f64 = 4.0;
/// Energy per gram of fat.
pub const FAT_KCAL_PER_GRAM: f64 = 9.0;
/// Largest gap between entered and macro-derived calories still considered consistent.
pub const MACRO_TOLERANCE_KCAL: f64 = 50.0;

/// Summed nutrient values over a set of entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    pub count: usize,
}

impl Totals {
    pub fn add(&mut self, entry: &Entry) {
        self.calories += entry.calories;
        self.protein += entry.protein;
        self.carbs += entry.carbs;
        self.fats += entry.fats;
        self.count += 1;
    }
}

/// Count and totals for one bucket of a breakdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    pub count: usize,
    pub totals: Totals,
}

impl Breakdown {
    fn add(&mut self, entry: &Entry) {
        self.count += 1;
        self.totals.add(entry);
    }
}

/// Result of comparing entered calories with macro-derived calories.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroCheck {
    pub calculated: f64,
    pub difference: f64,
    pub is_consistent: bool,
}

/// Energy contributed by each macro and its share of total calories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroSplit {
    pub protein_kcal: f64,
    pub carbs_kcal: f64,
    pub fats_kcal: f64,
    pub protein_percent: f64,
    pub carbs_percent: f64,
    pub fats_percent: f64,
}

/// Headline statistics over a set of entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub totals: Totals,
    pub distinct_days: usize,
    pub average_daily_calories: f64,
    pub average_calories_per_entry: f64,
    pub average_protein_per_entry: f64,
}

/// One day of a trend series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub breakdown: Breakdown,
}

/// Sum every nutrient over `entries`. Zero entries sum to all zeros.
pub fn totals<'a, I>(entries: I) -> Totals
where
    I: IntoIterator<Item = &'a Entry>,
{
    let mut totals = Totals::default();
    for entry in entries {
        totals.add(entry);
    }
    totals
}

/// Calories implied by macro grams: `protein*4 + carbs*4 + fats*9`.
pub fn macro_derived_calories(protein: f64, carbs: f64, fats: f64) -> f64 {
    protein * PROTEIN_KCAL_PER_GRAM + carbs * CARBS_KCAL_PER_GRAM + fats * FAT_KCAL_PER_GRAM
}

/// Compare entered calories with the macro-derived value.
///
/// Advisory only: callers decide whether to warn or block.
pub fn macro_consistency(calories: f64, protein: f64, carbs: f64, fats: f64) -> MacroCheck {
    let calculated = macro_derived_calories(protein, carbs, fats);
    let difference = (calories - calculated).abs();
    MacroCheck {
        calculated,
        difference,
        is_consistent: difference <= MACRO_TOLERANCE_KCAL,
    }
}

/// Split `calories` into the share contributed by each macro.
pub fn macro_split(calories: f64, protein: f64, carbs: f64, fats: f64) -> MacroSplit {
    let protein_kcal = protein * PROTEIN_KCAL_PER_GRAM;
    let carbs_kcal = carbs * CARBS_KCAL_PER_GRAM;
    let fats_kcal = fats * FAT_KCAL_PER_GRAM;
    let share = |kcal: f64| {
        if calories > 0.0 {
            kcal / calories * 100.0
        } else {
            0.0
        }
    };
    MacroSplit {
        protein_kcal,
        carbs_kcal,
        fats_kcal,
        protein_percent: share(protein_kcal),
        carbs_percent: share(carbs_kcal),
        fats_percent: share(fats_kcal),
    }
}

/// Group by meal type. All four categories are always present.
pub fn breakdown_by_meal_type<'a, I>(entries: I) -> BTreeMap<MealType, Breakdown>
where
    I: IntoIterator<Item = &'a Entry>,
{
    let mut map: BTreeMap<MealType, Breakdown> = MealType::ALL
        .iter()
        .map(|meal_type| (*meal_type, Breakdown::default()))
        .collect();
    for entry in entries {
        map.entry(entry.meal_type).or_default().add(entry);
    }
    map
}

/// Group by date, iterating in ascending date order.
pub fn breakdown_by_date<'a, I>(entries: I) -> BTreeMap<NaiveDate, Breakdown>
where
    I: IntoIterator<Item = &'a Entry>,
{
    let mut map: BTreeMap<NaiveDate, Breakdown> = BTreeMap::new();
    for entry in entries {
        map.entry(entry.date).or_default().add(entry);
    }
    map
}

/// Totals plus averages per day (over distinct dates) and per entry.
pub fn statistics<'a, I>(entries: I) -> Statistics
where
    I: IntoIterator<Item = &'a Entry>,
{
    let by_date = breakdown_by_date(entries);
    let mut totals = Totals::default();
    for breakdown in by_date.values() {
        totals.calories += breakdown.totals.calories;
        totals.protein += breakdown.totals.protein;
        totals.carbs += breakdown.totals.carbs;
        totals.fats += breakdown.totals.fats;
        totals.count += breakdown.count;
    }

    let distinct_days = by_date.len();
    let per_day = |value: f64| {
        if distinct_days == 0 {
            0.0
        } else {
            value / distinct_days as f64
        }
    };
    let per_entry = |value: f64| {
        if totals.count == 0 {
            0.0
        } else {
            value / totals.count as f64
        }
    };

    Statistics {
        totals,
        distinct_days,
        average_daily_calories: per_day(totals.calories),
        average_calories_per_entry: per_entry(totals.calories),
        average_protein_per_entry: per_entry(totals.protein),
    }
}

/// One point per day for the `days` days ending at `end`, oldest first.
///
/// Days without entries are present with zero totals, so the result always
/// holds exactly `days` points.
///
/// # Errors
///
/// Returns `LedgerError::Validation` if the window would start before the
/// earliest representable date.
pub fn daily_series<'a, I>(entries: I, end: NaiveDate, days: u32) -> Result<Vec<DailyPoint>>
where
    I: IntoIterator<Item = &'a Entry>,
{
    if days == 0 {
        return Ok(Vec::new());
    }
    let start = end
        .checked_sub_days(Days::new(u64::from(days - 1)))
        .ok_or_else(|| {
            LedgerError::Validation(format!(
                "A {}-day window ending {} starts before the earliest supported date",
                days, end
            ))
        })?;
    let by_date = breakdown_by_date(
        entries
            .into_iter()
            .filter(|entry| entry.date >= start && entry.date <= end),
    );

    Ok(start
        .iter_days()
        .take_while(|date| *date <= end)
        .map(|date| DailyPoint {
            date,
            breakdown: by_date.get(&date).copied().unwrap_or_default(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn day(value: &str) -> NaiveDate {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
    }

    fn meal(
        name: &str,
        calories: f64,
        macros: (f64, f64, f64),
        date: &str,
        meal_type: MealType,
    ) -> Entry {
        Entry {
            id: Uuid::new_v4(),
            food_name: name.to_string(),
            calories,
            protein: macros.0,
            carbs: macros.1,
            fats: macros.2,
            date: day(date),
            meal_type,
            timestamp: Utc::now(),
        }
    }

    fn sample() -> Vec<Entry> {
        vec![
            meal("Oats", 300.0, (10.0, 50.0, 6.0), "2024-03-01", MealType::Breakfast),
            meal("Chicken", 450.0, (40.0, 20.0, 22.0), "2024-03-01", MealType::Dinner),
            meal("Apple", 95.0, (0.5, 25.0, 0.3), "2024-03-03", MealType::Snack),
        ]
    }

    #[test]
    fn test_totals_sums_each_nutrient() {
        let entries = sample();
        let t = totals(&entries);
        assert_eq!(t.calories, 845.0);
        assert_eq!(t.protein, 50.5);
        assert_eq!(t.carbs, 95.0);
        assert!((t.fats - 28.3).abs() < 1e-9);
        assert_eq!(t.count, 3);
    }

    #[test]
    fn test_totals_of_nothing_is_zero() {
        let t = totals(std::iter::empty::<&Entry>());
        assert_eq!(t, Totals::default());
        assert_eq!(t.count, 0);
        assert_eq!(t.calories, 0.0);
    }

    #[test]
    fn test_macro_derived_calories() {
        assert_eq!(macro_derived_calories(10.0, 20.0, 5.0), 165.0);
    }

    #[test]
    fn test_macro_consistency_threshold() {
        let ok = macro_consistency(165.0, 10.0, 20.0, 5.0);
        assert!(ok.is_consistent);
        assert_eq!(ok.difference, 0.0);

        let bad = macro_consistency(300.0, 10.0, 20.0, 5.0);
        assert!(!bad.is_consistent);
        assert_eq!(bad.calculated, 165.0);
        assert_eq!(bad.difference, 135.0);

        let edge = macro_consistency(215.0, 10.0, 20.0, 5.0);
        assert!(edge.is_consistent);
    }

    #[test]
    fn test_breakdown_by_meal_type_keeps_empty_categories() {
        let map = breakdown_by_meal_type(std::iter::empty::<&Entry>());
        assert_eq!(map.len(), 4);
        for meal_type in MealType::ALL {
            assert_eq!(map[&meal_type], Breakdown::default());
        }

        let entries = sample();
        let map = breakdown_by_meal_type(&entries);
        assert_eq!(map[&MealType::Breakfast].count, 1);
        assert_eq!(map[&MealType::Lunch].count, 0);
        assert_eq!(map[&MealType::Dinner].totals.calories, 450.0);
        let order: Vec<MealType> = map.keys().copied().collect();
        assert_eq!(order, MealType::ALL.to_vec());
    }

    #[test]
    fn test_breakdown_by_date_ascending() {
        let mut entries = sample();
        entries.reverse();
        let map = breakdown_by_date(&entries);
        let dates: Vec<NaiveDate> = map.keys().copied().collect();
        assert_eq!(dates, vec![day("2024-03-01"), day("2024-03-03")]);
        assert_eq!(map[&day("2024-03-01")].count, 2);
        assert_eq!(map[&day("2024-03-01")].totals.calories, 750.0);
    }

    #[test]
    fn test_statistics_averages_over_distinct_days() {
        let entries = sample();
        let stats = statistics(&entries);
        assert_eq!(stats.distinct_days, 2);
        assert_eq!(stats.average_daily_calories, 422.5);
        assert!((stats.average_calories_per_entry - 845.0 / 3.0).abs() < 1e-9);

        let empty = statistics(std::iter::empty::<&Entry>());
        assert_eq!(empty.average_daily_calories, 0.0);
        assert_eq!(empty.average_protein_per_entry, 0.0);
    }

    #[test]
    fn test_daily_series_fills_gaps() {
        let entries = sample();
        let series = daily_series(&entries, day("2024-03-03"), 7).unwrap();
        assert_eq!(series.len(), 7);
        assert_eq!(series[0].date, day("2024-02-26"));
        assert_eq!(series[6].date, day("2024-03-03"));
        assert_eq!(series[4].breakdown.count, 2);
        assert_eq!(series[5].breakdown, Breakdown::default());
        assert_eq!(series[6].breakdown.totals.calories, 95.0);
        assert!(daily_series(&entries, day("2024-03-03"), 0)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_daily_series_before_earliest_date_is_rejected() {
        let empty: Vec<Entry> = Vec::new();
        let end = NaiveDate::MIN + Days::new(10);
        let err = daily_series(&empty, end, 100).unwrap_err();
        assert!(err.is_validation());

        let series = daily_series(&empty, end, 11).unwrap();
        assert_eq!(series.len(), 11);
        assert_eq!(series[0].date, NaiveDate::MIN);
    }

    #[test]
    fn test_macro_split_percentages() {
        let split = macro_split(165.0, 10.0, 20.0, 5.0);
        assert_eq!(split.protein_kcal, 40.0);
        assert_eq!(split.fats_kcal, 45.0);
        assert!((split.carbs_percent - 80.0 / 165.0 * 100.0).abs() < 1e-9);

        let zero = macro_split(0.0, 10.0, 0.0, 0.0);
        assert_eq!(zero.protein_percent, 0.0);
        assert_eq!(zero.protein_kcal, 40.0);
    }
}
