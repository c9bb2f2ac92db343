//! JSON output for entries and summaries.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use nutrition_core::{
    Breakdown, DailyPoint, Entry, Goal, GoalProgress, MacroCheck, MacroSplit, MealType,
    Statistics, Totals,
};

/// Serialize any report type, mapping encode failures into `anyhow`.
pub fn to_json<T: Serialize>(value: &T) -> anyhow::Result<serde_json::Value> {
    Ok(serde_json::to_value(value)?)
}

/// An entry in its persisted shape plus the macro consistency check.
pub fn entry_json(entry: &Entry, check: &MacroCheck) -> anyhow::Result<serde_json::Value> {
    let mut value = to_json(entry)?;
    if let Some(object) = value.as_object_mut() {
        object.insert("macroCheck".to_string(), to_json(check)?);
    }
    Ok(value)
}

pub fn entries_json<'a, I>(entries: I) -> anyhow::Result<Vec<serde_json::Value>>
where
    I: IntoIterator<Item = &'a Entry>,
{
    entries.into_iter().map(to_json).collect()
}

/// One day's totals against the goal.
#[derive(Serialize)]
pub struct DayReport<'a> {
    pub date: NaiveDate,
    pub totals: Totals,
    pub goal: Goal,
    pub progress: GoalProgress,
    pub remaining_calories: f64,
    pub by_meal_type: BTreeMap<MealType, Breakdown>,
    pub entries: Vec<&'a Entry>,
}

/// Statistics over a range with the trailing daily trend.
#[derive(Serialize)]
pub struct StatsReport {
    pub since: Option<NaiveDate>,
    pub until: Option<NaiveDate>,
    pub statistics: Statistics,
    pub macro_split: MacroSplit,
    pub by_meal_type: BTreeMap<MealType, Breakdown>,
    pub daily: Vec<DailyPoint>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutrition_core::{macro_consistency, NewEntry, NutritionLedger};

    #[test]
    fn test_entry_json_shape() {
        let mut ledger = NutritionLedger::new();
        let entry = ledger
            .add(
                NewEntry::new("Soup", MealType::Lunch)
                    .with_calories(165.0)
                    .with_macros(10.0, 20.0, 5.0)
                    .with_date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()),
            )
            .unwrap();
        let check = macro_consistency(entry.calories, entry.protein, entry.carbs, entry.fats);

        let value = entry_json(&entry, &check).unwrap();
        assert_eq!(value["foodName"], "Soup");
        assert_eq!(value["mealType"], "Lunch");
        assert_eq!(value["date"], "2024-03-01");
        assert_eq!(value["macroCheck"]["is_consistent"], true);

        let list = entries_json(ledger.entries()).unwrap();
        assert_eq!(list.len(), 1);
        assert!(list[0].get("macroCheck").is_none());
    }
}
