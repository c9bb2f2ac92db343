use chrono::NaiveDate;

use nutrition_core::{
    breakdown_by_meal_type, goal_progress, macro_consistency, macro_derived_calories, totals,
    EntryPatch, Goal, LedgerError, MealType, NewEntry, NutritionLedger, Totals,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date")
}

#[test]
fn test_totals_match_per_field_sums() {
    let mut ledger = NutritionLedger::new();
    let values = [
        (250.0, 12.0, 30.0, 8.0),
        (410.5, 31.5, 22.0, 19.25),
        (95.0, 0.5, 25.0, 0.3),
    ];
    for (i, (calories, protein, carbs, fats)) in values.iter().enumerate() {
        ledger
            .add(
                NewEntry::new(format!("food {}", i), MealType::Snack)
                    .with_calories(*calories)
                    .with_macros(*protein, *carbs, *fats)
                    .with_date(today()),
            )
            .expect("add should succeed");
    }

    let t = totals(ledger.entries());
    assert_eq!(t.count, 3);
    assert_eq!(t.calories, values.iter().map(|v| v.0).sum::<f64>());
    assert_eq!(t.protein, values.iter().map(|v| v.1).sum::<f64>());
    assert_eq!(t.carbs, values.iter().map(|v| v.2).sum::<f64>());
    assert_eq!(t.fats, values.iter().map(|v| v.3).sum::<f64>());
}

#[test]
fn test_macro_examples() {
    assert_eq!(macro_derived_calories(10.0, 20.0, 5.0), 165.0);
    assert!(macro_consistency(165.0, 10.0, 20.0, 5.0).is_consistent);
    let check = macro_consistency(300.0, 10.0, 20.0, 5.0);
    assert!(!check.is_consistent);
    assert_eq!(check.difference, 135.0);
}

#[test]
fn test_goal_progress_clamps() {
    let t = Totals {
        calories: 2500.0,
        ..Totals::default()
    };
    let goal = Goal {
        calories: 2000.0,
        ..Goal::default()
    };
    assert_eq!(goal_progress(&t, &goal).calories.percent, 100.0);
}

#[test]
fn test_empty_breakdown_has_every_category() {
    let ledger = NutritionLedger::new();
    let map = breakdown_by_meal_type(ledger.entries());
    for meal_type in MealType::ALL {
        let bucket = map.get(&meal_type).expect("category present");
        assert_eq!(bucket.count, 0);
        assert_eq!(bucket.totals, Totals::default());
    }
}

#[test]
fn test_mutation_errors() {
    let mut ledger = NutritionLedger::new();
    let err = ledger
        .add(
            NewEntry::new("", MealType::Breakfast)
                .with_calories(100.0)
                .with_macros(1.0, 1.0, 1.0)
                .with_date(today()),
        )
        .unwrap_err();
    assert!(matches!(err, LedgerError::Validation(_)));

    let entry = ledger
        .add(
            NewEntry::new("Eggs", MealType::Breakfast)
                .with_calories(150.0)
                .with_macros(12.0, 1.0, 10.0)
                .with_date(today()),
        )
        .expect("add should succeed");
    let updated = ledger
        .update(&entry.id, &EntryPatch::new().calories(500.0))
        .expect("update should succeed");
    assert_eq!(updated.calories, 500.0);
    assert_eq!(updated.timestamp, entry.timestamp);
    assert_eq!(updated.fats, entry.fats);

    ledger.delete(&entry.id).expect("first delete succeeds");
    assert!(matches!(
        ledger.delete(&entry.id),
        Err(LedgerError::NotFound(_))
    ));
}
