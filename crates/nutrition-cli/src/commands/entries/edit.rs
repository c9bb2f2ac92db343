use tracing::warn;

use nutrition_core::{macro_consistency, EntryPatch};

use crate::app::AppContext;
use crate::cli::EditArgs;
use crate::errors::CliError;
use crate::helpers::{parse_date, parse_entry_id, parse_meal_type};
use crate::output::macro_check_line;
use crate::ui::{format_amount, print, receipt};

fn build_patch(args: &EditArgs) -> anyhow::Result<EntryPatch> {
    let mut patch = EntryPatch::new();
    if let Some(ref food) = args.food {
        patch = patch.food_name(food.clone());
    }
    if let Some(calories) = args.calories {
        patch = patch.calories(calories);
    }
    if let Some(protein) = args.protein {
        patch = patch.protein(protein);
    }
    if let Some(carbs) = args.carbs {
        patch = patch.carbs(carbs);
    }
    if let Some(fats) = args.fats {
        patch = patch.fats(fats);
    }
    if let Some(ref date) = args.date {
        patch = patch.date(parse_date(date)?);
    }
    if let Some(ref meal) = args.meal {
        patch = patch.meal_type(parse_meal_type(meal)?);
    }
    Ok(patch)
}

pub fn handle_edit(ctx: &AppContext, args: &EditArgs) -> anyhow::Result<()> {
    let id = parse_entry_id(&args.id)?;
    let patch = build_patch(args)?;
    if patch.is_empty() {
        return Err(CliError::validation("Nothing to change")
            .with_hint("Pass at least one of --food, --calories, --protein, --carbs, --fats, --date, --meal.")
            .into());
    }

    let mut session = ctx.open_session()?;
    let entry = session.update(&id, &patch)?;

    let check = macro_consistency(entry.calories, entry.protein, entry.carbs, entry.fats);
    if !check.is_consistent {
        warn!(id = %entry.id, difference = check.difference, "calories disagree with macros");
    }

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false, None);
        let items = [
            ("ID", entry.id.to_string()),
            ("Food", entry.food_name.clone()),
            ("Date", entry.date.to_string()),
            ("Meal", entry.meal_type.to_string()),
            ("Calories", format_amount(entry.calories)),
        ];
        print(&ui_ctx, &receipt(&ui_ctx, "Updated entry", &items));
        if !check.is_consistent {
            print(
                &ui_ctx,
                &macro_check_line(&ui_ctx, check.calculated, check.difference, false),
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutrition_core::MealType;

    fn args(id: &str) -> EditArgs {
        EditArgs {
            id: id.to_string(),
            food: None,
            calories: None,
            protein: None,
            carbs: None,
            fats: None,
            date: None,
            meal: None,
        }
    }

    #[test]
    fn test_build_patch_only_given_fields() {
        let mut edit = args("x");
        edit.calories = Some(320.0);
        edit.meal = Some("dinner".to_string());
        let patch = build_patch(&edit).unwrap();
        assert_eq!(patch.calories, Some(320.0));
        assert_eq!(patch.meal_type, Some(MealType::Dinner));
        assert!(patch.protein.is_none());
        assert!(patch.food_name.is_none());
    }

    #[test]
    fn test_build_patch_empty() {
        assert!(build_patch(&args("x")).unwrap().is_empty());
    }

    #[test]
    fn test_build_patch_rejects_bad_date() {
        let mut edit = args("x");
        edit.date = Some("yesterday".to_string());
        assert!(build_patch(&edit).is_err());
    }
}
