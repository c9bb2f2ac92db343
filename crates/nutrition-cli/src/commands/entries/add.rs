//! Add entry command handler with prompting for missing fields.

use tracing::warn;

use nutrition_core::{macro_consistency, MealType, NewEntry};

use crate::app::AppContext;
use crate::cli::AddArgs;
use crate::errors::CliError;
use crate::helpers::{
    parse_date, parse_meal_type, require_amount, require_text, select_meal_type,
};
use crate::output::macro_check_line;
use crate::ui::{format_amount, format_kcal, hint, print, receipt, short_id, UiContext};

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(false, None);
    let interactive = UiContext::is_interactive() && !args.no_input;

    let food = require_text(args.food.clone(), "food", "Food", interactive)?;
    let calories = require_amount(args.calories, "calories", "Calories (kcal)", interactive)?;
    let protein = require_amount(args.protein, "protein", "Protein (g)", interactive)?;
    let carbs = require_amount(args.carbs, "carbs", "Carbs (g)", interactive)?;
    let fats = require_amount(args.fats, "fats", "Fats (g)", interactive)?;
    let meal_type = match args.meal.as_deref() {
        Some(value) => parse_meal_type(value)?,
        None => select_meal_type(MealType::Breakfast, interactive)?,
    };
    let date = match args.date.as_deref() {
        Some(value) => parse_date(value)?,
        None => ctx.today()?,
    };

    let check = macro_consistency(calories, protein, carbs, fats);
    if !check.is_consistent {
        warn!(
            calories,
            calculated = check.calculated,
            difference = check.difference,
            "calories disagree with macros"
        );
        if args.strict {
            return Err(CliError::validation(format!(
                "Calories ({}) differ from macro-derived calories ({}) by {}",
                format_kcal(calories),
                format_kcal(check.calculated),
                format_kcal(check.difference)
            ))
            .with_hint("Fix the amounts or drop --strict.")
            .into());
        }
    }

    let mut session = ctx.open_session()?;
    let entry = session.add(
        NewEntry::new(food, meal_type)
            .with_calories(calories)
            .with_macros(protein, carbs, fats)
            .with_date(date),
    )?;

    if !ctx.quiet() {
        let items = [
            ("ID", entry.id.to_string()),
            ("Food", entry.food_name.clone()),
            ("Date", entry.date.to_string()),
            ("Meal", entry.meal_type.to_string()),
            ("Calories", format_amount(entry.calories)),
        ];
        print(&ui_ctx, &receipt(&ui_ctx, "Added entry", &items));
        if !check.is_consistent {
            print(
                &ui_ctx,
                &macro_check_line(&ui_ctx, check.calculated, check.difference, false),
            );
        }
        if ui_ctx.mode.is_pretty() {
            print(
                &ui_ctx,
                &hint(&ui_ctx, &format!("calories show {}", short_id(&entry.id))),
            );
        }
    }
    Ok(())
}
