//! Text and table output for entries.

use nutrition_core::{macro_consistency, Entry};

use crate::helpers::OutputFormat;
use crate::ui::{
    badge, format_amount, format_grams, format_kcal, hint, kv, print, short_id, simple_table,
    table, truncate, Badge, Column, OutputMode, UiContext,
};

use super::json::entries_json;

const FOOD_NAME_MAX: usize = 32;

const ENTRY_COLUMNS: [Column; 8] = [
    Column::new("ID"),
    Column::new("Date"),
    Column::new("Meal"),
    Column::new("Food"),
    Column::numeric("kcal"),
    Column::numeric("Protein"),
    Column::numeric("Carbs"),
    Column::numeric("Fats"),
];

fn entry_row(entry: &Entry, full_id: bool) -> Vec<String> {
    let id = if full_id {
        entry.id.to_string()
    } else {
        short_id(&entry.id)
    };
    vec![
        id,
        entry.date.to_string(),
        entry.meal_type.to_string(),
        truncate(&entry.food_name, FOOD_NAME_MAX),
        format_amount(entry.calories),
        format_amount(entry.protein),
        format_amount(entry.carbs),
        format_amount(entry.fats),
    ]
}

/// Print a single entry with its macro check.
pub fn print_entry(ctx: &UiContext, entry: &Entry) {
    let check = macro_consistency(entry.calories, entry.protein, entry.carbs, entry.fats);
    print(ctx, &kv(ctx, "ID", &entry.id.to_string()));
    print(ctx, &kv(ctx, "Food", &entry.food_name));
    print(ctx, &kv(ctx, "Date", &entry.date.to_string()));
    print(ctx, &kv(ctx, "Meal", entry.meal_type.as_str()));
    print(ctx, &kv(ctx, "Calories", &format_kcal(entry.calories)));
    print(ctx, &kv(ctx, "Protein", &format_grams(entry.protein)));
    print(ctx, &kv(ctx, "Carbs", &format_grams(entry.carbs)));
    print(ctx, &kv(ctx, "Fats", &format_grams(entry.fats)));
    print(ctx, &kv(ctx, "Logged", &entry.timestamp.to_rfc3339()));
    print(ctx, &macro_check_line(ctx, check.calculated, check.difference, check.is_consistent));
}

/// One line describing whether calories agree with the macros.
pub fn macro_check_line(
    ctx: &UiContext,
    calculated: f64,
    difference: f64,
    is_consistent: bool,
) -> String {
    if !ctx.mode.is_pretty() {
        return format!(
            "macro_calories={} difference={} consistent={}",
            format_amount(calculated),
            format_amount(difference),
            is_consistent
        );
    }
    let detail = format!(
        "macros give {} ({} off)",
        format_kcal(calculated),
        format_kcal(difference)
    );
    if is_consistent {
        badge(ctx, Badge::Ok, &format!("Consistent: {}", detail))
    } else {
        badge(ctx, Badge::Warn, &format!("Mismatch: {}", detail))
    }
}

/// Print entries as JSON, a table, or plain rows.
pub fn print_entry_list(
    ctx: &UiContext,
    entries: &[&Entry],
    format: Option<OutputFormat>,
    quiet: bool,
) -> anyhow::Result<()> {
    if ctx.mode == OutputMode::Json {
        let values = entries_json(entries.iter().copied())?;
        println!("{}", serde_json::to_string_pretty(&values)?);
        return Ok(());
    }

    if entries.is_empty() {
        if !quiet {
            print(ctx, "No entries found.");
            if ctx.mode.is_pretty() {
                print(ctx, &hint(ctx, "calories add --food <name> --calories <kcal> ..."));
            }
        }
        return Ok(());
    }

    // Plain output keeps full ids so they can be piped into show/edit/delete.
    let full_id = !ctx.mode.is_pretty();
    let rows: Vec<Vec<String>> = entries.iter().map(|e| entry_row(e, full_id)).collect();
    let rendered = match format {
        Some(OutputFormat::Table) => table(ctx, &ENTRY_COLUMNS, &rows),
        _ => simple_table(ctx, &ENTRY_COLUMNS, &rows),
    };
    println!("{}", rendered);
    Ok(())
}
