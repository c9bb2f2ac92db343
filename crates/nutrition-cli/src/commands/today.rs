//! One day's totals against the daily goals.

use nutrition_core::{
    breakdown_by_meal_type, goal_progress, totals, Goal, GoalProgress, Nutrient,
};

use crate::app::AppContext;
use crate::cli::TodayArgs;
use crate::helpers::parse_date;
use crate::output::DayReport;
use crate::ui::{
    blank_line, format_amount, format_kcal, format_percent, header, kv, print, progress_bar,
    table, Column, UiContext,
};

const BAR_WIDTH: usize = 20;

fn progress_rows(ctx: &UiContext, goal: &Goal, progress: &GoalProgress) -> Vec<Vec<String>> {
    Nutrient::ALL
        .iter()
        .map(|nutrient| {
            let p = progress.get(*nutrient);
            vec![
                nutrient.as_str().to_string(),
                format!("{} {}", format_amount(p.consumed), nutrient.unit()),
                format!("{} {}", format_amount(goal.get(*nutrient)), nutrient.unit()),
                progress_bar(ctx, p.percent, BAR_WIDTH),
                format_percent(p.percent),
            ]
        })
        .collect()
}

pub fn handle_today(ctx: &AppContext, args: &TodayArgs) -> anyhow::Result<()> {
    let date = match args.date.as_deref() {
        Some(value) => parse_date(value)?,
        None => ctx.today()?,
    };
    let goal = ctx.goal()?;
    let session = ctx.open_session()?;
    let day = session.ledger().entries_on(date);

    let day_totals = totals(day.clone());
    let progress = goal_progress(&day_totals, &goal);
    let by_meal_type = breakdown_by_meal_type(day.clone());

    let ui_ctx = ctx.ui_context(args.json, None);
    if ui_ctx.mode.is_json() {
        let report = DayReport {
            date,
            totals: day_totals,
            goal,
            progress,
            remaining_calories: progress.calories.remaining,
            by_meal_type,
            entries: day.collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let date_label = date.to_string();
    print(&ui_ctx, &header(&ui_ctx, "today", Some(&date_label)));
    blank_line(&ui_ctx);

    if ui_ctx.mode.is_pretty() {
        let columns = [
            Column::new("Nutrient"),
            Column::numeric("Consumed"),
            Column::numeric("Goal"),
            Column::new("Progress"),
            Column::numeric("%"),
        ];
        println!("{}", table(&ui_ctx, &columns, &progress_rows(&ui_ctx, &goal, &progress)));
        blank_line(&ui_ctx);
        let meal_columns = [
            Column::new("Meal"),
            Column::numeric("Entries"),
            Column::numeric("kcal"),
        ];
        let meal_rows: Vec<Vec<String>> = by_meal_type
            .iter()
            .map(|(meal_type, bucket)| {
                vec![
                    meal_type.to_string(),
                    bucket.count.to_string(),
                    format_amount(bucket.totals.calories),
                ]
            })
            .collect();
        println!("{}", table(&ui_ctx, &meal_columns, &meal_rows));
        blank_line(&ui_ctx);
        print(
            &ui_ctx,
            &kv(&ui_ctx, "Remaining", &format_kcal(progress.calories.remaining)),
        );
    } else {
        print(&ui_ctx, &kv(&ui_ctx, "entries", &day_totals.count.to_string()));
        for nutrient in Nutrient::ALL {
            let p = progress.get(nutrient);
            print(
                &ui_ctx,
                &format!(
                    "{}={} goal={} percent={}",
                    nutrient.as_str(),
                    format_amount(p.consumed),
                    format_amount(p.target),
                    format_amount(p.percent)
                ),
            );
        }
        for (meal_type, bucket) in &by_meal_type {
            print(
                &ui_ctx,
                &format!(
                    "meal={} entries={} calories={}",
                    meal_type.as_str().to_lowercase(),
                    bucket.count,
                    format_amount(bucket.totals.calories)
                ),
            );
        }
        print(
            &ui_ctx,
            &kv(&ui_ctx, "remaining", &format_amount(progress.calories.remaining)),
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::OutputMode;
    use nutrition_core::Totals;

    #[test]
    fn test_progress_rows_cover_every_nutrient() {
        let ctx = UiContext {
            color: false,
            unicode: false,
            width: 80,
            mode: OutputMode::Pretty,
        };
        let goal = Goal::default();
        let consumed = Totals {
            calories: 1000.0,
            protein: 60.0,
            ..Totals::default()
        };
        let rows = progress_rows(&ctx, &goal, &goal_progress(&consumed, &goal));

        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0][0], "calories");
        assert_eq!(rows[0][1], "1000 kcal");
        assert_eq!(rows[0][4], "50%");
        assert_eq!(rows[1][2], "50 g");
        assert_eq!(rows[1][4], "100%");
        assert_eq!(rows[3][4], "0%");
    }
}
