//! Statistics, meal-type breakdown and daily trend over a date range.

use chrono::NaiveDate;

use nutrition_core::{
    breakdown_by_meal_type, daily_series, macro_split, statistics, Entry, EntryFilter,
};

use crate::app::AppContext;
use crate::cli::StatsArgs;
use crate::helpers::parse_optional_date;
use crate::output::StatsReport;
use crate::ui::{blank_line, format_amount, format_percent, header, kv, print, table, Column};

fn build_report(
    entries: &[&Entry],
    since: Option<NaiveDate>,
    until: Option<NaiveDate>,
    trend_end: NaiveDate,
    days: u32,
) -> anyhow::Result<StatsReport> {
    let stats = statistics(entries.iter().copied());
    let split = macro_split(
        stats.totals.calories,
        stats.totals.protein,
        stats.totals.carbs,
        stats.totals.fats,
    );
    Ok(StatsReport {
        since,
        until,
        statistics: stats,
        macro_split: split,
        by_meal_type: breakdown_by_meal_type(entries.iter().copied()),
        daily: daily_series(entries.iter().copied(), trend_end, days)?,
    })
}

pub fn handle_stats(ctx: &AppContext, args: &StatsArgs) -> anyhow::Result<()> {
    let since = parse_optional_date(args.since.as_deref())?;
    let until = parse_optional_date(args.until.as_deref())?;
    let mut filter = EntryFilter::new();
    if let Some(since) = since {
        filter = filter.since(since);
    }
    if let Some(until) = until {
        filter = filter.until(until);
    }
    let trend_end = match until {
        Some(until) => until,
        None => ctx.today()?,
    };

    let session = ctx.open_session()?;
    let entries = session.ledger().filter(&filter);
    let report = build_report(&entries, since, until, trend_end, args.days)?;

    let ui_ctx = ctx.ui_context(args.json, None);
    if ui_ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let range = match (since, until) {
        (None, None) => "all time".to_string(),
        (Some(s), None) => format!("since {}", s),
        (None, Some(u)) => format!("until {}", u),
        (Some(s), Some(u)) => format!("{} to {}", s, u),
    };
    let stats = &report.statistics;
    let split = &report.macro_split;
    print(&ui_ctx, &header(&ui_ctx, "stats", Some(&range)));
    blank_line(&ui_ctx);
    print(&ui_ctx, &kv(&ui_ctx, "Entries", &stats.totals.count.to_string()));
    print(&ui_ctx, &kv(&ui_ctx, "Days", &stats.distinct_days.to_string()));
    print(&ui_ctx, &kv(&ui_ctx, "Total Calories", &format_amount(stats.totals.calories)));
    print(
        &ui_ctx,
        &kv(&ui_ctx, "Avg Daily Calories", &format_amount(stats.average_daily_calories)),
    );
    print(
        &ui_ctx,
        &kv(&ui_ctx, "Avg Per Entry", &format_amount(stats.average_calories_per_entry)),
    );
    print(
        &ui_ctx,
        &kv(
            &ui_ctx,
            "Macro Split",
            &format!(
                "protein {} / carbs {} / fats {}",
                format_percent(split.protein_percent),
                format_percent(split.carbs_percent),
                format_percent(split.fats_percent)
            ),
        ),
    );
    blank_line(&ui_ctx);

    let meal_columns = [
        Column::new("Meal"),
        Column::numeric("Entries"),
        Column::numeric("kcal"),
        Column::numeric("Avg kcal"),
    ];
    let meal_rows: Vec<Vec<String>> = report
        .by_meal_type
        .iter()
        .map(|(meal_type, bucket)| {
            let average = if bucket.count == 0 {
                0.0
            } else {
                bucket.totals.calories / bucket.count as f64
            };
            vec![
                meal_type.to_string(),
                bucket.count.to_string(),
                format_amount(bucket.totals.calories),
                format_amount(average),
            ]
        })
        .collect();
    print(&ui_ctx, &table(&ui_ctx, &meal_columns, &meal_rows));
    blank_line(&ui_ctx);

    let trend_columns = [
        Column::new("Date"),
        Column::numeric("Entries"),
        Column::numeric("kcal"),
    ];
    let trend_rows: Vec<Vec<String>> = report
        .daily
        .iter()
        .map(|point| {
            vec![
                point.date.to_string(),
                point.breakdown.count.to_string(),
                format_amount(point.breakdown.totals.calories),
            ]
        })
        .collect();
    print(&ui_ctx, &table(&ui_ctx, &trend_columns, &trend_rows));
    Ok(())
}
