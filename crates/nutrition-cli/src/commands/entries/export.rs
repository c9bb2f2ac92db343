use std::io;

use nutrition_core::entry::DATE_FORMAT;
use nutrition_core::{Entry, EntryFilter};

use crate::app::AppContext;
use crate::cli::ExportArgs;
use crate::errors::CliError;
use crate::helpers::parse_optional_date;
use crate::output::entries_json;

const CSV_HEADER: [&str; 9] = [
    "id",
    "foodName",
    "calories",
    "protein",
    "carbs",
    "fats",
    "date",
    "mealType",
    "timestamp",
];

fn csv_record(entry: &Entry) -> [String; 9] {
    [
        entry.id.to_string(),
        entry.food_name.clone(),
        entry.calories.to_string(),
        entry.protein.to_string(),
        entry.carbs.to_string(),
        entry.fats.to_string(),
        entry.date.format(DATE_FORMAT).to_string(),
        entry.meal_type.as_str().to_string(),
        entry.timestamp.to_rfc3339(),
    ]
}

/// Write entries as CSV with a header row.
fn write_csv<W: io::Write>(out: W, entries: &[&Entry]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(CSV_HEADER)?;
    for entry in entries {
        writer.write_record(csv_record(entry))?;
    }
    writer.flush()?;
    Ok(())
}

pub fn handle_export(ctx: &AppContext, args: &ExportArgs) -> anyhow::Result<()> {
    let mut filter = EntryFilter::new();
    if let Some(since) = parse_optional_date(args.since.as_deref())? {
        filter = filter.since(since);
    }

    let session = ctx.open_session()?;
    let entries = session.ledger().filter(&filter);
    match args.format.as_str() {
        "json" => {
            let values = entries_json(entries)?;
            println!("{}", serde_json::to_string_pretty(&values)?);
        }
        "jsonl" => {
            for value in entries_json(entries)? {
                println!("{}", serde_json::to_string(&value)?);
            }
        }
        "csv" => {
            write_csv(io::stdout().lock(), &entries)?;
        }
        other => {
            return Err(CliError::validation(format!(
                "Unsupported export format: {} (use json, jsonl or csv)",
                other
            ))
            .into());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use nutrition_core::MealType;
    use uuid::Uuid;

    #[test]
    fn test_write_csv_quotes_commas() {
        let entry = Entry {
            id: Uuid::nil(),
            food_name: "Rice, fried".to_string(),
            calories: 420.5,
            protein: 9.0,
            carbs: 60.0,
            fats: 14.0,
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            meal_type: MealType::Dinner,
            timestamp: Utc.with_ymd_and_hms(2024, 3, 1, 19, 30, 0).unwrap(),
        };
        let mut out = Vec::new();
        write_csv(&mut out, &[&entry]).unwrap();
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("id,foodName,calories,protein,carbs,fats,date,mealType,timestamp")
        );
        assert_eq!(
            lines.next(),
            Some(
                "00000000-0000-0000-0000-000000000000,\"Rice, fried\",420.5,9,60,14,\
                 2024-03-01,Dinner,2024-03-01T19:30:00+00:00"
            )
        );
        assert_eq!(lines.next(), None);
    }
}
