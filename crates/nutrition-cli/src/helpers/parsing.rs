//! Parsing helpers for dates, day windows, ids and output format.

use chrono::{Days, NaiveDate};
use uuid::Uuid;

use nutrition_core::{parse_entry_date, MealType};

use crate::errors::CliError;

/// Parse a calendar day (YYYY-MM-DD).
pub fn parse_date(value: &str) -> anyhow::Result<NaiveDate> {
    Ok(parse_entry_date(value)?)
}

/// Parse an optional calendar day.
pub fn parse_optional_date(value: Option<&str>) -> anyhow::Result<Option<NaiveDate>> {
    value.map(parse_date).transpose()
}

/// Parse a day window (e.g., "7d") into its first day, counting `today`.
///
/// `1d` is today alone; `7d` starts six days earlier.
pub fn parse_last_days(value: &str, today: NaiveDate) -> anyhow::Result<NaiveDate> {
    let days: u64 = value
        .strip_suffix('d')
        .and_then(|num| num.parse().ok())
        .ok_or_else(|| {
            CliError::validation(format!("Invalid window: {} (expected <number>d)", value))
        })?;
    if days == 0 {
        return Err(CliError::validation(format!("Window must be positive: {}", value)).into());
    }
    today
        .checked_sub_days(Days::new(days - 1))
        .ok_or_else(|| CliError::validation(format!("Window too large: {}", value)).into())
}

/// Parse a meal type name, case-insensitively.
pub fn parse_meal_type(value: &str) -> anyhow::Result<MealType> {
    Ok(value.parse::<MealType>()?)
}

/// Parse a full entry UUID.
pub fn parse_entry_id(value: &str) -> anyhow::Result<Uuid> {
    Uuid::parse_str(value.trim()).map_err(|e| {
        CliError::validation(format!("Invalid entry ID: {}", e))
            .with_hint("Run `calories list` to find entry IDs.")
            .into()
    })
}

/// Output format for list commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Plain,
}

pub fn parse_output_format(value: Option<&str>) -> anyhow::Result<Option<OutputFormat>> {
    match value {
        None => Ok(None),
        Some("table") => Ok(Some(OutputFormat::Table)),
        Some("plain") => Ok(Some(OutputFormat::Plain)),
        Some(other) => Err(CliError::validation(format!(
            "Unsupported format: {} (use table or plain)",
            other
        ))
        .into()),
    }
}

/// Normalize a timezone name; empty or "auto" means the system zone.
pub fn parse_timezone(value: &str) -> anyhow::Result<Option<String>> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("auto") {
        return Ok(None);
    }
    let tz = trimmed
        .parse::<chrono_tz::Tz>()
        .map_err(|_| CliError::validation(format!("Invalid timezone: {}", trimmed)))?;
    Ok(Some(tz.to_string()))
}
