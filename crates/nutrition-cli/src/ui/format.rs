//! String formatting utilities for UI rendering.

use uuid::Uuid;

/// Truncate a string to max length, adding ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let truncated: String = s.chars().take(max_len - 3).collect();
    format!("{}...", truncated)
}

/// First 8 characters of a UUID.
pub fn short_id(id: &Uuid) -> String {
    id.to_string()[..8].to_string()
}

/// Render an amount with at most one decimal, dropping a trailing `.0`.
pub fn format_amount(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{:.0}", rounded)
    } else {
        format!("{:.1}", rounded)
    }
}

pub fn format_kcal(value: f64) -> String {
    format!("{} kcal", format_amount(value))
}

pub fn format_grams(value: f64) -> String {
    format!("{}g", format_amount(value))
}

/// Whole-number percentage, e.g. `63%`.
pub fn format_percent(value: f64) -> String {
    format!("{:.0}%", value)
}
