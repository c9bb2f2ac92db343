//! Input and parsing helper functions for the CLI.
//!
//! - Prompts for missing `add` fields (`input`)
//! - Date, window, id and format parsing (`parsing`)

mod input;
mod parsing;

pub use input::{require_amount, require_text, select_meal_type};
pub use parsing::{
    parse_date, parse_entry_id, parse_last_days, parse_meal_type, parse_optional_date,
    parse_output_format, parse_timezone, OutputFormat,
};
