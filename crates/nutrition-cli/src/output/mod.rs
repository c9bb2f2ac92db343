//! Output formatting helpers for the CLI.
//!
//! JSON views of entries and reports, and table/plain rendering of
//! entry lists.

mod json;
mod text;

pub use json::{entries_json, entry_json, to_json, DayReport, StatsReport};
pub use text::{macro_check_line, print_entry, print_entry_list};
