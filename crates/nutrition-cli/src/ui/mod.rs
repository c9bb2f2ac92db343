//! UI primitives for the Calories CLI.
//!
//! - **Context**: Environment detection (TTY, width, color, unicode)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badges, bar glyphs, color styles
//! - **Render**: Tables, headers, receipts, hints, progress bars
//! - **Format**: Amount, percentage and id formatting

mod context;
pub mod format;
mod mode;
pub mod render;
pub mod theme;

pub use context::UiContext;
pub use mode::OutputMode;
pub use theme::Badge;

pub use render::{
    badge, blank_line, header, hint, kv, print, print_error, progress_bar,
    receipt, simple_table, table, Column,
};

pub use format::{format_amount, format_grams, format_kcal, format_percent, short_id, truncate};
