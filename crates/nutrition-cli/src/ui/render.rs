//! Rendering primitives for CLI output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{ASCII_MARKDOWN, NOTHING, UTF8_FULL};
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table as ComfyTable};

use super::context::UiContext;
use super::mode::OutputMode;
use super::theme::{styled, styles, Badge, BAR_EMPTY, BAR_FILLED};

/// Render a header line for a command.
///
/// Pretty mode: "Calories · command (context)"
/// Plain mode: "calories command"
pub fn header(ctx: &UiContext, command: &str, context: Option<&str>) -> String {
    match ctx.mode {
        OutputMode::Pretty => {
            let title = styled("Calories", styles::bold(), ctx.color);
            match context {
                Some(c) => format!("{} \u{00B7} {} ({})", title, command, c),
                None => format!("{} \u{00B7} {}", title, command),
            }
        }
        OutputMode::Plain => format!("calories {}", command),
        OutputMode::Json => String::new(),
    }
}

/// Render a badge with optional message.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let colored_badge = styled(kind.display(ctx.unicode), kind.style(), ctx.color);
    if message.is_empty() {
        colored_badge
    } else {
        format!("{} {}", colored_badge, message)
    }
}

/// Render a key-value pair.
///
/// Pretty mode: "Key: value" with dim key
/// Plain mode: "key=value"
pub fn kv(ctx: &UiContext, key: &str, value: &str) -> String {
    if ctx.mode.is_pretty() {
        let styled_key = styled(&format!("{}:", key), styles::dim(), ctx.color);
        format!("{} {}", styled_key, value)
    } else {
        format!("{}={}", key.to_lowercase().replace(' ', "_"), value)
    }
}

/// Render a hint line.
pub fn hint(ctx: &UiContext, text: &str) -> String {
    if ctx.mode.is_pretty() {
        let label = styled("Hint:", styles::dim(), ctx.color);
        format!("{} {}", label, text)
    } else {
        format!("hint={}", text)
    }
}

/// Render a receipt (summary block after an action).
///
/// Pretty mode: badge plus indented key-value pairs
/// Plain mode: `status=ok` plus key=value lines
pub fn receipt(ctx: &UiContext, title: &str, items: &[(&str, String)]) -> String {
    let mut lines = Vec::new();
    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Ok, title));
        for (key, value) in items {
            lines.push(format!("  {}", kv(ctx, key, value)));
        }
    } else {
        lines.push("status=ok".to_string());
        for (key, value) in items {
            lines.push(kv(ctx, key, value));
        }
    }
    lines.join("\n")
}

/// Column definition for table rendering.
#[derive(Debug, Clone)]
pub struct Column {
    pub header: &'static str,
    pub numeric: bool,
}

impl Column {
    pub const fn new(header: &'static str) -> Self {
        Self {
            header,
            numeric: false,
        }
    }

    /// Right-aligned column for amounts.
    pub const fn numeric(header: &'static str) -> Self {
        Self {
            header,
            numeric: true,
        }
    }
}

fn align_numeric_columns(table: &mut ComfyTable, columns: &[Column]) {
    for (i, col) in columns.iter().enumerate() {
        if col.numeric {
            if let Some(column) = table.column_mut(i) {
                column.set_cell_alignment(CellAlignment::Right);
            }
        }
    }
}

fn plain_rows(rows: &[Vec<String>]) -> String {
    rows.iter()
        .map(|row| row.join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a bordered table.
///
/// Pretty mode: comfy-table with borders
/// Plain mode: space-separated values, no header
pub fn table(ctx: &UiContext, columns: &[Column], rows: &[Vec<String>]) -> String {
    if !ctx.mode.is_pretty() {
        return plain_rows(rows);
    }

    let mut table = ComfyTable::new();
    if ctx.unicode {
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS);
    } else {
        table.load_preset(ASCII_MARKDOWN);
    }
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_width(ctx.width.min(u16::MAX as usize) as u16);
    table.set_header(columns.iter().map(|c| c.header).collect::<Vec<_>>());
    for row in rows {
        table.add_row(row);
    }
    align_numeric_columns(&mut table, columns);
    table.to_string()
}

/// Render a borderless table (for entry lists).
pub fn simple_table(ctx: &UiContext, columns: &[Column], rows: &[Vec<String>]) -> String {
    if !ctx.mode.is_pretty() {
        return plain_rows(rows);
    }

    let mut table = ComfyTable::new();
    table.load_preset(NOTHING);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let header_cells: Vec<Cell> = columns
        .iter()
        .map(|c| {
            let cell = Cell::new(c.header);
            if ctx.color {
                cell.add_attribute(Attribute::Dim)
            } else {
                cell
            }
        })
        .collect();
    table.set_header(header_cells);

    for i in 0..columns.len() {
        if let Some(column) = table.column_mut(i) {
            column.set_padding((0, 2));
        }
    }
    for row in rows {
        table.add_row(row);
    }
    align_numeric_columns(&mut table, columns);
    table.to_string()
}

/// Render a goal progress bar, e.g. `[#####-----]`.
pub fn progress_bar(ctx: &UiContext, percent: f64, width: usize) -> String {
    let clamped = percent.clamp(0.0, 100.0);
    let filled = ((clamped / 100.0) * width as f64).round() as usize;
    let bar = format!(
        "{}{}",
        BAR_FILLED.get(ctx.unicode).repeat(filled),
        BAR_EMPTY.get(ctx.unicode).repeat(width - filled)
    );
    let style = if clamped >= 100.0 {
        styles::ok()
    } else {
        styles::info()
    };
    format!("[{}]", styled(&bar, style, ctx.color))
}

/// Print to stdout unless in JSON mode.
pub fn print(ctx: &UiContext, message: &str) {
    if !ctx.mode.is_json() {
        println!("{}", message);
    }
}

/// Print an empty line (only in pretty mode).
pub fn blank_line(ctx: &UiContext) {
    if ctx.mode.is_pretty() {
        println!();
    }
}

/// Format an error message with optional hint.
///
/// Pretty mode: "[ERR] message" with "Hint: ..." on the next line
/// Plain mode: "error=message" with "hint=..."
pub fn error_message(ctx: &UiContext, message: &str, error_hint: Option<&str>) -> String {
    let mut lines = Vec::new();
    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Err, message));
        if let Some(h) = error_hint {
            lines.push(hint(ctx, h));
        }
    } else {
        lines.push(format!("error={}", message));
        if let Some(h) = error_hint {
            lines.push(format!("hint={}", h));
        }
    }
    lines.join("\n")
}

/// Print an error message to stderr with optional hint.
pub fn print_error(ctx: &UiContext, message: &str, error_hint: Option<&str>) {
    eprintln!("{}", error_message(ctx, message, error_hint));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_ctx() -> UiContext {
        UiContext {
            color: false,
            unicode: false,
            width: 80,
            mode: OutputMode::Plain,
        }
    }

    fn pretty_ctx() -> UiContext {
        UiContext {
            color: false,
            unicode: true,
            width: 80,
            mode: OutputMode::Pretty,
        }
    }

    #[test]
    fn test_header() {
        let h = header(&pretty_ctx(), "today", Some("2024-03-01"));
        assert!(h.contains("Calories"));
        assert!(h.contains("today (2024-03-01)"));
        assert_eq!(header(&plain_ctx(), "today", None), "calories today");
    }

    #[test]
    fn test_badge_ok() {
        let b = badge(&plain_ctx(), Badge::Ok, "Done");
        assert_eq!(b, "[OK] Done");
    }

    #[test]
    fn test_kv() {
        let line = kv(&pretty_ctx(), "Meal", "Lunch");
        assert!(line.contains("Meal:"));
        assert!(line.contains("Lunch"));
        assert_eq!(kv(&plain_ctx(), "Meal Type", "Lunch"), "meal_type=Lunch");
    }

    #[test]
    fn test_hint() {
        assert!(hint(&pretty_ctx(), "try this").contains("Hint:"));
        assert_eq!(hint(&plain_ctx(), "try this"), "hint=try this");
    }

    #[test]
    fn test_receipt_plain() {
        let items = [("ID", "7a2e3c0b".to_string()), ("Food", "Oats".to_string())];
        let r = receipt(&plain_ctx(), "Added entry", &items);
        assert_eq!(r, "status=ok\nid=7a2e3c0b\nfood=Oats");
    }

    #[test]
    fn test_receipt_pretty() {
        let items = [("ID", "7a2e3c0b".to_string())];
        let r = receipt(&pretty_ctx(), "Added entry", &items);
        assert!(r.contains("[\u{2713}] Added entry"));
        assert!(r.contains("  ID: 7a2e3c0b"));
    }

    #[test]
    fn test_table_plain() {
        let columns = [Column::new("Meal"), Column::numeric("kcal")];
        let rows = vec![vec!["Lunch".to_string(), "450".to_string()]];
        assert_eq!(table(&plain_ctx(), &columns, &rows), "Lunch 450");
    }

    #[test]
    fn test_table_pretty_keeps_headers_when_empty() {
        let columns = [Column::new("Meal"), Column::numeric("kcal")];
        let t = table(&pretty_ctx(), &columns, &[]);
        assert!(t.contains("Meal"));
        assert!(t.contains("kcal"));
    }

    #[test]
    fn test_simple_table() {
        let columns = [Column::new("ID"), Column::new("Food")];
        let rows = vec![
            vec!["7a2e3c0b".to_string(), "Oats".to_string()],
            vec!["9b3f4d1c".to_string(), "Soup".to_string()],
        ];
        let plain = simple_table(&plain_ctx(), &columns, &rows);
        assert_eq!(plain.lines().count(), 2);

        let pretty = simple_table(&pretty_ctx(), &columns, &rows);
        assert!(pretty.contains("ID"));
        assert!(pretty.contains("Soup"));
    }

    #[test]
    fn test_progress_bar() {
        let ctx = plain_ctx();
        assert_eq!(progress_bar(&ctx, 50.0, 10), "[#####-----]");
        assert_eq!(progress_bar(&ctx, 0.0, 4), "[----]");
        assert_eq!(progress_bar(&ctx, 250.0, 4), "[####]");
    }

    #[test]
    fn test_error_message() {
        let e = error_message(&pretty_ctx(), "Entry not found", Some("Run list"));
        assert!(e.contains("[\u{2717}] Entry not found"));
        assert!(e.contains("Hint: Run list"));

        let e = error_message(&plain_ctx(), "Entry not found", Some("Run list"));
        assert_eq!(e, "error=Entry not found\nhint=Run list");
    }
}
