use nutrition_core::macro_consistency;

use crate::app::AppContext;
use crate::cli::CheckArgs;
use crate::errors::CliError;
use crate::output::{macro_check_line, to_json};

pub fn handle_check(ctx: &AppContext, args: &CheckArgs) -> anyhow::Result<()> {
    for (flag, value) in [
        ("calories", args.calories),
        ("protein", args.protein),
        ("carbs", args.carbs),
        ("fats", args.fats),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(CliError::validation(format!(
                "--{} must be a non-negative number",
                flag
            ))
            .into());
        }
    }

    let check = macro_consistency(args.calories, args.protein, args.carbs, args.fats);
    let ui_ctx = ctx.ui_context(args.json, None);
    if ui_ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&to_json(&check)?)?);
    } else {
        println!(
            "{}",
            macro_check_line(&ui_ctx, check.calculated, check.difference, check.is_consistent)
        );
    }
    Ok(())
}
