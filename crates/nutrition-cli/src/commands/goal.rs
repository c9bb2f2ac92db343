//! Show and change the daily goals stored in the config file.

use nutrition_core::{Goal, Nutrient};

use crate::app::{resolve_config_path, AppContext};
use crate::cli::{GoalSetArgs, GoalShowArgs};
use crate::config::{read_config, write_config, CaloriesConfig};
use crate::errors::CliError;
use crate::ui::{format_amount, kv, print, receipt};

pub fn handle_goal_show(ctx: &AppContext, args: &GoalShowArgs) -> anyhow::Result<()> {
    let goal = ctx.goal()?;
    let ui_ctx = ctx.ui_context(args.json, None);
    if ui_ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&goal)?);
        return Ok(());
    }
    for nutrient in Nutrient::ALL {
        let value = format!("{} {}", format_amount(goal.get(nutrient)), nutrient.unit());
        print(&ui_ctx, &kv(&ui_ctx, nutrient.as_str(), &value));
    }
    Ok(())
}

fn apply_targets(goal: &mut Goal, args: &GoalSetArgs) -> anyhow::Result<bool> {
    let mut changed = false;
    for (nutrient, value) in [
        (Nutrient::Calories, args.calories),
        (Nutrient::Protein, args.protein),
        (Nutrient::Carbs, args.carbs),
        (Nutrient::Fats, args.fats),
    ] {
        if let Some(target) = value {
            goal.set(nutrient, target)?;
            changed = true;
        }
    }
    Ok(changed)
}

pub fn handle_goal_set(ctx: &AppContext, args: &GoalSetArgs) -> anyhow::Result<()> {
    let config_path = resolve_config_path()?;
    let mut config = if config_path.exists() {
        read_config(&config_path)?
    } else {
        CaloriesConfig::new(ctx.store_path()?, ctx.backend()?, None)
    };

    if !apply_targets(&mut config.goals, args)? {
        return Err(CliError::validation("Nothing to change")
            .with_hint("Pass at least one of --calories, --protein, --carbs, --fats.")
            .into());
    }
    write_config(&config_path, &config)?;

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false, None);
        let items: Vec<(&str, String)> = Nutrient::ALL
            .iter()
            .map(|n| (n.as_str(), format_amount(config.goals.get(*n))))
            .collect();
        print(&ui_ctx, &receipt(&ui_ctx, "Updated goals", &items));
    }
    Ok(())
}
