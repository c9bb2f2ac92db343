//! Interactive prompts for fields missing from the command line.

use dialoguer::{theme::ColorfulTheme, Input, Select};

use nutrition_core::MealType;

use crate::errors::CliError;

fn missing(flag: &str) -> anyhow::Error {
    CliError::validation(format!("Missing --{}", flag))
        .with_hint("Pass every field as a flag when prompts are disabled.")
        .into()
}

/// Return `value`, or prompt for it when interactive.
pub fn require_text(
    value: Option<String>,
    flag: &str,
    prompt: &str,
    interactive: bool,
) -> anyhow::Result<String> {
    if let Some(value) = value {
        return Ok(value);
    }
    if !interactive {
        return Err(missing(flag));
    }
    Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .interact_text()
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", flag, e))
}

/// Return `value`, or prompt for a number when interactive.
pub fn require_amount(
    value: Option<f64>,
    flag: &str,
    prompt: &str,
    interactive: bool,
) -> anyhow::Result<f64> {
    if let Some(value) = value {
        return Ok(value);
    }
    if !interactive {
        return Err(missing(flag));
    }
    Input::<f64>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .validate_with(|input: &f64| -> Result<(), &str> {
            if input.is_finite() && *input >= 0.0 {
                Ok(())
            } else {
                Err("Enter a non-negative number")
            }
        })
        .interact_text()
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", flag, e))
}

/// Pick a meal type from a list when interactive; otherwise `fallback`.
pub fn select_meal_type(fallback: MealType, interactive: bool) -> anyhow::Result<MealType> {
    if !interactive {
        return Ok(fallback);
    }
    let labels: Vec<&str> = MealType::ALL.iter().map(|m| m.as_str()).collect();
    let default_index = MealType::ALL
        .iter()
        .position(|m| *m == fallback)
        .unwrap_or(0);
    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Meal")
        .items(&labels)
        .default(default_index)
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read meal: {}", e))?;
    Ok(MealType::ALL[index])
}
