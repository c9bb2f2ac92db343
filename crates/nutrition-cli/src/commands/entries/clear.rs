use dialoguer::{theme::ColorfulTheme, Confirm};

use nutrition_core::SnapshotStore;

use crate::app::AppContext;
use crate::cli::ClearArgs;
use crate::errors::CliError;
use crate::ui::{badge, print, receipt, Badge, OutputMode, UiContext};

pub fn handle_clear(ctx: &AppContext, args: &ClearArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(false, None);

    if !args.yes {
        if !UiContext::is_interactive() {
            return Err(CliError::validation("Refusing to clear entries without confirmation")
                .with_hint("Pass --yes to clear every entry.")
                .into());
        }
        let proceed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Delete every logged meal?")
            .default(false)
            .interact()?;
        if !proceed {
            match ui_ctx.mode {
                OutputMode::Pretty => {
                    print(&ui_ctx, &badge(&ui_ctx, Badge::Warn, "Clear cancelled"));
                }
                OutputMode::Plain | OutputMode::Json => {
                    println!("status=cancelled");
                }
            }
            return Ok(());
        }
    }

    let mut session = ctx.open_session()?;
    let removed = session.clear()?;

    if !ctx.quiet() {
        let items = [
            ("Removed", removed.len().to_string()),
            ("Store", session.store().describe()),
        ];
        print(&ui_ctx, &receipt(&ui_ctx, "Cleared entries", &items));
    }
    Ok(())
}
