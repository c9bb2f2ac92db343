use std::path::PathBuf;

use tracing::info;

use nutrition_core::SnapshotStore;

use crate::app::{
    open_store, resolve_backend, resolve_config_path, resolve_store_path, AppContext,
};
use crate::cli::InitArgs;
use crate::config::{write_config, CaloriesConfig};
use crate::helpers::parse_timezone;
use crate::ui::{hint, print, receipt};

pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let cli = ctx.cli();
    let explicit = args.path.as_deref().or(cli.store.as_deref()).map(PathBuf::from);
    let backend = resolve_backend(cli.backend.as_deref(), explicit.as_deref(), None)?;
    let store_path = resolve_store_path(explicit.as_deref(), None, backend)?;
    let timezone = match args.timezone.as_deref() {
        Some(value) => parse_timezone(value)?,
        None => None,
    };

    let config_path = resolve_config_path()?;
    if config_path.exists() {
        return Err(anyhow::anyhow!(
            "Config already exists at {}",
            config_path.display()
        ));
    }

    let mut store = open_store(backend, &store_path)?;
    let existing = store.load()?;
    if existing.is_empty() {
        store.save(&[])?;
    }
    info!(store = %store.describe(), entries = existing.len(), "store ready");

    let config = CaloriesConfig::new(store_path.clone(), backend, timezone);
    write_config(&config_path, &config)?;

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false, None);
        let items = [
            ("Config", config_path.display().to_string()),
            ("Store", store_path.display().to_string()),
            ("Backend", backend.to_string()),
        ];
        print(&ui_ctx, &receipt(&ui_ctx, "Initialized calories", &items));
        if ui_ctx.mode.is_pretty() {
            print(
                &ui_ctx,
                &hint(
                    &ui_ctx,
                    "calories add --food Oats --calories 300 --protein 10 --carbs 54 --fats 5",
                ),
            );
        }
    }
    Ok(())
}
