use nutrition_core::{macro_consistency, LedgerError};

use crate::app::AppContext;
use crate::cli::ShowArgs;
use crate::helpers::parse_entry_id;
use crate::output::{entry_json, print_entry};

pub fn handle_show(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let id = parse_entry_id(&args.id)?;
    let session = ctx.open_session()?;
    let entry = session
        .ledger()
        .get(&id)
        .ok_or(LedgerError::NotFound(id))?;

    if args.json {
        let check = macro_consistency(entry.calories, entry.protein, entry.carbs, entry.fats);
        println!("{}", serde_json::to_string_pretty(&entry_json(entry, &check)?)?);
    } else {
        print_entry(&ctx.ui_context(false, None), entry);
    }
    Ok(())
}
