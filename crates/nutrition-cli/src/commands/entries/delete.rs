use crate::app::AppContext;
use crate::cli::DeleteArgs;
use crate::helpers::parse_entry_id;
use crate::ui::{print, receipt};

pub fn handle_delete(ctx: &AppContext, args: &DeleteArgs) -> anyhow::Result<()> {
    let id = parse_entry_id(&args.id)?;
    let mut session = ctx.open_session()?;
    let entry = session.delete(&id)?;

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false, None);
        let items = [
            ("ID", entry.id.to_string()),
            ("Food", entry.food_name),
        ];
        print(&ui_ctx, &receipt(&ui_ctx, "Deleted entry", &items));
    }
    Ok(())
}
